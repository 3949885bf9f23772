//! TMP1xx temperature sensor driver
//!
//! The board may carry one of three TMP1xx variants at different I²C
//! addresses. Detection sweeps a candidate table and keeps the first
//! address that answers a result-register read; the result register index
//! differs per variant, so it travels with the address.
//!
//! On the host the bus is simulated with process-global knobs so tests and
//! the sim binary can set the temperature and inject read failures.

use log::info;

use crate::error::SensorError;

/// One detectable sensor variant.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    address: u8,
    result_reg: u8,
    id: &'static str,
}

/// Probe order matters: the first responder wins.
const CANDIDATES: [Candidate; 3] = [
    Candidate { address: 0x48, result_reg: 0x00, id: "11X" },
    Candidate { address: 0x49, result_reg: 0x00, id: "116" },
    Candidate { address: 0x41, result_reg: 0x01, id: "006" },
];

/// Convert a raw big-endian result-register reading to whole °C.
///
/// The device reports 1/128 °C per LSB. The sign fix-up for negative
/// readings mirrors the vendor reference code: the scaled value is widened
/// back to a negative 13-bit reading when the raw MSB is set.
fn convert(rx: [u8; 2]) -> i16 {
    let raw = ((u16::from(rx[0]) << 8) | u16::from(rx[1])) as i16;
    let mut t = (f32::from(raw) * 0.007_812_5) as i16;
    if rx[0] & 0x80 != 0 {
        t |= 0xF000u16 as i16;
    }
    t
}

// ---------------------------------------------------------------------------
// Device driver
// ---------------------------------------------------------------------------

#[cfg(target_os = "espidf")]
pub struct TemperatureSensor {
    i2c: esp_idf_hal::i2c::I2cDriver<'static>,
    address: u8,
    result_reg: u8,
}

#[cfg(target_os = "espidf")]
impl TemperatureSensor {
    const I2C_TIMEOUT: u32 = 100;

    /// Sweep the candidate table on the given bus and latch onto the first
    /// sensor that answers.
    pub fn probe(mut i2c: esp_idf_hal::i2c::I2cDriver<'static>) -> Result<Self, SensorError> {
        for c in CANDIDATES {
            let mut rx = [0u8; 2];
            match i2c.write_read(c.address, &[c.result_reg], &mut rx, Self::I2C_TIMEOUT) {
                Ok(()) => {
                    info!("Detected TMP{} at I2C address 0x{:02x}", c.id, c.address);
                    return Ok(Self { i2c, address: c.address, result_reg: c.result_reg });
                }
                Err(_) => {
                    info!("No sensor at I2C address 0x{:02x}", c.address);
                }
            }
        }
        Err(SensorError::NotDetected)
    }

    /// Read and convert one sample.
    pub fn acquire(&mut self) -> Result<i16, SensorError> {
        let mut rx = [0u8; 2];
        self.i2c
            .write_read(self.address, &[self.result_reg], &mut rx, Self::I2C_TIMEOUT)
            .map_err(|_| SensorError::BusTransfer)?;
        Ok(convert(rx))
    }
}

// ---------------------------------------------------------------------------
// Host simulation
// ---------------------------------------------------------------------------

#[cfg(not(target_os = "espidf"))]
mod sim {
    use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

    // 21 °C in raw result-register units (1/128 °C per LSB).
    pub static SIM_RAW: AtomicU16 = AtomicU16::new(21 * 128);
    pub static SIM_FAIL: AtomicBool = AtomicBool::new(false);

    /// Point the simulated sensor at a temperature in whole °C.
    pub fn set_temperature_c(c: i16) {
        SIM_RAW.store(((c as i32) * 128) as u16, Ordering::Relaxed);
    }

    /// Make every subsequent read fail (or succeed again).
    pub fn set_failing(failing: bool) {
        SIM_FAIL.store(failing, Ordering::Relaxed);
    }
}

#[cfg(not(target_os = "espidf"))]
pub use sim::{set_failing, set_temperature_c};

#[cfg(not(target_os = "espidf"))]
pub struct TemperatureSensor {
    _address: u8,
}

#[cfg(not(target_os = "espidf"))]
impl TemperatureSensor {
    /// Host probe always finds the first candidate.
    pub fn probe() -> Result<Self, SensorError> {
        let c = CANDIDATES[0];
        info!("(sim) Detected TMP{} at I2C address 0x{:02x}", c.id, c.address);
        Ok(Self { _address: c.address })
    }

    pub fn acquire(&mut self) -> Result<i16, SensorError> {
        use core::sync::atomic::Ordering;
        if sim::SIM_FAIL.load(Ordering::Relaxed) {
            return Err(SensorError::BusTransfer);
        }
        let raw = sim::SIM_RAW.load(Ordering::Relaxed);
        Ok(convert(raw.to_be_bytes()))
    }
}

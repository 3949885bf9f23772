//! Thermostat firmware — main entry point.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                   │
//! │                                                           │
//! │   HardwareAdapter              SerialConsole              │
//! │   (TemperaturePort+HeaterPort) (ReportSink)               │
//! │                                                           │
//! │   ─────────────── Port Trait Boundary ───────────────     │
//! │                                                           │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │        ThermostatService (pure logic)               │  │
//! │  │  TaskTable · Button/Heater FSMs · StatusReport      │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! │                                                           │
//! │   hw_timer tick ──▶ latches ──▶ one scheduler pass        │
//! └───────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::gpio::AnyIOPin;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::uart::{self, UartDriver};
use esp_idf_hal::units::Hertz;
use log::{error, info};

use thermostat::adapters::hardware::HardwareAdapter;
use thermostat::adapters::serial::SerialConsole;
use thermostat::app::service::ThermostatService;
use thermostat::config::SystemConfig;
use thermostat::drivers::{hw_init, hw_timer};
use thermostat::sensors::temperature::TemperatureSensor;

/// Unrecoverable startup failure: log happened upstream, park forever.
/// Recovery is a power cycle, matching the report line the user sees.
fn halt() -> ! {
    #[allow(clippy::empty_loop)]
    loop {}
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Thermostat v{}                    ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = SystemConfig::default();

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        error!("HAL init failed: {} — halting", e);
        halt();
    }

    let peripherals = match Peripherals::take() {
        Ok(p) => p,
        Err(e) => {
            error!("peripherals unavailable: {} — halting", e);
            halt();
        }
    };

    // ── 3. I²C bus + sensor detection ─────────────────────────
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio14,
        peripherals.pins.gpio15,
        &I2cConfig::new().baudrate(Hertz(config.i2c_bit_rate_hz)),
    )?;

    let sensor = match TemperatureSensor::probe(i2c) {
        Ok(s) => s,
        Err(e) => {
            error!("{}", e);
            error!("Please power cycle your board by unplugging and plugging back in.");
            halt();
        }
    };
    let mut hw = HardwareAdapter::new(sensor);

    // ── 4. Serial console ─────────────────────────────────────
    let uart = UartDriver::new(
        peripherals.uart1,
        peripherals.pins.gpio17,
        peripherals.pins.gpio18,
        Option::<AnyIOPin>::None,
        Option::<AnyIOPin>::None,
        &uart::config::Config::default().baudrate(Hertz(config.uart_baud)),
    )?;
    let mut console = SerialConsole::new(uart);

    // ── 5. Service + tick timer ───────────────────────────────
    let tick_period_ms = config.tick_period_ms;
    let mut svc = ThermostatService::new(config);

    // One reading before the loop so the first control pass sees real data.
    svc.prime(&mut hw, &mut console);

    hw_timer::start_tick_timer(tick_period_ms);
    info!("entering control loop");
    svc.run_forever(&mut hw, &mut console)
}

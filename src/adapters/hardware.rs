//! Hardware adapter — bridges real peripherals to the port traits.
//!
//! Owns the temperature sensor and drives the heater output. This is the
//! only module the thermostat binary needs between the service and the
//! board. On non-espidf targets the sensor reads the simulated bus and
//! the heater write is a no-op behind the same call.

use crate::app::ports::{HeaterPort, TemperaturePort};
use crate::drivers::hw_init;
use crate::error::SensorError;
use crate::pins;
use crate::sensors::temperature::TemperatureSensor;

pub struct HardwareAdapter {
    sensor: TemperatureSensor,
    heater_on: bool,
}

impl HardwareAdapter {
    pub fn new(sensor: TemperatureSensor) -> Self {
        Self { sensor, heater_on: false }
    }

    /// Last level driven onto the heater pin.
    pub fn heater_on(&self) -> bool {
        self.heater_on
    }
}

// ── TemperaturePort implementation ────────────────────────────

impl TemperaturePort for HardwareAdapter {
    fn acquire(&mut self) -> Result<i16, SensorError> {
        self.sensor.acquire()
    }
}

// ── HeaterPort implementation ─────────────────────────────────

impl HeaterPort for HardwareAdapter {
    fn set_heater(&mut self, on: bool) {
        self.heater_on = on;
        hw_init::gpio_write(pins::HEATER_GPIO, on);
    }
}

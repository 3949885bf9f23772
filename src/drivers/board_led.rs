//! Board LED driver.
//!
//! Thin level-holding wrapper over an `embedded-hal` output pin. The
//! thermostat drives the heater indicator through it; the `serialcmd`
//! console drives the command indicator. Pin errors are absorbed and
//! logged so callers stay infallible, matching the heater port contract.

use embedded_hal::digital::OutputPin;
use log::warn;

pub struct BoardLed<P: OutputPin> {
    pin: P,
    level: bool,
}

impl<P: OutputPin> BoardLed<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, level: false }
    }

    /// Drive the pin and remember the commanded level.
    pub fn set_level(&mut self, high: bool) {
        self.level = high;
        let res = if high { self.pin.set_high() } else { self.pin.set_low() };
        if res.is_err() {
            warn!("board_led: pin write failed");
        }
    }

    /// Last commanded level.
    pub fn current(&self) -> bool {
        self.level
    }
}

/// Simulated output pin for host builds and tests.
#[cfg(not(target_os = "espidf"))]
#[derive(Debug, Default)]
pub struct SimPin {
    pub high: bool,
}

#[cfg(not(target_os = "espidf"))]
impl embedded_hal::digital::ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

#[cfg(not(target_os = "espidf"))]
impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_commanded_level() {
        let mut led = BoardLed::new(SimPin::default());
        assert!(!led.current());
        led.set_level(true);
        assert!(led.current());
        led.set_level(false);
        assert!(!led.current());
    }
}

//! Port traits — the application's view of hardware
//!
//! Three narrow seams cover the thermostat loop: a temperature source, a
//! heater output, and a line sink for status and diagnostic text. The
//! `serialcmd` console binary needs no port layer of its own; it drives the
//! serial console and board LED drivers directly, as it has no
//! host-testable loop behind them.

use crate::error::SensorError;

/// Source of temperature readings (whole °C).
pub trait TemperaturePort {
    /// Take one reading. A transient bus failure is an error; the caller
    /// decides whether to retain the previous value.
    fn acquire(&mut self) -> Result<i16, SensorError>;
}

/// Heater output stage. Setting the level is infallible at this seam;
/// adapters absorb and log pin errors.
pub trait HeaterPort {
    fn set_heater(&mut self, on: bool);
}

/// Sink for complete output lines (status reports, diagnostics).
pub trait ReportSink {
    fn emit_line(&mut self, line: &str);
}

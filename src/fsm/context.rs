//! Shared control context
//!
//! One struct holds everything the task machines read and write: the
//! measured temperature, the setpoint, the heater demand, the report
//! counter, and the per-pass button latches. It is threaded mutably
//! through each scheduler pass, so at most one machine writes any field
//! at a time.

use crate::config::SystemConfig;

/// Live control state, owned by the service and lent to each task step.
#[derive(Debug, Clone)]
pub struct ControlContext {
    /// Desired temperature (°C).
    pub setpoint_c: i16,
    /// Most recent valid sensor reading (°C).
    pub measured_c: i16,
    /// Heater demand as decided by the last control step.
    pub heater_on: bool,
    /// Reports emitted since boot (wraps).
    pub report_count: u32,
    /// Up-button press observed since the last button step.
    pub up_pressed: bool,
    /// Down-button press observed since the last button step.
    pub down_pressed: bool,
    /// Configuration snapshot taken at construction.
    pub config: SystemConfig,
}

impl ControlContext {
    pub fn new(config: SystemConfig) -> Self {
        Self {
            setpoint_c: config.initial_setpoint_c,
            measured_c: 0,
            heater_on: false,
            report_count: 0,
            up_pressed: false,
            down_pressed: false,
            config,
        }
    }
}

//! System configuration parameters
//!
//! All tunable parameters for the thermostat: the base tick period, the
//! per-task firing periods, and the initial control values. Periods share
//! the tick period's unit (milliseconds); a task is due whenever its
//! accumulated elapsed time reaches its period.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Timing ---
    /// Base tick period (milliseconds) — the hardware timer interval.
    pub tick_period_ms: u32,
    /// Temperature acquisition task period (milliseconds).
    pub sensor_period_ms: u32,
    /// Button check task period (milliseconds), shared by both buttons.
    pub button_period_ms: u32,
    /// Heater control task period (milliseconds).
    pub control_period_ms: u32,
    /// Status report task period (milliseconds).
    pub report_period_ms: u32,

    // --- Control ---
    /// Setpoint at power-on (°C).
    pub initial_setpoint_c: i16,

    // --- Buses ---
    /// I²C bit rate for the temperature sensor (Hz).
    pub i2c_bit_rate_hz: u32,
    /// UART baud rate for the console.
    pub uart_baud: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Timing — 100 ms base tick; every task is due on every tick
            // with these periods, matching the reference configuration.
            tick_period_ms: 100,
            sensor_period_ms: 50,
            button_period_ms: 20,
            control_period_ms: 50,
            report_period_ms: 100,

            // Control
            initial_setpoint_c: 22,

            // Buses
            i2c_bit_rate_hz: 400_000,
            uart_baud: 115_200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = SystemConfig::default();
        assert!(c.tick_period_ms > 0);
        assert!(c.sensor_period_ms > 0);
        assert!(c.button_period_ms > 0);
        assert!(c.control_period_ms > 0);
        assert!(c.report_period_ms > 0);
        assert!(c.uart_baud > 0);
        assert!(c.i2c_bit_rate_hz > 0);
    }

    #[test]
    fn serde_roundtrip() {
        let c = SystemConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: SystemConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c.tick_period_ms, c2.tick_period_ms);
        assert_eq!(c.initial_setpoint_c, c2.initial_setpoint_c);
        assert_eq!(c.report_period_ms, c2.report_period_ms);
    }

    #[test]
    fn control_slower_than_buttons() {
        let c = SystemConfig::default();
        assert!(
            c.button_period_ms <= c.control_period_ms,
            "buttons must be sampled at least as often as the control loop"
        );
        assert!(
            c.control_period_ms <= c.report_period_ms,
            "control must run at least as often as reporting"
        );
    }
}

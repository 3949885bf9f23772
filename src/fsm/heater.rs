//! Heater control state machine
//!
//! Asymmetric threshold comparison: the heater turns on only while the
//! measured temperature is strictly below the setpoint and turns off the
//! moment it reaches it. Equality always means off, so the machine cannot
//! chatter at the boundary within a single reading.
//!
//! The demand is written into the context on every firing, not only on
//! transitions, so the output stage re-asserts the pin each control period
//! and a glitched pin recovers within one period.

use super::context::ControlContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaterState {
    #[default]
    Off,
    On,
}

/// Advance the heater machine by one firing.
pub fn tick(state: HeaterState, ctx: &mut ControlContext) -> HeaterState {
    let next = match state {
        HeaterState::Off => {
            if ctx.measured_c < ctx.setpoint_c {
                HeaterState::On
            } else {
                HeaterState::Off
            }
        }
        HeaterState::On => {
            if ctx.measured_c >= ctx.setpoint_c {
                HeaterState::Off
            } else {
                HeaterState::On
            }
        }
    };
    ctx.heater_on = matches!(next, HeaterState::On);
    next
}

//! Button state machine
//!
//! One instance per button. The machine tracks the latched press level and
//! applies a single setpoint adjustment on each observed press: the latch is
//! consumed in the same step, so holding a button across several firings
//! still adjusts exactly once per interrupt edge.

use log::info;

use super::context::ControlContext;

/// Which way this button moves the setpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjust {
    Raise,
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
}

/// Advance one button machine by one firing.
pub fn tick(_state: ButtonState, adjust: Adjust, ctx: &mut ControlContext) -> ButtonState {
    let latched = match adjust {
        Adjust::Raise => ctx.up_pressed,
        Adjust::Lower => ctx.down_pressed,
    };

    if latched {
        match adjust {
            Adjust::Raise => {
                ctx.setpoint_c = ctx.setpoint_c.saturating_add(1);
                ctx.up_pressed = false;
            }
            Adjust::Lower => {
                ctx.setpoint_c = ctx.setpoint_c.saturating_sub(1);
                ctx.down_pressed = false;
            }
        }
        info!("Setpoint adjusted to {}C", ctx.setpoint_c);
        ButtonState::Pressed
    } else {
        ButtonState::Released
    }
}

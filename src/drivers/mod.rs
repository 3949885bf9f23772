//! Low-level peripheral drivers.

pub mod board_led;
pub mod hw_init;
pub mod hw_timer;

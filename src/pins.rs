//! GPIO pin assignments for the thermostat board.
//!
//! Covers the pins the raw-sys drivers configure by number. The I²C and
//! UART pins are owned as typed peripherals by the binaries (gpio14/15
//! and gpio17/18 respectively).

// ---------------------------------------------------------------------------
// Heater output
// ---------------------------------------------------------------------------

/// Digital output driving the heater relay. The on-board red LED is wired
/// in parallel so the heater state is visible on the bench.
pub const HEATER_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Setpoint buttons (active-low momentary switches with external pull-ups)
// ---------------------------------------------------------------------------

/// Raises the setpoint by 1 °C per recognized press.
pub const BUTTON_UP_GPIO: i32 = 6;
/// Lowers the setpoint by 1 °C per recognized press.
pub const BUTTON_DOWN_GPIO: i32 = 7;

//! Finite state machines
//!
//! Every state machine here is a closed `enum` plus a pure-ish `tick`
//! function mapping `(state, inputs)` to the next state. Closed enums make
//! the machines total by construction: there is no out-of-range state to
//! guard against, and any mismatch between a task's slot and the machine it
//! expects resets to that machine's default state.
//!
//! ```text
//!            ┌──────────┐   latch set    ┌─────────┐
//!   buttons: │ Released │ ─────────────▶ │ Pressed │  (setpoint ±1 on entry)
//!            └──────────┘ ◀───────────── └─────────┘
//!                           latch clear
//!
//!            ┌─────┐  measured < setpoint  ┌────┐
//!   heater:  │ Off │ ────────────────────▶ │ On │
//!            └─────┘ ◀──────────────────── └────┘
//!                     measured >= setpoint
//! ```

pub mod button;
pub mod context;
pub mod heater;
pub mod recognizer;

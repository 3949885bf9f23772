//! Interrupt-to-main-loop latches
//!
//! The tick timer and the two button interrupts run in ISR context; the
//! scheduler runs in the main loop. Each crossing is a single `AtomicBool`
//! latch: the ISR stores `true`, the main loop consumes it.
//!
//! Discipline:
//! - Exactly one consumer per latch (the main loop).
//! - Button latches are consumed with `swap(false)`, so a press observed
//!   between passes is never lost and never counted twice.
//! - The tick latch is level-style: one scheduler pass per observed
//!   assertion, cleared after the pass. A tick raised while a pass is
//!   still running is lost — the accumulators advance once per pass, not
//!   per interrupt, so an overrun slips the schedule by a period.

use core::sync::atomic::{AtomicBool, Ordering};

static TICK_PENDING: AtomicBool = AtomicBool::new(false);
static UP_PRESSED: AtomicBool = AtomicBool::new(false);
static DOWN_PRESSED: AtomicBool = AtomicBool::new(false);

/// Called from the periodic tick timer ISR.
pub fn tick_isr_handler() {
    TICK_PENDING.store(true, Ordering::Release);
}

/// True when a tick has been raised since the last [`clear_tick`].
pub fn tick_pending() -> bool {
    TICK_PENDING.load(Ordering::Acquire)
}

/// Consume the current tick. Main loop only, after a completed pass.
pub fn clear_tick() {
    TICK_PENDING.store(false, Ordering::Release);
}

/// Called from the setpoint-up button ISR (falling edge).
pub fn up_isr_handler() {
    UP_PRESSED.store(true, Ordering::Release);
}

/// Called from the setpoint-down button ISR (falling edge).
pub fn down_isr_handler() {
    DOWN_PRESSED.store(true, Ordering::Release);
}

/// Take-and-clear the up latch. Main loop only.
pub fn take_up() -> bool {
    UP_PRESSED.swap(false, Ordering::AcqRel)
}

/// Take-and-clear the down latch. Main loop only.
pub fn take_down() -> bool {
    DOWN_PRESSED.swap(false, Ordering::AcqRel)
}

//! Property and fuzz-style tests for the state machines and scheduler.
//!
//! Runs on host (x86_64) only — proptest is not available for ESP32
//! targets. On ESP32, these tests are compiled out.

#![cfg(not(target_os = "espidf"))]

use proptest::prelude::*;
use thermostat::fsm::button::{self, Adjust, ButtonState};
use thermostat::fsm::context::ControlContext;
use thermostat::fsm::heater::{self, HeaterState};
use thermostat::fsm::recognizer::{self, EntryState};
use thermostat::config::SystemConfig;
use thermostat::scheduler::{Task, TaskKind};

// ── Recognizer totality and recoverability ────────────────────

proptest! {
    /// No byte sequence can wedge the recognizer: after arbitrary input, a
    /// command starting from a non-command byte is still recognized.
    #[test]
    fn recognizer_recovers_after_any_garbage(
        noise in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let mut state = EntryState::default();
        let mut flag = false;
        for &b in &noise {
            (state, flag) = recognizer::tick(state, b, flag);
        }

        // A delimiter byte, then a clean command must land whatever the
        // noise left behind.
        for &b in b"XON" {
            (state, flag) = recognizer::tick(state, b, flag);
        }
        prop_assert!(flag, "ON after a delimiter must set the flag");

        for &b in b"XOFF" {
            (state, flag) = recognizer::tick(state, b, flag);
        }
        prop_assert!(!flag, "OFF after a delimiter must clear the flag");
    }

    /// The flag is only ever raised by a completed `ON`; it drops when the
    /// machine lands in `Init` or completes an `OFF`, never elsewhere.
    #[test]
    fn flag_transitions_track_terminal_states(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let mut state = EntryState::default();
        let mut flag = false;
        for &b in &bytes {
            let before = flag;
            (state, flag) = recognizer::tick(state, b, before);
            if flag && !before {
                prop_assert!(
                    matches!(state, EntryState::SawOn),
                    "flag raised outside SawOn"
                );
            }
            if !flag && before {
                prop_assert!(
                    matches!(state, EntryState::Init | EntryState::SawOff),
                    "flag dropped outside Init/SawOff"
                );
            }
        }
    }
}

// ── Scheduler cadence ─────────────────────────────────────────

proptest! {
    /// With a unit tick, a task of period p fires on pass 0 and then on
    /// every p-th pass: after n passes it has fired 1 + (n-1)/p times.
    #[test]
    fn firing_count_matches_period(p in 1u32..50, n in 1u32..500) {
        let mut task = Task::new(TaskKind::Report, p);
        let mut fired = 0u32;
        for _ in 0..n {
            if task.elapsed_ms >= task.period_ms {
                fired += 1;
                task.elapsed_ms = 0;
            }
            task.elapsed_ms += 1;
        }
        prop_assert_eq!(fired, 1 + (n - 1) / p);
    }
}

// ── Button single-shot adjustment ─────────────────────────────

proptest! {
    /// However many firings happen after one latched press, the setpoint
    /// moves by exactly one degree.
    #[test]
    fn one_latch_one_adjustment(firings in 1usize..20, raise in any::<bool>()) {
        let mut ctx = ControlContext::new(SystemConfig::default());
        let before = ctx.setpoint_c;
        let adjust = if raise { Adjust::Raise } else { Adjust::Lower };
        if raise {
            ctx.up_pressed = true;
        } else {
            ctx.down_pressed = true;
        }

        let mut state = ButtonState::default();
        for _ in 0..firings {
            state = button::tick(state, adjust, &mut ctx);
        }

        let expected = if raise { before + 1 } else { before - 1 };
        prop_assert_eq!(ctx.setpoint_c, expected);
    }
}

// ── Heater hysteresis ─────────────────────────────────────────

proptest! {
    /// The heater demand is a pure function of the comparison, whatever
    /// state it starts in: below the setpoint it heats, at or above it
    /// does not.
    #[test]
    fn demand_follows_comparison(
        measured in -40i16..125,
        setpoint in -40i16..125,
        starts_on in any::<bool>(),
    ) {
        let mut ctx = ControlContext::new(SystemConfig::default());
        ctx.measured_c = measured;
        ctx.setpoint_c = setpoint;
        let start = if starts_on { HeaterState::On } else { HeaterState::Off };

        let next = heater::tick(start, &mut ctx);

        prop_assert_eq!(matches!(next, HeaterState::On), measured < setpoint);
        prop_assert_eq!(ctx.heater_on, measured < setpoint);
    }
}

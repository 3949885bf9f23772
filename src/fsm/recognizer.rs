//! Serial command recognizer
//!
//! Byte-at-a-time recognizer for the commands `ON` and `OFF` embedded
//! anywhere in a serial stream, driving an indicator flag. Used by the
//! `serialcmd` console binary.
//!
//! ```text
//!              'O'          'N'
//!   Init ────────────▶ SawO ────▶ SawOn ──┐ (indicator := true;
//!     ▲ (ind := false)   │ 'F'      ▲     │  holds until 'O')
//!     │                  ▼          └─────┘ ≠'O'
//!     │                SawOf ───▶ SawOff    (indicator := false)
//!     │                  'F'        │
//!     └─────────────────────────────┘
//! ```
//!
//! Transition oddity, kept deliberately: from `SawOf`, a byte other than
//! `F` while the indicator is on goes to `SawOn` rather than `Init`. A
//! broken `OFF` while lit therefore re-arms the on state instead of
//! clearing it. The long-deployed behavior is pinned by test.

/// Recognizer state. `SawOn` holds until another `'O'` arrives; `SawOff`
/// is a one-byte pulse back to `Init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryState {
    #[default]
    Init,
    SawO,
    SawOn,
    SawOf,
    SawOff,
}

/// Advance the recognizer by one input byte.
///
/// Returns the next state and the new indicator value. The indicator effect
/// is evaluated after the transition, so the byte that completes `ON` takes
/// effect immediately.
pub fn tick(state: EntryState, byte: u8, indicator: bool) -> (EntryState, bool) {
    let next = match state {
        EntryState::Init => {
            if byte == b'O' {
                EntryState::SawO
            } else {
                EntryState::Init
            }
        }
        EntryState::SawO => match byte {
            b'N' => EntryState::SawOn,
            b'F' => EntryState::SawOf,
            _ => EntryState::Init,
        },
        EntryState::SawOn => {
            if byte == b'O' {
                EntryState::SawO
            } else {
                EntryState::SawOn
            }
        }
        EntryState::SawOf => {
            if byte == b'F' {
                EntryState::SawOff
            } else if indicator {
                EntryState::SawOn
            } else {
                EntryState::Init
            }
        }
        EntryState::SawOff => EntryState::Init,
    };

    // Init douses the indicator; only the partial-match states carry it.
    let indicator = match next {
        EntryState::SawOn => true,
        EntryState::Init | EntryState::SawOff => false,
        EntryState::SawO | EntryState::SawOf => indicator,
    };

    (next, indicator)
}

/// Indicator LED state machine, a pure level follower over the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorState {
    #[default]
    Off,
    On,
}

/// Advance the indicator machine: track the recognizer's flag.
pub fn indicator_tick(_state: IndicatorState, flag: bool) -> IndicatorState {
    if flag {
        IndicatorState::On
    } else {
        IndicatorState::Off
    }
}

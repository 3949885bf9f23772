//! Status report formatting
//!
//! Fixed-width frame emitted once per report period:
//!
//! ```text
//! <MM,SS,A,TTTT>
//! ```
//!
//! measured °C, setpoint °C, heater actuation (0/1), and the wrapping
//! report counter, each zero-padded. The frame is fixed-shape so downstream
//! log tooling can parse it by position.

use core::fmt::Write as _;

use crate::fsm::context::ControlContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub measured_c: i16,
    pub setpoint_c: i16,
    pub heater_on: bool,
    pub count: u32,
}

impl StatusReport {
    pub fn from_context(ctx: &ControlContext) -> Self {
        Self {
            measured_c: ctx.measured_c,
            setpoint_c: ctx.setpoint_c,
            heater_on: ctx.heater_on,
            count: ctx.report_count,
        }
    }

    /// Render the wire line, CRLF-terminated.
    pub fn line(&self) -> heapless::String<32> {
        let mut s = heapless::String::new();
        // 32 bytes is ample for the widest i16/u32 renderings; a formatting
        // overflow would only truncate the frame.
        let _ = write!(
            s,
            "<{:02},{:02},{},{:04}>\r\n",
            self.measured_c,
            self.setpoint_c,
            u8::from(self.heater_on),
            self.count
        );
        s
    }
}

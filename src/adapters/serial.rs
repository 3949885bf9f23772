//! Serial console adapter.
//!
//! Status reports and diagnostics go out over the UART; the `serialcmd`
//! binary also reads command bytes from it. On the device this wraps an
//! `esp-idf-hal` UART driver; on the host, output lines go to the log and
//! input bytes come from stdin.

use crate::app::ports::ReportSink;
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Device console
// ---------------------------------------------------------------------------

#[cfg(target_os = "espidf")]
pub struct SerialConsole {
    uart: esp_idf_hal::uart::UartDriver<'static>,
}

#[cfg(target_os = "espidf")]
impl SerialConsole {
    pub fn new(uart: esp_idf_hal::uart::UartDriver<'static>) -> Self {
        Self { uart }
    }

    /// Block until one byte arrives.
    pub fn read_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        let n = self
            .uart
            .read(&mut buf, esp_idf_hal::delay::BLOCK)
            .map_err(|_| Error::Serial("UART read failed"))?;
        if n == 0 {
            return Err(Error::Serial("UART read returned no data"));
        }
        Ok(buf[0])
    }

    /// Write one byte (used for echo).
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.uart
            .write(&[byte])
            .map_err(|_| Error::Serial("UART write failed"))?;
        Ok(())
    }
}

#[cfg(target_os = "espidf")]
impl ReportSink for SerialConsole {
    fn emit_line(&mut self, line: &str) {
        // A dropped report is not worth stalling the control loop over;
        // the next period supersedes it anyway.
        if self.uart.write(line.as_bytes()).is_err() {
            log::warn!("serial: report write failed");
        }
    }
}

// ---------------------------------------------------------------------------
// Host console
// ---------------------------------------------------------------------------

#[cfg(not(target_os = "espidf"))]
pub struct SerialConsole;

#[cfg(not(target_os = "espidf"))]
impl SerialConsole {
    pub fn new() -> Self {
        Self
    }

    /// Block until one byte arrives on stdin.
    pub fn read_byte(&mut self) -> Result<u8> {
        use std::io::Read as _;
        let mut buf = [0u8; 1];
        let n = std::io::stdin()
            .read(&mut buf)
            .map_err(|_| Error::Serial("stdin read failed"))?;
        if n == 0 {
            return Err(Error::Serial("stdin closed"));
        }
        Ok(buf[0])
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        use std::io::Write as _;
        std::io::stdout()
            .write_all(&[byte])
            .map_err(|_| Error::Serial("stdout write failed"))?;
        Ok(())
    }
}

#[cfg(not(target_os = "espidf"))]
impl Default for SerialConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_os = "espidf"))]
impl ReportSink for SerialConsole {
    fn emit_line(&mut self, line: &str) {
        log::info!("report: {}", line.trim_end());
    }
}

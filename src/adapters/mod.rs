//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements                    | Connects to            |
//! |------------|-------------------------------|------------------------|
//! | `hardware` | TemperaturePort, HeaterPort   | TMP1xx on I²C, GPIO    |
//! | `serial`   | ReportSink                    | UART console           |
//!
//! On non-espidf targets both adapters fall back to cfg-gated simulation
//! paths (simulated sensor bus, log-backed console).

pub mod hardware;
pub mod serial;

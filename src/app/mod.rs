//! Application core — hardware-independent control logic
//!
//! Everything in here compiles and tests on the host. The only way the
//! application touches hardware is through the port traits in [`ports`];
//! the binaries plug in device adapters, the tests plug in mocks.

pub mod ports;
pub mod report;
pub mod service;

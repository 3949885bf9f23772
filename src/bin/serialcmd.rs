//! Serial command console — `ON`/`OFF` recognizer over UART.
//!
//! Standalone image for bring-up and bench testing: echoes every received
//! byte back to the sender and scans the stream for the `ON` and `OFF`
//! commands, driving the board LED accordingly. The LED lights as soon as
//! the console opens so a live board is distinguishable from a dead UART.
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::gpio::{AnyIOPin, PinDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::uart::{self, UartDriver};
use esp_idf_hal::units::Hertz;
use log::{error, info};

use thermostat::adapters::serial::SerialConsole;
use thermostat::config::SystemConfig;
use thermostat::drivers::board_led::BoardLed;
use thermostat::fsm::recognizer::{self, EntryState, IndicatorState};

fn halt() -> ! {
    #[allow(clippy::empty_loop)]
    loop {}
}

fn main() -> Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("serialcmd console v{}", env!("CARGO_PKG_VERSION"));

    let config = SystemConfig::default();
    let peripherals = match Peripherals::take() {
        Ok(p) => p,
        Err(e) => {
            error!("peripherals unavailable: {} — halting", e);
            halt();
        }
    };

    let uart = UartDriver::new(
        peripherals.uart1,
        peripherals.pins.gpio17,
        peripherals.pins.gpio18,
        Option::<AnyIOPin>::None,
        Option::<AnyIOPin>::None,
        &uart::config::Config::default().baudrate(Hertz(config.uart_baud)),
    )?;
    let mut console = SerialConsole::new(uart);

    // Console is open: light the LED so a silent terminal is still
    // distinguishable from a dead board. The recognizer owns the LED from
    // the first received byte on, so any non-command byte douses it.
    let mut led = BoardLed::new(PinDriver::output(peripherals.pins.gpio4)?);
    led.set_level(true);
    let mut indicator = false;

    let mut entry = EntryState::default();
    let mut led_sm = IndicatorState::Off;

    loop {
        let byte = match console.read_byte() {
            Ok(b) => b,
            Err(e) => {
                error!("console read failed: {} — halting", e);
                halt();
            }
        };

        // Echo first, then feed the recognizer.
        console.write_byte(byte)?;

        (entry, indicator) = recognizer::tick(entry, byte, indicator);
        led_sm = recognizer::indicator_tick(led_sm, indicator);
        led.set_level(matches!(led_sm, IndicatorState::On));
    }
}

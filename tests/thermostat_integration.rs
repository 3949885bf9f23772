//! End-to-end service tests with mock ports.
//!
//! The service is driven one scheduler pass at a time against a mock
//! hardware port and an in-memory line sink, exactly the way the firmware
//! binary drives it against the real adapters.

use thermostat::app::ports::{HeaterPort, ReportSink, TemperaturePort};
use thermostat::app::service::ThermostatService;
use thermostat::config::SystemConfig;
use thermostat::error::SensorError;
use thermostat::scheduler::SENSOR_READ_ERROR_LINE;

// ── Mock ports ────────────────────────────────────────────────

struct MockHw {
    reading: Result<i16, SensorError>,
    heater_sets: Vec<bool>,
}

impl MockHw {
    fn at(c: i16) -> Self {
        Self { reading: Ok(c), heater_sets: Vec::new() }
    }
}

impl TemperaturePort for MockHw {
    fn acquire(&mut self) -> Result<i16, SensorError> {
        self.reading
    }
}

impl HeaterPort for MockHw {
    fn set_heater(&mut self, on: bool) {
        self.heater_sets.push(on);
    }
}

#[derive(Default)]
struct VecSink {
    lines: Vec<String>,
}

impl ReportSink for VecSink {
    fn emit_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

fn service() -> ThermostatService {
    ThermostatService::new(SystemConfig::default())
}

// ── Startup behavior ──────────────────────────────────────────

#[test]
fn first_pass_runs_everything() {
    let mut svc = service();
    let mut hw = MockHw::at(18);
    let mut sink = VecSink::default();

    svc.run_pass(&mut hw, &mut sink);

    // Cold room, default 22C setpoint: heater demanded on the very first
    // pass, and the first report already carries the fresh reading.
    assert_eq!(svc.measured_c(), 18);
    assert!(svc.heater_on());
    assert_eq!(hw.heater_sets, vec![true]);
    assert_eq!(sink.lines, vec!["<18,22,1,0001>\r\n"]);
}

#[test]
fn prime_loads_reading_before_loop() {
    let mut svc = service();
    let mut hw = MockHw::at(27);
    let mut sink = VecSink::default();

    svc.prime(&mut hw, &mut sink);

    assert_eq!(svc.measured_c(), 27);
    // Priming is not a pass: no report, no heater action yet.
    assert!(sink.lines.is_empty());
    assert!(hw.heater_sets.is_empty());
}

#[test]
fn failed_prime_emits_diagnostic_and_continues() {
    let mut svc = service();
    let mut hw = MockHw::at(0);
    hw.reading = Err(SensorError::BusTransfer);
    let mut sink = VecSink::default();

    svc.prime(&mut hw, &mut sink);
    assert_eq!(sink.lines, vec![SENSOR_READ_ERROR_LINE]);

    // The loop still starts and runs on the default value.
    hw.reading = Ok(20);
    svc.run_pass(&mut hw, &mut sink);
    assert_eq!(svc.measured_c(), 20);
}

// ── Buttons ───────────────────────────────────────────────────

#[test]
fn one_press_adjusts_setpoint_exactly_once() {
    let mut svc = service();
    let mut hw = MockHw::at(22);
    let mut sink = VecSink::default();

    svc.note_buttons(true, false);
    svc.run_pass(&mut hw, &mut sink);
    assert_eq!(svc.setpoint_c(), 23);

    // Further passes without new presses leave the setpoint alone.
    for _ in 0..5 {
        svc.run_pass(&mut hw, &mut sink);
    }
    assert_eq!(svc.setpoint_c(), 23);
}

#[test]
fn simultaneous_presses_cancel_out() {
    let mut svc = service();
    let mut hw = MockHw::at(22);
    let mut sink = VecSink::default();

    svc.note_buttons(true, true);
    svc.run_pass(&mut hw, &mut sink);
    assert_eq!(svc.setpoint_c(), 22);
}

#[test]
fn press_moves_setpoint_seen_by_same_pass_control() {
    let mut svc = service();
    // Sitting exactly at setpoint: heater off.
    let mut hw = MockHw::at(22);
    let mut sink = VecSink::default();
    svc.run_pass(&mut hw, &mut sink);
    assert!(!svc.heater_on());

    // Raise the setpoint; the control step in the same pass acts on it.
    svc.note_buttons(true, false);
    svc.run_pass(&mut hw, &mut sink);
    assert_eq!(svc.setpoint_c(), 23);
    assert!(svc.heater_on());
}

// ── Heater control ────────────────────────────────────────────

#[test]
fn heater_converges_and_shuts_off_at_setpoint() {
    let mut svc = service();
    let mut hw = MockHw::at(19);
    let mut sink = VecSink::default();

    svc.run_pass(&mut hw, &mut sink);
    assert!(svc.heater_on());

    // Room warms up to the setpoint.
    hw.reading = Ok(22);
    svc.run_pass(&mut hw, &mut sink);
    assert!(!svc.heater_on());
    assert_eq!(hw.heater_sets, vec![true, false]);
}

#[test]
fn heater_level_reasserted_every_control_period() {
    let mut svc = service();
    let mut hw = MockHw::at(18);
    let mut sink = VecSink::default();

    for _ in 0..4 {
        svc.run_pass(&mut hw, &mut sink);
    }
    // No transitions after the first pass, yet the output is driven on
    // every firing.
    assert_eq!(hw.heater_sets, vec![true; 4]);
}

// ── Sensor failures ───────────────────────────────────────────

#[test]
fn transient_read_failure_retains_last_reading() {
    let mut svc = service();
    let mut hw = MockHw::at(19);
    let mut sink = VecSink::default();

    svc.run_pass(&mut hw, &mut sink);
    assert_eq!(svc.measured_c(), 19);

    hw.reading = Err(SensorError::BusTransfer);
    svc.run_pass(&mut hw, &mut sink);

    // Stale-but-valid: control keeps heating toward the setpoint.
    assert_eq!(svc.measured_c(), 19);
    assert!(svc.heater_on());
    assert_eq!(sink.lines[1], SENSOR_READ_ERROR_LINE);
    // The pass still finished with its report.
    assert_eq!(sink.lines[2], "<19,22,1,0002>\r\n");
}

// ── Reporting ─────────────────────────────────────────────────

#[test]
fn report_cadence_follows_configured_period() {
    let mut config = SystemConfig::default();
    config.tick_period_ms = 1;
    config.sensor_period_ms = 1;
    config.button_period_ms = 1;
    config.control_period_ms = 1;
    config.report_period_ms = 100;
    let mut svc = ThermostatService::new(config);
    let mut hw = MockHw::at(22);
    let mut sink = VecSink::default();

    for _ in 0..100 {
        svc.run_pass(&mut hw, &mut sink);
    }
    // Pass 0 fires (primed accumulator); the next firing needs 100 more
    // ticks of accumulation.
    assert_eq!(svc.report_count(), 1);

    svc.run_pass(&mut hw, &mut sink);
    assert_eq!(svc.report_count(), 2);
}

#[test]
fn report_line_is_fixed_shape() {
    let mut svc = service();
    let mut hw = MockHw::at(5);
    let mut sink = VecSink::default();

    svc.note_buttons(false, true);
    svc.run_pass(&mut hw, &mut sink);

    // Zero-padded two-digit temperatures, single actuation digit,
    // four-digit counter.
    assert_eq!(sink.lines, vec!["<05,21,1,0001>\r\n"]);
}

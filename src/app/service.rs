//! Thermostat service — the top-level control loop
//!
//! Owns the task table and the control context, and runs scheduler passes
//! against whatever port implementations it is handed. The binaries hand it
//! real hardware; the integration tests hand it mocks and drive passes one
//! at a time.

use log::info;

use crate::app::ports::{HeaterPort, ReportSink, TemperaturePort};
use crate::config::SystemConfig;
use crate::fsm::context::ControlContext;
use crate::latches;
use crate::scheduler::TaskTable;

pub struct ThermostatService {
    table: TaskTable,
    ctx: ControlContext,
}

impl ThermostatService {
    pub fn new(config: SystemConfig) -> Self {
        let table = TaskTable::reference_table(&config);
        let ctx = ControlContext::new(config);
        Self { table, ctx }
    }

    /// Take one priming reading before the loop starts, so the first
    /// control step never acts on an uninitialized temperature. A failed
    /// priming read is reported like any in-loop failure and leaves the
    /// default value in place.
    pub fn prime<H, S>(&mut self, hw: &mut H, sink: &mut S)
    where
        H: TemperaturePort,
        S: ReportSink,
    {
        match hw.acquire() {
            Ok(c) => {
                self.ctx.measured_c = c;
                info!("Initial temperature: {c}C (setpoint {}C)", self.ctx.setpoint_c);
            }
            Err(e) => {
                log::warn!("priming temperature read failed: {e}");
                sink.emit_line(crate::scheduler::SENSOR_READ_ERROR_LINE);
            }
        }
    }

    /// Fold externally observed button presses into the context latches.
    /// OR-semantics: a press already pending is never un-latched here.
    pub fn note_buttons(&mut self, up: bool, down: bool) {
        self.ctx.up_pressed |= up;
        self.ctx.down_pressed |= down;
    }

    /// Run exactly one scheduler pass.
    pub fn run_pass<H, S>(&mut self, hw: &mut H, sink: &mut S)
    where
        H: TemperaturePort + HeaterPort,
        S: ReportSink,
    {
        self.table.run_pass(&mut self.ctx, hw, sink);
    }

    /// Run the loop forever: wait for the tick latch, drain the button
    /// latches, run one pass, consume the tick.
    pub fn run_forever<H, S>(&mut self, hw: &mut H, sink: &mut S) -> !
    where
        H: TemperaturePort + HeaterPort,
        S: ReportSink,
    {
        loop {
            if latches::tick_pending() {
                self.note_buttons(latches::take_up(), latches::take_down());
                self.run_pass(hw, sink);
                latches::clear_tick();
            }

            // Host builds have no tick timer; sleep one period and raise
            // the latch ourselves so the loop behaves like the device.
            #[cfg(not(target_os = "espidf"))]
            {
                std::thread::sleep(std::time::Duration::from_millis(u64::from(
                    self.ctx.config.tick_period_ms,
                )));
                latches::tick_isr_handler();
            }
        }
    }

    // ── accessors, used by tests and the binaries' log lines ──

    pub fn setpoint_c(&self) -> i16 {
        self.ctx.setpoint_c
    }

    pub fn measured_c(&self) -> i16 {
        self.ctx.measured_c
    }

    pub fn heater_on(&self) -> bool {
        self.ctx.heater_on
    }

    pub fn report_count(&self) -> u32 {
        self.ctx.report_count
    }
}

//! Cooperative task scheduler
//!
//! A fixed table of periodic tasks driven by one base tick. Each pass walks
//! the table in order; a task fires when its elapsed-time accumulator has
//! reached its period, then every accumulator advances by one tick period.
//! Tasks are constructed with `elapsed = period`, so everything fires on
//! the very first pass and the system starts from a fully evaluated state.
//!
//! Table order is load-bearing: acquisition runs before control so a fresh
//! reading is acted on in the same pass, buttons run before control so a
//! press moves the setpoint the control step sees, and reporting runs last
//! so it observes the pass's final state.
//!
//! Dispatch is a closed enum, not function pointers: adding a task kind
//! without handling its step is a compile error.

use heapless::Vec;
use log::warn;

use crate::app::ports::{HeaterPort, ReportSink, TemperaturePort};
use crate::app::report::StatusReport;
use crate::config::SystemConfig;
use crate::fsm::button::{self, Adjust, ButtonState};
use crate::fsm::context::ControlContext;
use crate::fsm::heater::{self, HeaterState};

/// Diagnostic line emitted when a reading fails and the previous value is
/// retained.
pub const SENSOR_READ_ERROR_LINE: &str = "Error reading temperature sensor\r\n";

/// The five tasks of the thermostat loop, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    AcquireTemp,
    ButtonUp,
    ButtonDown,
    HeaterControl,
    Report,
}

/// Per-task machine state. Stateless tasks carry no machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Stateless,
    Button(ButtonState),
    Heater(HeaterState),
}

impl TaskKind {
    fn initial_state(self) -> TaskState {
        match self {
            TaskKind::ButtonUp | TaskKind::ButtonDown => TaskState::Button(ButtonState::default()),
            TaskKind::HeaterControl => TaskState::Heater(HeaterState::default()),
            TaskKind::AcquireTemp | TaskKind::Report => TaskState::Stateless,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Task {
    pub kind: TaskKind,
    pub state: TaskState,
    pub period_ms: u32,
    pub elapsed_ms: u32,
}

impl Task {
    pub fn new(kind: TaskKind, period_ms: u32) -> Self {
        Self {
            kind,
            state: kind.initial_state(),
            period_ms,
            // Primed so the task fires on the first pass.
            elapsed_ms: period_ms,
        }
    }
}

pub const TASK_COUNT: usize = 5;

/// The task table. Fixed capacity, filled once at startup.
#[derive(Debug, Clone)]
pub struct TaskTable {
    tasks: Vec<Task, TASK_COUNT>,
    tick_period_ms: u32,
}

impl TaskTable {
    /// Build the standard five-task table from configuration.
    pub fn reference_table(config: &SystemConfig) -> Self {
        let mut tasks = Vec::new();
        // Capacity equals the number of kinds; pushes cannot fail.
        let _ = tasks.push(Task::new(TaskKind::AcquireTemp, config.sensor_period_ms));
        let _ = tasks.push(Task::new(TaskKind::ButtonUp, config.button_period_ms));
        let _ = tasks.push(Task::new(TaskKind::ButtonDown, config.button_period_ms));
        let _ = tasks.push(Task::new(TaskKind::HeaterControl, config.control_period_ms));
        let _ = tasks.push(Task::new(TaskKind::Report, config.report_period_ms));
        Self { tasks, tick_period_ms: config.tick_period_ms }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Run one scheduler pass: fire every due task in table order, then
    /// advance all accumulators by one tick period.
    pub fn run_pass<H, S>(&mut self, ctx: &mut ControlContext, hw: &mut H, sink: &mut S)
    where
        H: TemperaturePort + HeaterPort,
        S: ReportSink,
    {
        for task in &mut self.tasks {
            if task.elapsed_ms >= task.period_ms {
                task.state = step(task.kind, task.state, ctx, hw, sink);
                task.elapsed_ms = 0;
            }
            task.elapsed_ms += self.tick_period_ms;
        }
    }
}

fn step<H, S>(
    kind: TaskKind,
    state: TaskState,
    ctx: &mut ControlContext,
    hw: &mut H,
    sink: &mut S,
) -> TaskState
where
    H: TemperaturePort + HeaterPort,
    S: ReportSink,
{
    match kind {
        TaskKind::AcquireTemp => {
            match hw.acquire() {
                Ok(c) => ctx.measured_c = c,
                Err(e) => {
                    // Retain the previous reading; control keeps running on
                    // stale-but-valid data.
                    warn!("temperature read failed: {e}");
                    sink.emit_line(SENSOR_READ_ERROR_LINE);
                }
            }
            TaskState::Stateless
        }
        TaskKind::ButtonUp => {
            let s = match state {
                TaskState::Button(s) => s,
                _ => ButtonState::default(),
            };
            TaskState::Button(button::tick(s, Adjust::Raise, ctx))
        }
        TaskKind::ButtonDown => {
            let s = match state {
                TaskState::Button(s) => s,
                _ => ButtonState::default(),
            };
            TaskState::Button(button::tick(s, Adjust::Lower, ctx))
        }
        TaskKind::HeaterControl => {
            let s = match state {
                TaskState::Heater(s) => s,
                _ => HeaterState::default(),
            };
            let next = heater::tick(s, ctx);
            // Re-asserted every firing, not just on transitions.
            hw.set_heater(ctx.heater_on);
            TaskState::Heater(next)
        }
        TaskKind::Report => {
            ctx.report_count = ctx.report_count.wrapping_add(1);
            let report = StatusReport::from_context(ctx);
            sink.emit_line(report.line().as_str());
            TaskState::Stateless
        }
    }
}

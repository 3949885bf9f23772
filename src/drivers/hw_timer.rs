//! Base tick timer using ESP-IDF's esp_timer API.
//!
//! One periodic timer raises the scheduler's tick latch. The callback runs
//! in the ESP timer task context (not ISR), so the atomic store in
//! `latches::tick_isr_handler()` is trivially safe there.
//!
//! On simulation targets the main loop self-ticks with `thread::sleep`, so
//! starting the timer is a logged no-op.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
static mut TICK_TIMER: esp_timer_handle_t = core::ptr::null_mut();

#[cfg(target_os = "espidf")]
unsafe extern "C" fn tick_cb(_arg: *mut core::ffi::c_void) {
    crate::latches::tick_isr_handler();
}

/// Start the base tick timer at the configured period.
#[cfg(target_os = "espidf")]
pub fn start_tick_timer(period_ms: u32) {
    // SAFETY: TICK_TIMER is written here once at boot from the single
    // main-task context before any callbacks fire. The callback only
    // raises an atomic latch, which is safe in any context.
    unsafe {
        let args = esp_timer_create_args_t {
            callback: Some(tick_cb),
            arg: core::ptr::null_mut(),
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: b"tick\0".as_ptr() as *const _,
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&args, &raw mut TICK_TIMER);
        if ret != ESP_OK {
            log::error!("hw_timer: tick timer create failed (rc={}) — scheduler will not run", ret);
            return;
        }
        let ret = esp_timer_start_periodic(TICK_TIMER, u64::from(period_ms) * 1_000);
        if ret != ESP_OK {
            log::error!("hw_timer: tick timer start failed (rc={})", ret);
            return;
        }
        info!("hw_timer: base tick started at {}ms", period_ms);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn start_tick_timer(period_ms: u32) {
    log::info!("hw_timer(sim): no tick timer, loop self-ticks every {}ms", period_ms);
}

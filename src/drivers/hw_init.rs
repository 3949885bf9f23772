//! One-shot hardware peripheral initialization.
//!
//! Configures the heater output, the two setpoint buttons (falling-edge
//! interrupts latching into [`crate::latches`]), and the GPIO ISR service
//! using raw ESP-IDF sys calls. Called once from `main()` before the tick
//! timer starts. Bus peripherals (I²C, UART) are brought up by the
//! adapters, which own their driver handles.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    IsrInstallFailed(i32),
    IsrHandlerFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::IsrInstallFailed(rc) => write!(f, "GPIO ISR service install failed (rc={})", rc),
            Self::IsrHandlerFailed(rc) => write!(f, "GPIO ISR handler add failed (rc={})", rc),
        }
    }
}

impl From<HwInitError> for crate::error::Error {
    fn from(_: HwInitError) -> Self {
        crate::error::Error::Init("peripheral init failed")
    }
}

#[cfg(target_os = "espidf")]
use log::info;

use crate::pins;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the tick timer starts;
    // single-threaded.
    unsafe {
        init_heater_output()?;
        init_button_inputs()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── Heater output ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_heater_output() -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::HEATER_GPIO,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }
    // Heater off until the first control pass decides otherwise.
    unsafe { gpio_set_level(pins::HEATER_GPIO, 0) };

    info!("hw_init: heater output configured");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_heater_output(). Main-loop only.
    unsafe {
        gpio_set_level(pin, if high { 1 } else { 0 });
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── Button inputs ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe extern "C" fn up_button_isr(_arg: *mut core::ffi::c_void) {
    crate::latches::up_isr_handler();
}

#[cfg(target_os = "espidf")]
unsafe extern "C" fn down_button_isr(_arg: *mut core::ffi::c_void) {
    crate::latches::down_isr_handler();
}

#[cfg(target_os = "espidf")]
unsafe fn init_button_inputs() -> Result<(), HwInitError> {
    for &pin in &[pins::BUTTON_UP_GPIO, pins::BUTTON_DOWN_GPIO] {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_NEGEDGE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed(ret));
        }
    }

    let ret = unsafe { gpio_install_isr_service(0) };
    // ESP_ERR_INVALID_STATE means the service is already installed.
    if ret != ESP_OK as i32 && ret != ESP_ERR_INVALID_STATE as i32 {
        return Err(HwInitError::IsrInstallFailed(ret));
    }

    let ret = unsafe {
        gpio_isr_handler_add(pins::BUTTON_UP_GPIO, Some(up_button_isr), core::ptr::null_mut())
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::IsrHandlerFailed(ret));
    }
    let ret = unsafe {
        gpio_isr_handler_add(pins::BUTTON_DOWN_GPIO, Some(down_button_isr), core::ptr::null_mut())
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::IsrHandlerFailed(ret));
    }

    info!("hw_init: button interrupts armed");
    Ok(())
}

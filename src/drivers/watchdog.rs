//! Task Watchdog Timer (TWDT) driver.
//!
//! Resets the device if the dispatch loop stops feeding it for longer than
//! `SystemConfig::watchdog_timeout_ms`. The main loop feeds once per poll.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: subscribes the calling task to the TWDT and resets it on
//! every feed. On host/test: never subscribed, feeds are only counted.

use log::{info, warn};

use crate::config::SystemConfig;

pub struct Watchdog {
    timeout_ms: u32,
    subscribed: bool,
    feeds: u64,
}

impl Watchdog {
    /// Configure the TWDT and subscribe the current task.
    ///
    /// A failed subscription is logged and the watchdog degrades to a
    /// counter; the loop keeps running unguarded.
    pub fn new(timeout_ms: u32) -> Self {
        let subscribed = subscribe_current_task(timeout_ms);
        if subscribed {
            info!("Watchdog: subscribed ({}ms timeout, panic on trigger)", timeout_ms);
        } else {
            warn!("Watchdog: not subscribed, loop is unguarded");
        }
        Self {
            timeout_ms,
            subscribed,
            feeds: 0,
        }
    }

    pub fn from_config(config: &SystemConfig) -> Self {
        Self::new(config.watchdog_timeout_ms)
    }

    /// Feed the watchdog. Must be called at least once per timeout period.
    pub fn feed(&mut self) {
        self.feeds = self.feeds.wrapping_add(1);
        if self.subscribed {
            reset_current_task();
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Feeds since construction (wraps at `u64::MAX`).
    pub fn feed_count(&self) -> u64 {
        self.feeds
    }
}

// ── Platform hooks ────────────────────────────────────────────

#[cfg(feature = "espidf")]
fn subscribe_current_task(timeout_ms: u32) -> bool {
    use esp_idf_sys::{ESP_OK, esp_task_wdt_add, esp_task_wdt_config_t, esp_task_wdt_reconfigure};

    let cfg = esp_task_wdt_config_t {
        timeout_ms,
        idle_core_mask: 0,
        trigger_panic: true,
    };
    // SAFETY: called once from the main task before the loop starts.
    let ret = unsafe { esp_task_wdt_reconfigure(&cfg) };
    if ret != ESP_OK {
        warn!("TWDT reconfigure returned {} (may already be configured)", ret);
    }

    // SAFETY: a null handle subscribes the calling task.
    let ret = unsafe { esp_task_wdt_add(core::ptr::null_mut()) };
    if ret != ESP_OK {
        warn!("TWDT add failed ({})", ret);
    }
    ret == ESP_OK
}

#[cfg(not(feature = "espidf"))]
fn subscribe_current_task(_timeout_ms: u32) -> bool {
    false
}

#[cfg(feature = "espidf")]
fn reset_current_task() {
    // SAFETY: only reached when the calling task is subscribed.
    unsafe {
        esp_idf_sys::esp_task_wdt_reset();
    }
}

#[cfg(not(feature = "espidf"))]
fn reset_current_task() {}

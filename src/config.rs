//! System configuration parameters
//!
//! All tunable parameters for the buzzer firmware. There is no persistence
//! layer: the compiled-in defaults are validated once at boot.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Hardware RX FIFO depth on ESP32-class UARTs. The driver ring buffer must
/// be strictly larger than this.
pub const UART_HW_FIFO_LEN: usize = 128;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Serial ---
    /// Command UART baud rate (8N1)
    pub baud_rate: u32,
    /// UART driver receive ring buffer size (bytes)
    pub uart_rx_buffer_bytes: usize,

    // --- Timing ---
    /// Longest a single poll waits for a byte (FreeRTOS ticks)
    pub poll_wait_ticks: u32,
    /// Task watchdog timeout (milliseconds)
    pub watchdog_timeout_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Serial
            baud_rate: 9600,
            uart_rx_buffer_bytes: 256,

            // Timing
            poll_wait_ticks: 1,
            watchdog_timeout_ms: 10_000,
        }
    }
}

impl SystemConfig {
    /// Range-check every field. Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<()> {
        if !(300..=5_000_000).contains(&self.baud_rate) {
            return Err(Error::Config("baud_rate must be within 300..=5000000"));
        }
        if self.uart_rx_buffer_bytes <= UART_HW_FIFO_LEN {
            return Err(Error::Config(
                "uart_rx_buffer_bytes must exceed the 128-byte hardware FIFO",
            ));
        }
        // Zero would spin the main task without ever yielding to idle.
        if self.poll_wait_ticks == 0 {
            return Err(Error::Config("poll_wait_ticks must be at least 1"));
        }
        if self.watchdog_timeout_ms < 1_000 {
            return Err(Error::Config("watchdog_timeout_ms must be at least 1000"));
        }
        Ok(())
    }
}

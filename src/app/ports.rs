//! Port traits — the hexagonal boundary between dispatch logic and hardware.
//!
//! ```text
//!   SerialPort ──▶ Dispatcher ──▶ BuzzerPort
//!                      │
//!                      └──▶ EventSink
//! ```
//!
//! Driven adapters (UART, GPIO, logger) implement these traits. The
//! [`Dispatcher`](super::service::Dispatcher) consumes them via generics, so
//! the core never touches a peripheral directly.

use super::events::AppEvent;
use super::level::PinLevel;

// ───────────────────────────────────────────────────────────────
// Serial port (driving adapter: UART → domain)
// ───────────────────────────────────────────────────────────────

/// Byte-oriented input channel carrying commands.
pub trait SerialPort {
    /// Error type for this channel.
    type Error: core::fmt::Debug;

    /// Take the next pending byte, if any.
    ///
    /// Returns `Ok(None)` when nothing is available. Implementations may wait
    /// briefly for input but must never block indefinitely.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

// ───────────────────────────────────────────────────────────────
// Buzzer port (driven adapter: domain → GPIO)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the single buzzer output.
pub trait BuzzerPort {
    /// Drive the pin to `level`. Always performs the write, even when the
    /// pin already holds that level.
    fn set_level(&mut self, level: PinLevel);

    /// Level most recently written.
    fn level(&self) -> PinLevel;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The dispatcher emits structured [`AppEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

/// Sink that discards every event.
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

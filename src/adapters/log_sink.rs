//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing dispatcher events to the `log`
//! facade (the ESP-IDF logger on target, UART0 TX in production).

use log::{info, trace};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(level) => {
                info!("START | buzzer={}", level);
            }
            AppEvent::LevelChanged { from, to } => {
                info!("LEVEL | {} -> {}", from, to);
            }
            AppEvent::ByteIgnored(byte) => {
                trace!("IGNORE | 0x{:02x}", byte);
            }
        }
    }
}

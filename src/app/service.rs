//! Command dispatcher — the whole control loop body.
//!
//! [`Dispatcher`] owns the pin level and a few diagnostic counters. Each
//! [`poll`](Dispatcher::poll) takes at most one byte from the
//! [`SerialPort`] and maps it through a two-edge transition table:
//!
//! ```text
//!            '1'                    '0'
//!   OFF ───────────▶ ON     ON ───────────▶ OFF
//!   (any other byte: self-loop, no side effect)
//! ```
//!
//! There is no failure path. Read errors look like "no input" and
//! unrecognised bytes are dropped.

use log::{debug, info};

use super::commands::Command;
use super::events::AppEvent;
use super::level::PinLevel;
use super::ports::{BuzzerPort, EventSink, SerialPort};

/// Result of one dispatcher cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// No byte was available.
    Idle,
    /// A command byte was consumed and written to the pin.
    Applied(Command),
    /// A non-command byte was consumed and dropped.
    Ignored(u8),
}

/// Counters since startup. Never influence dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub bytes_received: u64,
    pub commands_applied: u64,
    pub bytes_ignored: u64,
    pub read_errors: u64,
}

// ───────────────────────────────────────────────────────────────
// Dispatcher
// ───────────────────────────────────────────────────────────────

pub struct Dispatcher {
    level: PinLevel,
    stats: DispatchStats,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Construct with the pin assumed OFF. Call [`start`](Self::start) before
    /// polling so the hardware agrees.
    pub fn new() -> Self {
        Self {
            level: PinLevel::Off,
            stats: DispatchStats::default(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive the pin to OFF explicitly instead of trusting the reset state.
    pub fn start(&mut self, buzzer: &mut impl BuzzerPort, sink: &mut impl EventSink) {
        buzzer.set_level(PinLevel::Off);
        self.level = buzzer.level();
        sink.emit(&AppEvent::Started(self.level));
        info!("Dispatcher started, buzzer {}", self.level);
    }

    // ── Per-cycle dispatch ────────────────────────────────────

    /// Run one loop cycle: consume at most one byte and act on it.
    pub fn poll<S: SerialPort>(
        &mut self,
        serial: &mut S,
        buzzer: &mut impl BuzzerPort,
        sink: &mut impl EventSink,
    ) -> PollOutcome {
        match serial.read_byte() {
            Ok(Some(byte)) => self.handle_byte(byte, buzzer, sink),
            Ok(None) => PollOutcome::Idle,
            Err(e) => {
                self.stats.read_errors += 1;
                debug!("Serial read error treated as no input: {:?}", e);
                PollOutcome::Idle
            }
        }
    }

    /// Apply the transition table to one received byte.
    pub fn handle_byte(
        &mut self,
        byte: u8,
        buzzer: &mut impl BuzzerPort,
        sink: &mut impl EventSink,
    ) -> PollOutcome {
        self.stats.bytes_received += 1;

        let Some(cmd) = Command::decode(byte) else {
            self.stats.bytes_ignored += 1;
            sink.emit(&AppEvent::ByteIgnored(byte));
            return PollOutcome::Ignored(byte);
        };

        let prev = self.level;
        let next = cmd.target_level();

        // Re-issue the write even when the level is unchanged. The port owns
        // the truth: a failed write leaves the previous level in place.
        buzzer.set_level(next);
        self.level = buzzer.level();
        self.stats.commands_applied += 1;

        if self.level != prev {
            sink.emit(&AppEvent::LevelChanged {
                from: prev,
                to: self.level,
            });
        }

        PollOutcome::Applied(cmd)
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current buzzer level.
    pub fn level(&self) -> PinLevel {
        self.level
    }

    pub fn stats(&self) -> DispatchStats {
        self.stats
    }
}

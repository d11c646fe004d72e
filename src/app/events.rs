//! Outbound application events.
//!
//! The [`Dispatcher`](super::service::Dispatcher) emits these through the
//! [`EventSink`](super::ports::EventSink) port. They carry no behaviour;
//! adapters only log them.

use super::level::PinLevel;

/// Structured events emitted by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The dispatcher drove the pin to its initial level.
    Started(PinLevel),

    /// A recognised command moved the pin to a different level.
    LevelChanged { from: PinLevel, to: PinLevel },

    /// A byte that is not a command was received and dropped.
    ByteIgnored(u8),
}

//! Inbound commands to the dispatcher.
//!
//! The wire protocol is a single byte per command with no framing and no
//! acknowledgement. Anything that does not decode is dropped by the
//! [`Dispatcher`](super::service::Dispatcher) without comment.

use super::level::PinLevel;

/// Wire byte that switches the buzzer on.
pub const ACTIVATE_BYTE: u8 = b'1';
/// Wire byte that switches the buzzer off.
pub const DEACTIVATE_BYTE: u8 = b'0';

/// Commands the serial link can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drive the buzzer pin HIGH.
    Activate,
    /// Drive the buzzer pin LOW.
    Deactivate,
}

impl Command {
    /// Decode one received byte. Returns `None` for every byte other than
    /// [`ACTIVATE_BYTE`] and [`DEACTIVATE_BYTE`].
    pub fn decode(byte: u8) -> Option<Self> {
        match byte {
            ACTIVATE_BYTE => Some(Self::Activate),
            DEACTIVATE_BYTE => Some(Self::Deactivate),
            _ => None,
        }
    }

    /// Level the pin must hold after this command, whatever it held before.
    pub fn target_level(self) -> PinLevel {
        match self {
            Self::Activate => PinLevel::On,
            Self::Deactivate => PinLevel::Off,
        }
    }
}

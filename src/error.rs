//! Unified error types for the buzzer firmware.
//!
//! Only startup can fail for real. At runtime the dispatcher absorbs pin and
//! serial failures (logged, never propagated), so these variants mostly show
//! up during bring-up and in driver return values.

use core::fmt;

use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration failed validation. Carries the offending field and rule.
    Config(&'static str),
    /// Peripheral initialisation failed.
    Init(HwInitError),
    /// Driving the buzzer GPIO failed.
    PinWrite,
    /// The UART driver reported an error (ESP-IDF return code).
    SerialRead(i32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Init(e) => write!(f, "init: {e}"),
            Self::PinWrite => write!(f, "GPIO write failed"),
            Self::SerialRead(rc) => write!(f, "UART read failed (rc={rc})"),
        }
    }
}

impl std::error::Error for Error {}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

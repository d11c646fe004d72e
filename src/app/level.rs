//! Logical level of the buzzer output line.

/// ON/OFF state of the buzzer pin. `On` is electrical HIGH (active).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinLevel {
    #[default]
    Off,
    On,
}

impl PinLevel {
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for PinLevel {
    fn from(high: bool) -> Self {
        if high { Self::On } else { Self::Off }
    }
}

impl From<PinLevel> for bool {
    fn from(level: PinLevel) -> Self {
        level.is_on()
    }
}

impl core::fmt::Display for PinLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Off => write!(f, "OFF"),
            Self::On => write!(f, "ON"),
        }
    }
}

//! Active buzzer driver.
//!
//! A self-oscillating buzzer on a plain digital output: HIGH sounds it,
//! LOW silences it. No PWM, no tone control.
//!
//! ## Dual-target design
//!
//! Generic over [`embedded_hal::digital::OutputPin`]. On ESP-IDF the pin is
//! an `esp_idf_hal` `PinDriver`; on host/test any mock pin will do.

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::app::level::PinLevel;
use crate::app::ports::BuzzerPort;
use crate::error::{Error, Result};

pub struct BuzzerDriver<P> {
    pin: P,
    level: PinLevel,
}

impl<P: OutputPin> BuzzerDriver<P> {
    /// Wrap an already-configured output pin. Does not touch the pin; the
    /// caller decides the initial level.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            level: PinLevel::Off,
        }
    }

    /// Drive the pin. The tracked level only changes if the write succeeds.
    pub fn set_level(&mut self, level: PinLevel) -> Result<()> {
        let res = match level {
            PinLevel::On => self.pin.set_high(),
            PinLevel::Off => self.pin.set_low(),
        };
        res.map_err(|_| Error::PinWrite)?;
        self.level = level;
        Ok(())
    }

    pub fn level(&self) -> PinLevel {
        self.level
    }

    pub fn is_on(&self) -> bool {
        self.level.is_on()
    }

    /// Release the underlying pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> BuzzerPort for BuzzerDriver<P> {
    fn set_level(&mut self, level: PinLevel) {
        if let Err(e) = BuzzerDriver::set_level(self, level) {
            warn!("Buzzer: {} while driving {}", e, level);
        }
    }

    fn level(&self) -> PinLevel {
        self.level
    }
}

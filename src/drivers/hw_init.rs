//! One-shot hardware peripheral initialization.
//!
//! Configures the command UART and the buzzer GPIO. Called once from
//! `main()` before the dispatch loop starts.
//!
//! Wiring (ESP32-S3 devkit):
//!
//! | Signal     | Peripheral | GPIO | Notes                              |
//! |------------|------------|------|------------------------------------|
//! | Command RX | UART0      | 44   | USB-UART bridge, shared w/ console |
//! | Console TX | UART0      | 43   | log output only                    |
//! | Buzzer     | GPIO out   | 8    | active HIGH                        |

#[cfg(feature = "espidf")]
use esp_idf_hal::{
    gpio::{AnyIOPin, Gpio8, Output, PinDriver},
    peripherals::Peripherals,
    uart::{UartDriver, config::Config as UartConfig},
    units::Hertz,
};
#[cfg(feature = "espidf")]
use log::info;

#[cfg(feature = "espidf")]
use crate::adapters::uart::UartSerial;
#[cfg(feature = "espidf")]
use crate::config::SystemConfig;
#[cfg(feature = "espidf")]
use crate::error::Result;
#[cfg(feature = "espidf")]
use crate::drivers::buzzer::BuzzerDriver;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    PeripheralsTaken,
    UartInstallFailed(i32),
    GpioConfigFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PeripheralsTaken => write!(f, "peripherals already taken"),
            Self::UartInstallFailed(rc) => write!(f, "UART driver install failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
        }
    }
}

impl std::error::Error for HwInitError {}

/// Buzzer output as configured on the board.
#[cfg(feature = "espidf")]
pub type BuzzerPin = PinDriver<'static, Gpio8, Output>;

/// Bring up UART0 and the buzzer pin. Failures surface as
/// [`Error::Init`](crate::error::Error::Init).
///
/// The pin is left in whatever state `PinDriver::output` gives it; the
/// dispatcher drives it OFF explicitly in `start()`.
#[cfg(feature = "espidf")]
pub fn init_peripherals(
    config: &SystemConfig,
) -> Result<(UartSerial, BuzzerDriver<BuzzerPin>)> {
    let peripherals = Peripherals::take().map_err(|_| HwInitError::PeripheralsTaken)?;

    let uart_cfg = UartConfig::default()
        .baudrate(Hertz(config.baud_rate))
        .rx_fifo_size(config.uart_rx_buffer_bytes);

    let uart = UartDriver::new(
        peripherals.uart0,
        peripherals.pins.gpio43,
        peripherals.pins.gpio44,
        Option::<AnyIOPin>::None,
        Option::<AnyIOPin>::None,
        &uart_cfg,
    )
    .map_err(|e| HwInitError::UartInstallFailed(e.code()))?;
    info!("hw_init: UART0 at {} baud (rx buffer {} B)", config.baud_rate, config.uart_rx_buffer_bytes);

    let pin = PinDriver::output(peripherals.pins.gpio8)
        .map_err(|e| HwInitError::GpioConfigFailed(e.code()))?;
    info!("hw_init: buzzer output on GPIO8");

    Ok((
        UartSerial::new(uart, config.poll_wait_ticks),
        BuzzerDriver::new(pin),
    ))
}

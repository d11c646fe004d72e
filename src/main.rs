//! Serial Buzzer Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  UartSerial ──▶ Dispatcher ──▶ BuzzerDriver (GPIO8)  │
//! │  (SerialPort)      │           (BuzzerPort)          │
//! │                    └──▶ LogEventSink (EventSink)     │
//! └──────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use serial_buzzer::adapters::log_sink::LogEventSink;
use serial_buzzer::app::service::Dispatcher;
use serial_buzzer::config::SystemConfig;
use serial_buzzer::drivers::hw_init;
use serial_buzzer::drivers::watchdog::Watchdog;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Serial Buzzer v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    config.validate()?;
    info!("Config: {}", serde_json::to_string(&config)?);

    // ── 3. Peripherals ────────────────────────────────────────
    let (mut serial, mut buzzer) = hw_init::init_peripherals(&config)?;
    let mut watchdog = Watchdog::from_config(&config);

    // ── 4. Dispatcher ─────────────────────────────────────────
    let mut sink = LogEventSink::new();
    let mut dispatcher = Dispatcher::new();
    dispatcher.start(&mut buzzer, &mut sink);

    info!("System ready. Listening for '1' / '0'.");

    // ── 5. Dispatch loop ──────────────────────────────────────
    loop {
        dispatcher.poll(&mut serial, &mut buzzer, &mut sink);
        watchdog.feed();
    }
}

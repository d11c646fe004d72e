//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements | Connects to              |
//! |------------|------------|--------------------------|
//! | `log_sink` | EventSink  | `log` facade / console   |
//! | `uart`     | SerialPort | ESP-IDF UART driver      |
//!
//! `BuzzerPort` is implemented directly by
//! [`BuzzerDriver`](crate::drivers::buzzer::BuzzerDriver).

pub mod log_sink;
#[cfg(feature = "espidf")]
pub mod uart;

//! Serial-commanded buzzer firmware library.
//!
//! Exposes the pure dispatch logic for integration testing. Everything
//! that touches ESP-IDF is gated behind the `espidf` feature inside each
//! module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;

pub use error::{Error, Result};

//! Application core — pure dispatch logic, zero I/O.
//!
//! The command dispatcher and its value types live here. All interaction
//! with hardware happens through **port traits** defined in [`ports`],
//! keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod level;
pub mod ports;
pub mod service;

//! Actuator driver, hardware initialisation, and the task watchdog.

pub mod buzzer;
pub mod hw_init;
pub mod watchdog;

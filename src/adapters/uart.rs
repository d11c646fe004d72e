//! UART serial adapter.
//!
//! Implements [`SerialPort`] over the ESP-IDF UART driver. Each read takes
//! one byte and waits at most `wait_ticks` for it, which lets the FreeRTOS
//! idle task run while the link is quiet.

use esp_idf_hal::uart::UartDriver;

use crate::app::ports::SerialPort;
use crate::error::Error;

pub struct UartSerial {
    uart: UartDriver<'static>,
    wait_ticks: u32,
}

impl UartSerial {
    pub fn new(uart: UartDriver<'static>, wait_ticks: u32) -> Self {
        Self { uart, wait_ticks }
    }
}

impl SerialPort for UartSerial {
    type Error = Error;

    fn read_byte(&mut self) -> Result<Option<u8>, Error> {
        let mut buf = [0u8; 1];
        match self.uart.read(&mut buf, self.wait_ticks) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(e) => Err(Error::SerialRead(e.code())),
        }
    }
}

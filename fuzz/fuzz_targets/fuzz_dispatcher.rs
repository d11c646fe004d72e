//! Fuzz target: `Dispatcher::handle_byte`
//!
//! Drives arbitrary byte streams through the dispatcher and asserts that
//! the pin and the dispatcher always agree, and that noise bytes never
//! produce a pin write.
//!
//! cargo fuzz run fuzz_dispatcher

#![no_main]

use libfuzzer_sys::fuzz_target;
use serial_buzzer::app::commands::Command;
use serial_buzzer::app::level::PinLevel;
use serial_buzzer::app::ports::{BuzzerPort, NullSink};
use serial_buzzer::app::service::{Dispatcher, PollOutcome};

struct Pin {
    level: PinLevel,
    writes: usize,
}

impl BuzzerPort for Pin {
    fn set_level(&mut self, level: PinLevel) {
        self.level = level;
        self.writes += 1;
    }

    fn level(&self) -> PinLevel {
        self.level
    }
}

fuzz_target!(|data: &[u8]| {
    let mut dispatcher = Dispatcher::new();
    let mut pin = Pin {
        level: PinLevel::On,
        writes: 0,
    };
    dispatcher.start(&mut pin, &mut NullSink);
    assert_eq!(pin.level, PinLevel::Off);

    for &byte in data {
        let writes_before = pin.writes;
        match dispatcher.handle_byte(byte, &mut pin, &mut NullSink) {
            PollOutcome::Applied(cmd) => {
                assert_eq!(Command::decode(byte), Some(cmd));
                assert_eq!(pin.writes, writes_before + 1);
            }
            PollOutcome::Ignored(b) => {
                assert_eq!(b, byte);
                assert_eq!(pin.writes, writes_before);
            }
            PollOutcome::Idle => unreachable!("handle_byte always consumes its byte"),
        }
        assert_eq!(dispatcher.level(), pin.level);
    }
});

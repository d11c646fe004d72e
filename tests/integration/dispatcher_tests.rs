//! Dispatcher behaviour against mock serial, buzzer and sink.

use serial_buzzer::app::commands::Command;
use serial_buzzer::app::events::AppEvent;
use serial_buzzer::app::level::PinLevel;
use serial_buzzer::app::ports::BuzzerPort;
use serial_buzzer::app::service::{Dispatcher, PollOutcome};

use super::mock_hw::{MockBuzzer, MockSerial, RecordingSink};

fn started() -> (Dispatcher, MockBuzzer, RecordingSink) {
    let mut d = Dispatcher::new();
    let mut buzzer = MockBuzzer::new();
    let mut sink = RecordingSink::new();
    d.start(&mut buzzer, &mut sink);
    (d, buzzer, sink)
}

/// Poll until the serial script is drained.
fn run(d: &mut Dispatcher, serial: &mut MockSerial, buzzer: &mut MockBuzzer, sink: &mut RecordingSink) {
    while serial.pending() > 0 {
        d.poll(serial, buzzer, sink);
    }
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_drives_pin_off_even_if_hardware_came_up_high() {
    let mut d = Dispatcher::new();
    let mut buzzer = MockBuzzer::starting_at(PinLevel::On);
    let mut sink = RecordingSink::new();

    d.start(&mut buzzer, &mut sink);

    assert_eq!(buzzer.writes, vec![PinLevel::Off]);
    assert_eq!(buzzer.level(), PinLevel::Off);
    assert_eq!(sink.events, vec![AppEvent::Started(PinLevel::Off)]);
}

// ── Recognised commands ───────────────────────────────────────

#[test]
fn one_activates() {
    let (mut d, mut buzzer, mut sink) = started();
    let mut serial = MockSerial::with_bytes(b"1");

    let out = d.poll(&mut serial, &mut buzzer, &mut sink);

    assert_eq!(out, PollOutcome::Applied(Command::Activate));
    assert_eq!(d.level(), PinLevel::On);
    assert_eq!(buzzer.level(), PinLevel::On);
}

#[test]
fn zero_deactivates() {
    let (mut d, mut buzzer, mut sink) = started();
    let mut serial = MockSerial::with_bytes(b"10");
    run(&mut d, &mut serial, &mut buzzer, &mut sink);

    assert_eq!(d.level(), PinLevel::Off);
    assert_eq!(buzzer.writes, vec![PinLevel::Off, PinLevel::On, PinLevel::Off]);
}

#[test]
fn activate_is_idempotent() {
    let (mut d, mut buzzer, mut sink) = started();
    let mut serial = MockSerial::with_bytes(b"111");
    run(&mut d, &mut serial, &mut buzzer, &mut sink);

    assert_eq!(d.level(), PinLevel::On);
    // Every command re-issues the write.
    assert_eq!(buzzer.writes.len(), 4);
    // Only the first one is a real transition.
    assert_eq!(sink.level_changes(), 1);
}

#[test]
fn deactivate_is_idempotent() {
    let (mut d, mut buzzer, mut sink) = started();
    let mut serial = MockSerial::with_bytes(b"00");
    run(&mut d, &mut serial, &mut buzzer, &mut sink);

    assert_eq!(d.level(), PinLevel::Off);
    assert_eq!(buzzer.writes, vec![PinLevel::Off; 3]);
    assert_eq!(sink.level_changes(), 0);
}

#[test]
fn sequence_one_zero_one_ends_active() {
    let (mut d, mut buzzer, mut sink) = started();
    let mut serial = MockSerial::with_bytes(b"101");
    run(&mut d, &mut serial, &mut buzzer, &mut sink);

    assert_eq!(d.level(), PinLevel::On);
    assert_eq!(buzzer.level(), PinLevel::On);
}

#[test]
fn sequence_zero_one_zero_ends_inactive() {
    let (mut d, mut buzzer, mut sink) = started();
    let mut serial = MockSerial::with_bytes(b"010");
    run(&mut d, &mut serial, &mut buzzer, &mut sink);

    assert_eq!(d.level(), PinLevel::Off);
    assert_eq!(buzzer.level(), PinLevel::Off);
}

#[test]
fn level_changes_are_reported_with_direction() {
    let (mut d, mut buzzer, mut sink) = started();
    let mut serial = MockSerial::with_bytes(b"10");
    run(&mut d, &mut serial, &mut buzzer, &mut sink);

    assert_eq!(
        sink.events,
        vec![
            AppEvent::Started(PinLevel::Off),
            AppEvent::LevelChanged {
                from: PinLevel::Off,
                to: PinLevel::On
            },
            AppEvent::LevelChanged {
                from: PinLevel::On,
                to: PinLevel::Off
            },
        ]
    );
}

// ── Unrecognised input ────────────────────────────────────────

#[test]
fn other_bytes_leave_pin_untouched() {
    let (mut d, mut buzzer, mut sink) = started();
    let mut serial = MockSerial::with_bytes(b"1");
    d.poll(&mut serial, &mut buzzer, &mut sink);
    let writes_before = buzzer.writes.len();

    serial.push_bytes(b"2\r\n aON\x00\xff");
    run(&mut d, &mut serial, &mut buzzer, &mut sink);

    assert_eq!(d.level(), PinLevel::On);
    assert_eq!(buzzer.writes.len(), writes_before);
    assert_eq!(d.stats().bytes_ignored, 9);
}

#[test]
fn ignored_byte_is_reported_and_not_accumulated() {
    let (mut d, mut buzzer, mut sink) = started();
    let mut serial = MockSerial::with_bytes(b"x");

    assert_eq!(
        d.poll(&mut serial, &mut buzzer, &mut sink),
        PollOutcome::Ignored(b'x')
    );
    assert_eq!(sink.events.last(), Some(&AppEvent::ByteIgnored(b'x')));

    // Commands embedded in noise still act one byte at a time.
    serial.push_bytes(b"a1b0c");
    run(&mut d, &mut serial, &mut buzzer, &mut sink);
    assert_eq!(d.level(), PinLevel::Off);
}

// ── No input / read errors ────────────────────────────────────

#[test]
fn no_input_means_no_side_effect() {
    let (mut d, mut buzzer, mut sink) = started();
    let mut serial = MockSerial::new();
    let writes_before = buzzer.writes.len();
    let events_before = sink.events.len();

    for _ in 0..10 {
        assert_eq!(d.poll(&mut serial, &mut buzzer, &mut sink), PollOutcome::Idle);
    }

    assert_eq!(d.level(), PinLevel::Off);
    assert_eq!(buzzer.writes.len(), writes_before);
    assert_eq!(sink.events.len(), events_before);
    assert_eq!(d.stats().bytes_received, 0);
}

#[test]
fn each_poll_consumes_exactly_one_byte() {
    let (mut d, mut buzzer, mut sink) = started();
    let mut serial = MockSerial::with_bytes(b"10");

    d.poll(&mut serial, &mut buzzer, &mut sink);
    assert_eq!(serial.pending(), 1);
    assert_eq!(d.level(), PinLevel::On);

    d.poll(&mut serial, &mut buzzer, &mut sink);
    assert_eq!(serial.pending(), 0);
    assert_eq!(d.level(), PinLevel::Off);
}

#[test]
fn read_error_behaves_like_no_input() {
    let (mut d, mut buzzer, mut sink) = started();
    let mut serial = MockSerial::with_bytes(b"1");
    serial.push_error("framing error");
    serial.push_bytes(b"0");

    assert_eq!(
        d.poll(&mut serial, &mut buzzer, &mut sink),
        PollOutcome::Applied(Command::Activate)
    );
    assert_eq!(d.poll(&mut serial, &mut buzzer, &mut sink), PollOutcome::Idle);
    assert_eq!(d.level(), PinLevel::On);
    assert_eq!(d.stats().read_errors, 1);

    assert_eq!(
        d.poll(&mut serial, &mut buzzer, &mut sink),
        PollOutcome::Applied(Command::Deactivate)
    );
    assert_eq!(d.level(), PinLevel::Off);
}

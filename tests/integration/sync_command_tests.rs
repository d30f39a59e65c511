//! Integration tests for the Sync-mode console protocol.

use pawlog::app::commands::SyncCommand;
use pawlog::app::events::{DATA_CLOSE, DATA_OPEN};
use pawlog::app::ports::Button;
use pawlog::fsm::Mode;

use crate::mock_hw::{ScriptedSensor, console_rig, storage_rig, stored};

#[test]
fn dump_writes_data_envelope_to_console() {
    let mut rig = storage_rig();
    rig.click(Button::Sync, 0);

    rig.console.push_input(b"D");
    rig.tick(10);

    assert_eq!(
        rig.console.output(),
        [DATA_OPEN, "SLEEP: duration=0, activity=0", DATA_CLOSE]
    );
    assert_eq!(stored(&rig), ["sync mode enabled", "received command D"]);
}

#[test]
fn dump_reports_the_last_closed_session() {
    let mut rig = storage_rig();
    rig.sensor = ScriptedSensor::with_xy(&[(200, 100), (300, 100), (100, 100)]);
    rig.click(Button::Sleep, 0);
    rig.tick(501);
    rig.tick(1_001);
    rig.click(Button::Sleep, 1_500);

    rig.click(Button::Sync, 2_000);
    rig.console.push_input(b"D");
    rig.tick(2_010);

    assert_eq!(rig.console.output()[1], "SLEEP: duration=3, activity=4");
}

#[test]
fn reset_clears_persisted_log() {
    let mut rig = storage_rig();
    rig.click(Button::Sleep, 0);
    rig.click(Button::Sleep, 1_000);
    rig.click(Button::Sync, 2_000);
    assert_eq!(stored(&rig).len(), 4);

    rig.console.push_input(b"R");
    rig.tick(2_010);

    assert_eq!(stored(&rig), ["log cleared"]);
    assert!(rig.console.output().is_empty());
}

#[test]
fn reset_on_console_backend_reports_failure() {
    let mut rig = console_rig();
    rig.click(Button::Sync, 0);
    rig.console.take_output();

    rig.console.push_input(b"R");
    rig.tick(10);

    assert_eq!(
        rig.console.output(),
        [
            "<log message='received command R'/>",
            "<log message='log reset failed: storage: unavailable'/>",
        ]
    );
    assert_eq!(rig.ctl.mode(), Mode::Sync);
}

#[test]
fn unknown_bytes_are_ignored() {
    let mut rig = console_rig();
    rig.click(Button::Sync, 0);
    rig.console.take_output();

    rig.console.push_input(b"dxr\n?");
    for t in 10..15 {
        rig.tick(t);
    }
    assert!(rig.console.output().is_empty());
    assert_eq!(rig.console.pending_input(), 0, "every byte is consumed");
    assert_eq!(rig.ctl.mode(), Mode::Sync);
}

#[test]
fn one_byte_is_handled_per_tick() {
    let mut rig = storage_rig();
    rig.click(Button::Sync, 0);
    rig.console.push_input(b"DD");
    rig.tick(10);
    assert_eq!(rig.console.pending_input(), 1);
    rig.tick(20);
    assert_eq!(rig.console.output().len(), 6);
}

#[test]
fn console_is_not_read_outside_sync() {
    let mut rig = storage_rig();
    rig.console.push_input(b"D");
    rig.tick(0);
    assert_eq!(rig.console.pending_input(), 1);

    rig.click(Button::Sleep, 10);
    rig.tick(600);
    assert_eq!(rig.console.pending_input(), 1);
    assert!(rig.console.output().is_empty());
}

#[test]
fn byte_is_left_pending_when_sync_ends_that_tick() {
    let mut rig = storage_rig();
    rig.click(Button::Sync, 0);
    rig.console.push_input(b"D");
    rig.panel.press(Button::Sync);
    rig.tick(1_000);

    assert_eq!(rig.ctl.mode(), Mode::Idle);
    assert_eq!(rig.console.pending_input(), 1);
}

#[test]
fn handle_returns_parsed_command() {
    let mut rig = storage_rig();
    rig.click(Button::Sync, 0);
    let cmd = rig
        .ctl
        .handle_sync_command(b'R', &mut rig.console, &mut rig.sink);
    assert_eq!(cmd, Some(SyncCommand::ResetLog));
    let cmd = rig
        .ctl
        .handle_sync_command(b'Z', &mut rig.console, &mut rig.sink);
    assert_eq!(cmd, None);
}

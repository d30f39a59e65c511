//! Integration tests for Sleep mode: session reset, sampling cadence,
//! activity LED and the closing summary.

use pawlog::app::ports::{Button, Led};
use pawlog::error::SensorError;
use pawlog::fsm::Mode;

use crate::mock_hw::{IndicatorCall, ScriptedSensor, storage_rig, stored};

#[test]
fn three_samples_produce_documented_summary() {
    let mut rig = storage_rig();
    rig.sensor = ScriptedSensor::with_xy(&[(200, 100), (300, 100), (100, 100)]);

    // Enter at t=0; the release tick at t=1 takes the first sample.
    rig.click(Button::Sleep, 0);
    assert_eq!(rig.ctl.mode(), Mode::Sleep);
    assert!(rig.panel.led_on(Led::Sleep));
    assert_eq!(rig.ctl.session().sample_count(), 1);

    rig.tick(501);
    rig.tick(1_001);
    assert_eq!(rig.ctl.session().sample_count(), 3);
    assert_eq!(rig.ctl.session().activity_total(), 4);

    rig.click(Button::Sleep, 1_200);
    assert_eq!(rig.ctl.mode(), Mode::Idle);
    assert!(!rig.panel.led_on(Led::Sleep));
    assert_eq!(rig.panel.activity(), 0);
    assert_eq!(
        stored(&rig),
        [
            "sleep mode enabled",
            "sleep mode disabled",
            "SLEEP: duration=3, activity=4",
        ]
    );
}

#[test]
fn samples_are_at_least_one_interval_apart() {
    let mut rig = storage_rig();
    rig.click(Button::Sleep, 0);
    for t in (2..3_000).step_by(7) {
        rig.tick(t);
    }
    // One sample on entry, then one per elapsed 500 ms.
    assert_eq!(rig.ctl.session().sample_count(), 6);
    assert_eq!(rig.sensor.reads, 6);
}

#[test]
fn activity_led_follows_each_step() {
    let mut rig = storage_rig();
    rig.sensor = ScriptedSensor::with_xy(&[(1_000, -1_000), (-32_768, -32_768)]);
    rig.click(Button::Sleep, 0);
    assert_eq!(rig.panel.activity(), 10);

    rig.tick(600);
    // step = 327 is clamped to the 8-bit range.
    assert_eq!(rig.panel.activity(), 255);
    assert_eq!(rig.ctl.session().activity_total(), 337);
}

#[test]
fn sensor_failure_skips_sample_and_keeps_running() {
    let mut rig = storage_rig();
    rig.sensor.push_failure(SensorError::UnexpectedDevice(0x00));
    rig.sensor
        .readings
        .push_back(Ok(pawlog::activity::MotionFrame::from_accel_xy(400, 400)));

    rig.click(Button::Sleep, 0);
    assert_eq!(rig.ctl.session().sample_count(), 0);
    assert!(
        !rig.panel.calls.contains(&IndicatorCall::Activity(4)),
        "failed sample must not drive the LED"
    );

    rig.tick(100);
    assert_eq!(rig.sensor.reads, 1, "throttle advances after a failure");

    rig.tick(501);
    assert_eq!(rig.ctl.session().sample_count(), 1);
    assert_eq!(rig.ctl.session().activity_total(), 4);
    assert_eq!(rig.ctl.mode(), Mode::Sleep);
}

#[test]
fn re_entering_sleep_starts_a_fresh_session() {
    let mut rig = storage_rig();
    rig.sensor = ScriptedSensor::with_xy(&[(900, 900), (900, 900)]);
    rig.click(Button::Sleep, 0);
    rig.tick(600);
    rig.click(Button::Sleep, 1_000);
    assert_eq!(rig.ctl.session().sample_count(), 2);

    rig.sensor = ScriptedSensor::with_xy(&[(200, 200)]);
    rig.click(Button::Sleep, 2_000);
    assert_eq!(rig.ctl.session().sample_count(), 1);
    assert_eq!(rig.ctl.session().activity_total(), 2);
}

#[test]
fn no_sample_on_the_tick_that_leaves_sleep() {
    let mut rig = storage_rig();
    rig.click(Button::Sleep, 0);
    let reads = rig.sensor.reads;

    rig.panel.press(Button::Sleep);
    rig.tick(5_000);
    assert_eq!(rig.ctl.mode(), Mode::Idle);
    assert_eq!(rig.sensor.reads, reads);
}

#[test]
fn leaving_sleep_inside_debounce_window_is_ignored() {
    let mut rig = storage_rig();
    rig.click(Button::Sleep, 0);
    rig.click(Button::Sleep, 200);
    assert_eq!(rig.ctl.mode(), Mode::Sleep);
    assert_eq!(stored(&rig), ["sleep mode enabled"]);
}

#[test]
fn leaving_before_any_sample_reports_empty_session() {
    let mut rig = storage_rig();
    rig.panel.press(Button::Sleep);
    rig.tick(0);
    rig.panel.release(Button::Sleep);
    // No Sleep-mode tick in between, so nothing was sampled.
    rig.ctl.poll_sleep_button(10, &mut rig.panel, &mut rig.console, &mut rig.sink);
    rig.panel.press(Button::Sleep);
    rig.ctl.poll_sleep_button(600, &mut rig.panel, &mut rig.console, &mut rig.sink);

    assert_eq!(rig.ctl.mode(), Mode::Idle);
    assert_eq!(rig.sensor.reads, 0);
    assert_eq!(
        stored(&rig).last().map(String::as_str),
        Some("SLEEP: duration=0, activity=0")
    );
}

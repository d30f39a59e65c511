//! Status LED driver: two on/off LEDs and one dimmable activity LED.
//!
//! Generic over the `embedded-hal` 1.0 output traits so the same driver runs
//! on `esp-idf-hal` `PinDriver` / `LedcDriver` and on host-side mock pins.
//! Pin failures are logged and otherwise ignored.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::fsm::context::IndicatorCommands;

pub struct StatusLeds<L, P> {
    sync_led: L,
    sleep_led: L,
    activity_led: P,
    current: IndicatorCommands,
}

impl<L: OutputPin, P: SetDutyCycle> StatusLeds<L, P> {
    /// Take ownership of the pins and drive everything off.
    pub fn new(sync_led: L, sleep_led: L, activity_led: P) -> Self {
        let mut leds = Self {
            sync_led,
            sleep_led,
            activity_led,
            current: IndicatorCommands::default(),
        };
        leds.set_sync(false);
        leds.set_sleep(false);
        leds.set_activity(0);
        leds
    }

    pub fn set_sync(&mut self, on: bool) {
        drive(&mut self.sync_led, on, "sync");
        self.current.sync_led = on;
    }

    pub fn set_sleep(&mut self, on: bool) {
        drive(&mut self.sleep_led, on, "sleep");
        self.current.sleep_led = on;
    }

    /// Brightness 0–255, scaled onto the PWM channel's duty range.
    pub fn set_activity(&mut self, level: u8) {
        if let Err(e) = self
            .activity_led
            .set_duty_cycle_fraction(u16::from(level), u16::from(u8::MAX))
        {
            warn!("activity LED: duty write failed: {:?}", e);
        }
        self.current.activity_level = level;
    }

    pub fn off(&mut self) {
        self.set_sync(false);
        self.set_sleep(false);
        self.set_activity(0);
    }

    pub fn current(&self) -> IndicatorCommands {
        self.current
    }
}

fn drive<L: OutputPin>(pin: &mut L, on: bool, name: &str) {
    let result = if on { pin.set_high() } else { pin.set_low() };
    if let Err(e) = result {
        warn!("{} LED: GPIO write failed: {:?}", name, e);
    }
}

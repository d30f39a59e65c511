//! Hardware adapter — bridges button and LED pins to domain port traits.
//!
//! Owns both button inputs and the [`StatusLeds`] driver, exposing them
//! through [`ButtonPort`] and [`IndicatorPort`].  Generic over the
//! `embedded-hal` pin traits: `esp-idf-hal` drivers on target, mock pins in
//! host tests.

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::app::ports::{Button, ButtonPort, IndicatorPort, Led, Level};
use crate::drivers::status_led::StatusLeds;

/// Concrete adapter that combines the front-panel I/O behind port traits.
pub struct HardwareAdapter<B, L, P> {
    sync_button: B,
    sleep_button: B,
    leds: StatusLeds<L, P>,
}

impl<B, L, P> HardwareAdapter<B, L, P>
where
    B: InputPin,
    L: OutputPin,
    P: SetDutyCycle,
{
    pub fn new(sync_button: B, sleep_button: B, leds: StatusLeds<L, P>) -> Self {
        Self {
            sync_button,
            sleep_button,
            leds,
        }
    }

    pub fn leds(&self) -> &StatusLeds<L, P> {
        &self.leds
    }

    /// Switch every output off.
    pub fn all_off(&mut self) {
        self.leds.off();
    }
}

// ── ButtonPort implementation ─────────────────────────────────

impl<B, L, P> ButtonPort for HardwareAdapter<B, L, P>
where
    B: InputPin,
    L: OutputPin,
    P: SetDutyCycle,
{
    fn read_level(&mut self, button: Button) -> Level {
        let pin = match button {
            Button::Sync => &mut self.sync_button,
            Button::Sleep => &mut self.sleep_button,
        };
        match pin.is_high() {
            Ok(high) => Level::from(high),
            Err(e) => {
                // A failed read looks like a released button: no edge.
                warn!("{:?} button: GPIO read failed: {:?}", button, e);
                Level::Low
            }
        }
    }
}

// ── IndicatorPort implementation ──────────────────────────────

impl<B, L, P> IndicatorPort for HardwareAdapter<B, L, P>
where
    B: InputPin,
    L: OutputPin,
    P: SetDutyCycle,
{
    fn set_led(&mut self, led: Led, on: bool) {
        match led {
            Led::Sync => self.leds.set_sync(on),
            Led::Sleep => self.leds.set_sleep(on),
        }
    }

    fn set_activity_level(&mut self, level: u8) {
        self.leds.set_activity(level);
    }
}

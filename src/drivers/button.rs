//! Polled button edge detector with a settle lockout.
//!
//! ## Hardware
//!
//! Active-high momentary switch with external pull-down.  The main loop
//! reads the level once per dispatch and feeds it to [`ButtonDebouncer::sample`].
//!
//! ## Edge rules
//!
//! | Condition                                   | Result                 |
//! |---------------------------------------------|------------------------|
//! | Low → High, lockout open                    | rising edge            |
//! | Low → High, inside lockout after a fire     | ignored                |
//! | any other level pair                        | nothing                |
//!
//! The last level is updated on every sample, fired or not, so a button
//! held through the lockout does not produce a second edge on release.

use crate::app::ports::Level;
use crate::timing::IntervalGate;

pub struct ButtonDebouncer {
    last_level: Level,
    lockout: IntervalGate,
}

impl ButtonDebouncer {
    /// New detector assuming the button starts released (Low).
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            last_level: Level::Low,
            lockout: IntervalGate::new(debounce_ms),
        }
    }

    /// Feed the current level.  Returns `true` on a Low → High transition
    /// outside the lockout window.
    pub fn sample(&mut self, level: Level, now_ms: u32) -> bool {
        let rising = self.last_level == Level::Low && level == Level::High;
        self.last_level = level;
        rising && self.lockout.is_open(now_ms)
    }

    /// Start the lockout.  Call only when a rising edge was acted upon.
    pub fn lock(&mut self, now_ms: u32) {
        self.lockout.mark(now_ms);
    }

    pub fn last_level(&self) -> Level {
        self.last_level
    }
}

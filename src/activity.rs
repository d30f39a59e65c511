//! Activity accumulator — reduces motion frames to a crude sleep statistic.
//!
//! Each Sleep-mode sample is reduced to a single non-negative `step`:
//!
//! ```text
//!   step = ( |accel_x / 100| + |accel_y / 100| ) / 2        (integer maths)
//! ```
//!
//! The divisor and the two-axis average have no calibration basis; they are
//! kept as-is so logs stay comparable with earlier devices.  Do not assume
//! the formula holds for other accelerometer ranges.

use core::fmt::Write;

/// Raw-count divisor applied to each horizontal axis before averaging.
pub const STEP_DIVISOR: i32 = 100;

/// Capacity of a rendered session summary.
pub const SUMMARY_CAP: usize = 64;

/// Rendered `"SLEEP: duration=<n>, activity=<n>"` line.
pub type Summary = heapless::String<SUMMARY_CAP>;

// ---------------------------------------------------------------------------
// Motion frame (one burst read from the sensor)
// ---------------------------------------------------------------------------

/// Number of 16-bit words in one accel + temperature + gyro burst.
pub const MOTION_FRAME_WORDS: usize = 7;

/// One burst read: accel X/Y/Z, die temperature, gyro X/Y/Z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionFrame {
    pub words: [i16; MOTION_FRAME_WORDS],
}

impl MotionFrame {
    pub const fn new(words: [i16; MOTION_FRAME_WORDS]) -> Self {
        Self { words }
    }

    /// Frame with only the horizontal acceleration axes set.
    pub const fn from_accel_xy(x: i16, y: i16) -> Self {
        Self {
            words: [x, y, 0, 0, 0, 0, 0],
        }
    }

    pub fn accel_x(&self) -> i16 {
        self.words[0]
    }

    pub fn accel_y(&self) -> i16 {
        self.words[1]
    }
}

// ---------------------------------------------------------------------------
// Activity sample
// ---------------------------------------------------------------------------

/// A single motion reading reduced to a horizontal-motion magnitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivitySample {
    pub step: u16,
}

impl ActivitySample {
    pub fn from_axes(x: i16, y: i16) -> Self {
        let dx = (i32::from(x) / STEP_DIVISOR).abs();
        let dy = (i32::from(y) / STEP_DIVISOR).abs();
        // |i16::MIN / 100| = 327, so the average always fits.
        Self {
            step: ((dx + dy) / 2) as u16,
        }
    }

    pub fn from_frame(frame: &MotionFrame) -> Self {
        Self::from_axes(frame.accel_x(), frame.accel_y())
    }

    /// Activity LED level, clamped to the 8-bit output range.
    pub fn intensity(self) -> u8 {
        self.step.min(u16::from(u8::MAX)) as u8
    }
}

// ---------------------------------------------------------------------------
// Sleep session
// ---------------------------------------------------------------------------

/// Running statistic for one continuous Sleep-mode interval.
///
/// Both counters only grow within a session; they saturate instead of
/// wrapping so a very long session never appears to shrink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SleepSession {
    sample_count: u32,
    activity_total: u32,
}

impl SleepSession {
    pub const fn new() -> Self {
        Self {
            sample_count: 0,
            activity_total: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn record(&mut self, sample: ActivitySample) {
        self.sample_count = self.sample_count.saturating_add(1);
        self.activity_total = self.activity_total.saturating_add(u32::from(sample.step));
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn activity_total(&self) -> u32 {
        self.activity_total
    }

    pub fn summarize(&self) -> Summary {
        let mut out = Summary::new();
        // Longest possible line is 47 bytes; cannot overflow SUMMARY_CAP.
        let _ = write!(
            out,
            "SLEEP: duration={}, activity={}",
            self.sample_count, self.activity_total
        );
        out
    }
}

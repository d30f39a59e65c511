//! Monotonic-clock interval gating.
//!
//! Replaces blocking settle delays with a "has enough time passed?" check,
//! so the dispatch loop keeps polling while a button settles or the sampler
//! waits for its next slot.  Timestamps are `u32` milliseconds since boot and
//! all arithmetic wraps, so the ~49-day rollover is harmless.

/// Gate that opens once `interval_ms` has elapsed since the last [`mark`].
///
/// A fresh (or [`reset`]) gate is open immediately.
///
/// [`mark`]: IntervalGate::mark
/// [`reset`]: IntervalGate::reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalGate {
    interval_ms: u32,
    last_ms: Option<u32>,
}

impl IntervalGate {
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// `true` if at least `interval_ms` has passed since the last mark.
    pub fn is_open(&self, now_ms: u32) -> bool {
        match self.last_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= self.interval_ms,
        }
    }

    /// Record `now_ms` as the start of a new closed interval.
    pub fn mark(&mut self, now_ms: u32) {
        self.last_ms = Some(now_ms);
    }

    /// Forget the last mark; the gate is open again.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

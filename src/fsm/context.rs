//! Shared mutable context threaded through every mode handler.
//!
//! `ModeContext` is the single struct that mode handlers read from and write
//! to: the debounced button edges for this step, the indicator commands the
//! controller applies afterwards, the active sleep session, and an outbox of
//! log lines waiting to be handed to the log sink.

use crate::activity::SleepSession;
use crate::app::events::{LogLine, log_line};

/// Maximum log lines a single step can queue.  The busiest transition
/// (leaving Sleep) queues two.
pub const OUTBOX_CAP: usize = 4;

// ---------------------------------------------------------------------------
// Button edges (written by the controller; consumed by one step)
// ---------------------------------------------------------------------------

/// Debounced rising edges accepted during the current step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdges {
    pub sync: bool,
    pub sleep: bool,
}

impl ButtonEdges {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ---------------------------------------------------------------------------
// Indicator commands (written by handlers; applied by the controller)
// ---------------------------------------------------------------------------

/// Desired state of the three status outputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicatorCommands {
    pub sync_led: bool,
    pub sleep_led: bool,
    /// Activity LED brightness (0–255).
    pub activity_level: u8,
}

// ---------------------------------------------------------------------------
// ModeContext
// ---------------------------------------------------------------------------

/// The shared context passed to every mode handler function.
#[derive(Debug, Default)]
pub struct ModeContext {
    pub edges: ButtonEdges,
    pub indicators: IndicatorCommands,
    /// Meaningful only while the mode is Sleep; summarized on exit.
    pub session: SleepSession,
    pub outbox: heapless::Vec<LogLine, OUTBOX_CAP>,
}

impl ModeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a log line.  Drops (and warns) if the outbox is full, which
    /// means the controller forgot to flush.
    pub fn note(&mut self, message: &str) {
        if self.outbox.push(log_line(message)).is_err() {
            log::warn!("log outbox full, dropping: {}", message);
        }
    }

    /// Take every queued line, oldest first.
    pub fn take_outbox(&mut self) -> heapless::Vec<LogLine, OUTBOX_CAP> {
        core::mem::take(&mut self.outbox)
    }
}

//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ModeController (domain)
//! ```
//!
//! Driven adapters (buttons, LEDs, motion sensor, console, log storage)
//! implement these traits.  The [`ModeController`](super::service::ModeController)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use crate::activity::MotionFrame;
use crate::error::{ConsoleError, Result, SensorError, StorageError};

// ───────────────────────────────────────────────────────────────
// Digital I/O vocabulary
// ───────────────────────────────────────────────────────────────

/// Logical level of a digital input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

/// The two front-panel buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Sync,
    Sleep,
}

/// The two on/off status LEDs.  The activity LED is driven separately
/// through [`IndicatorPort::set_activity_level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Led {
    Sync,
    Sleep,
}

// ───────────────────────────────────────────────────────────────
// Button port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the two buttons.
pub trait ButtonPort {
    /// Current raw level of `button`.  Debouncing happens in the domain.
    fn read_level(&mut self, button: Button) -> Level;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the status LEDs.
pub trait IndicatorPort {
    /// Switch an on/off status LED.
    fn set_led(&mut self, led: Led, on: bool);

    /// Set the activity LED brightness (0 = off, 255 = full).
    fn set_activity_level(&mut self, level: u8);
}

// ───────────────────────────────────────────────────────────────
// Motion sensor port (driven adapter: two-wire sensor → domain)
// ───────────────────────────────────────────────────────────────

/// Burst-read port for the accelerometer / gyroscope.
pub trait MotionSensorPort {
    /// Read all seven accel + temperature + gyro words in one transaction.
    fn read_motion(&mut self) -> core::result::Result<MotionFrame, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Console port (driven adapter: serial byte stream)
// ───────────────────────────────────────────────────────────────

/// Line-oriented serial console.
pub trait ConsolePort {
    /// Next pending inbound byte, if any.  Never blocks.
    fn read_byte(&mut self) -> Option<u8>;

    /// Write `line` followed by a line terminator.
    fn write_line(&mut self, line: &str) -> core::result::Result<(), ConsoleError>;
}

// ───────────────────────────────────────────────────────────────
// Log storage port (driven adapter: domain ↔ SD card)
// ───────────────────────────────────────────────────────────────

/// Append-only text log stored under a fixed name.
pub trait LogStorePort {
    /// Append `line` and a newline.
    fn append_line(&mut self, line: &str) -> core::result::Result<(), StorageError>;

    /// Whole log contents.  A missing log reads as empty.
    fn read_all(&mut self) -> core::result::Result<Vec<u8>, StorageError>;

    /// Remove the log.  Returns [`StorageError::NotFound`] if it did not exist.
    fn delete(&mut self) -> core::result::Result<(), StorageError>;
}

// ───────────────────────────────────────────────────────────────
// Log sink (where LogLines end up)
// ───────────────────────────────────────────────────────────────

/// Destination for controller log lines.
///
/// The backend is picked once at construction (see
/// [`LogBackend`](crate::config::LogBackend)); the controller logic is the
/// same for every backend.  The console is passed per call because the
/// controller also owns it for command input and data responses.
pub trait LogSink {
    /// Record one message.
    fn record<C: ConsolePort + ?Sized>(&mut self, console: &mut C, message: &str) -> Result<()>;

    /// Erase everything recorded so far.
    fn clear(&mut self) -> Result<()>;
}

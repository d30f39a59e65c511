//! System configuration parameters
//!
//! All tunable parameters for the PawLog logger.  The defaults are the
//! compile-time constants the firmware ships with; there is no config file
//! or runtime provisioning channel.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Fixed name of the persisted activity log.
pub const LOG_FILE_NAME: &str = "pawlog.txt";

/// VFS mount point of the SD card on target.
pub const SD_MOUNT_POINT: &str = "/sdcard";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogBackend {
    /// Append to the fixed-name log file on the SD card.
    Storage,
    /// Write `<log message='...'/>` tags to the serial console only.
    Console,
}

/// Core logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    // --- Timing ---
    /// Minimum spacing between two accepted edges of the same button (ms)
    pub debounce_ms: u32,
    /// Minimum spacing between two motion samples in Sleep mode (ms)
    pub sample_interval_ms: u32,
    /// Main loop idle delay between dispatch iterations (ms)
    pub loop_interval_ms: u32,

    // --- Buses ---
    /// Serial console baud rate
    pub console_baud: u32,
    /// Two-wire bus clock (Hz)
    pub i2c_baud_hz: u32,

    // --- Logging ---
    /// Log sink backend selected at construction time
    pub log_backend: LogBackend,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            // Timing
            debounce_ms: 500,
            sample_interval_ms: 500,
            loop_interval_ms: 10,

            // Buses
            console_baud: 9600,
            i2c_baud_hz: 100_000,

            // Logging
            log_backend: LogBackend::Storage,
        }
    }
}

impl LoggerConfig {
    /// Range-check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(50..=5_000).contains(&self.debounce_ms) {
            return Err(ConfigError::ValidationFailed("debounce_ms must be 50–5000"));
        }
        if !(100..=60_000).contains(&self.sample_interval_ms) {
            return Err(ConfigError::ValidationFailed(
                "sample_interval_ms must be 100–60000",
            ));
        }
        if self.loop_interval_ms >= self.debounce_ms.min(self.sample_interval_ms) {
            return Err(ConfigError::ValidationFailed(
                "loop_interval_ms must be shorter than debounce and sample intervals",
            ));
        }
        if !matches!(self.console_baud, 9600 | 19_200 | 57_600 | 115_200) {
            return Err(ConfigError::ValidationFailed(
                "console_baud must be 9600, 19200, 57600 or 115200",
            ));
        }
        if !matches!(self.i2c_baud_hz, 100_000 | 400_000) {
            return Err(ConfigError::ValidationFailed(
                "i2c_baud_hz must be 100000 or 400000",
            ));
        }
        Ok(())
    }
}

/// Errors from [`LoggerConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

//! Log sink backends.
//!
//! Implements [`LogSink`] twice:
//!
//! - [`StorageLogSink`] appends every message as one line to the persisted
//!   log and can erase it on request.
//! - [`ConsoleLogSink`] writes every message to the serial console as a
//!   `<log message='...'/>` tag and keeps nothing.
//!
//! [`BackendLogSink`] picks one of them from [`LogBackend`] at construction
//! time, so the controller is written once for both.  Every backend also
//! mirrors messages to the `log` facade.

use log::info;

use crate::app::events::render_log_tag;
use crate::app::ports::{ConsolePort, LogSink, LogStorePort};
use crate::config::LogBackend;
use crate::error::{Result, StorageError};

// ── Storage backend ───────────────────────────────────────────

/// Sink that persists every message through a [`LogStorePort`].
pub struct StorageLogSink<S> {
    store: S,
}

impl<S: LogStorePort> StorageLogSink<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of lines currently persisted.
    pub fn line_count(&mut self) -> Result<usize> {
        let bytes = self.store.read_all()?;
        Ok(bytes.iter().filter(|&&b| b == b'\n').count())
    }
}

impl<S: LogStorePort> LogSink for StorageLogSink<S> {
    fn record<C: ConsolePort + ?Sized>(&mut self, _console: &mut C, message: &str) -> Result<()> {
        info!("LOG | {}", message);
        self.store.append_line(message)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match self.store.delete() {
            // Nothing persisted yet counts as already clear.
            Ok(()) | Err(StorageError::NotFound) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ── Console backend ───────────────────────────────────────────

/// Sink that writes every message as a console tag.
#[derive(Debug, Default)]
pub struct ConsoleLogSink;

impl ConsoleLogSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for ConsoleLogSink {
    fn record<C: ConsolePort + ?Sized>(&mut self, console: &mut C, message: &str) -> Result<()> {
        info!("LOG | {}", message);
        let line = render_log_tag(message)?;
        console.write_line(&line)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        // Nothing is persisted in this backend, so there is nothing to reset.
        Err(StorageError::Unavailable.into())
    }
}

// ── Backend selection ─────────────────────────────────────────

/// The sink chosen by [`LogBackend`].
pub enum BackendLogSink<S> {
    Storage(StorageLogSink<S>),
    Console(ConsoleLogSink),
}

impl<S: LogStorePort> BackendLogSink<S> {
    /// Build the configured backend.  `store` is dropped for the console
    /// backend.
    pub fn from_backend(backend: LogBackend, store: S) -> Self {
        match backend {
            LogBackend::Storage => Self::Storage(StorageLogSink::new(store)),
            LogBackend::Console => Self::Console(ConsoleLogSink::new()),
        }
    }

    pub fn backend(&self) -> LogBackend {
        match self {
            Self::Storage(_) => LogBackend::Storage,
            Self::Console(_) => LogBackend::Console,
        }
    }
}

impl<S: LogStorePort> LogSink for BackendLogSink<S> {
    fn record<C: ConsolePort + ?Sized>(&mut self, console: &mut C, message: &str) -> Result<()> {
        match self {
            Self::Storage(sink) => sink.record(console, message),
            Self::Console(sink) => sink.record(console, message),
        }
    }

    fn clear(&mut self) -> Result<()> {
        match self {
            Self::Storage(sink) => sink.clear(),
            Self::Console(sink) => sink.clear(),
        }
    }
}

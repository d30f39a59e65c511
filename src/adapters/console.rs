//! Serial console adapter.
//!
//! Implements [`ConsolePort`] over the debug UART.
//!
//! - **`target_os = "espidf"`** — wraps an `esp-idf-hal` [`UartDriver`]
//!   configured for the console baud rate; reads are non-blocking.
//! - **`not(target_os = "espidf")`** — in-memory simulation: inbound bytes
//!   are queued with [`SerialConsole::push_input`] and written lines are
//!   collected for inspection.

use crate::app::ports::ConsolePort;
use crate::error::ConsoleError;

#[cfg(not(target_os = "espidf"))]
use std::collections::VecDeque;

#[cfg(target_os = "espidf")]
use esp_idf_hal::{delay::NON_BLOCK, uart::UartDriver};

pub struct SerialConsole {
    #[cfg(target_os = "espidf")]
    uart: UartDriver<'static>,
    #[cfg(not(target_os = "espidf"))]
    rx: VecDeque<u8>,
    #[cfg(not(target_os = "espidf"))]
    tx: Vec<String>,
}

#[cfg(target_os = "espidf")]
impl SerialConsole {
    pub fn new(uart: UartDriver<'static>) -> Self {
        Self { uart }
    }
}

#[cfg(target_os = "espidf")]
impl ConsolePort for SerialConsole {
    fn read_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        match self.uart.read(&mut buf, NON_BLOCK) {
            Ok(1) => Some(buf[0]),
            _ => None,
        }
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        for chunk in [line.as_bytes(), b"\r\n"] {
            match self.uart.write(chunk) {
                Ok(n) if n == chunk.len() => {}
                _ => return Err(ConsoleError::WriteFailed),
            }
        }
        Ok(())
    }
}

#[cfg(not(target_os = "espidf"))]
impl Default for SerialConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_os = "espidf"))]
impl SerialConsole {
    pub fn new() -> Self {
        Self {
            rx: VecDeque::new(),
            tx: Vec::new(),
        }
    }

    /// Queue bytes as if they had arrived on the wire.
    pub fn push_input(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    /// Lines written so far, oldest first.
    pub fn output(&self) -> &[String] {
        &self.tx
    }

    /// Drain the written lines.
    pub fn take_output(&mut self) -> Vec<String> {
        core::mem::take(&mut self.tx)
    }

    pub fn pending_input(&self) -> usize {
        self.rx.len()
    }
}

#[cfg(not(target_os = "espidf"))]
impl ConsolePort for SerialConsole {
    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.tx.push(line.to_owned());
        Ok(())
    }
}

//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the mode controller for the PawLog logger:
//! button handling, mode transitions, sleep sampling, and the sync-mode
//! console commands.  All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;

//! Mock hardware adapters for integration tests.
//!
//! Records every indicator call so tests can assert on the full command
//! history without touching real GPIO/PWM registers.

use std::collections::VecDeque;

use pawlog::activity::MotionFrame;
use pawlog::adapters::console::SerialConsole;
use pawlog::adapters::log_sink::{ConsoleLogSink, StorageLogSink};
use pawlog::app::ports::{
    Button, ButtonPort, IndicatorPort, Led, Level, LogSink, LogStorePort, MotionSensorPort,
};
use pawlog::app::service::ModeController;
use pawlog::config::LoggerConfig;
use pawlog::error::{SensorError, StorageError};

// ── Indicator call record ─────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorCall {
    SetLed { led: Led, on: bool },
    Activity(u8),
}

// ── MockPanel (buttons + LEDs) ────────────────────────────────

#[derive(Default)]
pub struct MockPanel {
    pub sync_level: Level,
    pub sleep_level: Level,
    pub calls: Vec<IndicatorCall>,
    pub reads: usize,
}

#[allow(dead_code)]
impl MockPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: Button) {
        *self.level_mut(button) = Level::High;
    }

    pub fn release(&mut self, button: Button) {
        *self.level_mut(button) = Level::Low;
    }

    fn level_mut(&mut self, button: Button) -> &mut Level {
        match button {
            Button::Sync => &mut self.sync_level,
            Button::Sleep => &mut self.sleep_level,
        }
    }

    /// Last commanded state of an on/off LED.
    pub fn led_on(&self, led: Led) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match *c {
                IndicatorCall::SetLed { led: l, on } if l == led => Some(on),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// Last commanded activity level.
    pub fn activity(&self) -> u8 {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match *c {
                IndicatorCall::Activity(level) => Some(level),
                _ => None,
            })
            .unwrap_or(0)
    }
}

impl ButtonPort for MockPanel {
    fn read_level(&mut self, button: Button) -> Level {
        self.reads += 1;
        match button {
            Button::Sync => self.sync_level,
            Button::Sleep => self.sleep_level,
        }
    }
}

impl IndicatorPort for MockPanel {
    fn set_led(&mut self, led: Led, on: bool) {
        self.calls.push(IndicatorCall::SetLed { led, on });
    }

    fn set_activity_level(&mut self, level: u8) {
        self.calls.push(IndicatorCall::Activity(level));
    }
}

// ── ScriptedSensor ────────────────────────────────────────────

/// Replays queued readings; reads past the end see a still device.
#[derive(Default)]
pub struct ScriptedSensor {
    pub readings: VecDeque<Result<MotionFrame, SensorError>>,
    pub reads: usize,
}

#[allow(dead_code)]
impl ScriptedSensor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_xy(pairs: &[(i16, i16)]) -> Self {
        Self {
            readings: pairs
                .iter()
                .map(|&(x, y)| Ok(MotionFrame::from_accel_xy(x, y)))
                .collect(),
            reads: 0,
        }
    }

    pub fn push_failure(&mut self, err: SensorError) {
        self.readings.push_back(Err(err));
    }
}

impl MotionSensorPort for ScriptedSensor {
    fn read_motion(&mut self) -> Result<MotionFrame, SensorError> {
        self.reads += 1;
        self.readings
            .pop_front()
            .unwrap_or(Ok(MotionFrame::default()))
    }
}

// ── MemoryLogStore ────────────────────────────────────────────

/// In-memory log store with a switchable availability flag.
pub struct MemoryLogStore {
    pub lines: Option<Vec<String>>,
    pub available: bool,
}

#[allow(dead_code)]
impl MemoryLogStore {
    pub fn new() -> Self {
        Self {
            lines: None,
            available: true,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            lines: None,
            available: false,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.clone().unwrap_or_default()
    }
}

impl LogStorePort for MemoryLogStore {
    fn append_line(&mut self, line: &str) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        self.lines.get_or_insert_with(Vec::new).push(line.to_owned());
        Ok(())
    }

    fn read_all(&mut self) -> Result<Vec<u8>, StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        let mut out = Vec::new();
        for line in self.lines.iter().flatten() {
            out.extend_from_slice(line.as_bytes());
            out.push(b'\n');
        }
        Ok(out)
    }

    fn delete(&mut self) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        self.lines.take().map(|_| ()).ok_or(StorageError::NotFound)
    }
}

// ── Rig (controller wired to mocks) ───────────────────────────

pub struct Rig<S> {
    pub ctl: ModeController,
    pub panel: MockPanel,
    pub sensor: ScriptedSensor,
    pub console: SerialConsole,
    pub sink: S,
}

#[allow(dead_code)]
impl<S: LogSink> Rig<S> {
    pub fn new(sink: S) -> Self {
        let mut ctl = ModeController::new(LoggerConfig::default());
        let mut panel = MockPanel::new();
        ctl.start(&mut panel);
        Self {
            ctl,
            panel,
            sensor: ScriptedSensor::new(),
            console: SerialConsole::new(),
            sink,
        }
    }

    pub fn tick(&mut self, now_ms: u32) {
        self.ctl.tick(
            now_ms,
            &mut self.panel,
            &mut self.sensor,
            &mut self.console,
            &mut self.sink,
        );
    }

    /// Press at `now_ms`, release one millisecond later (two ticks).
    pub fn click(&mut self, button: Button, now_ms: u32) {
        self.panel.press(button);
        self.tick(now_ms);
        self.panel.release(button);
        self.tick(now_ms + 1);
    }
}

#[allow(dead_code)]
pub fn storage_rig() -> Rig<StorageLogSink<MemoryLogStore>> {
    Rig::new(StorageLogSink::new(MemoryLogStore::new()))
}

#[allow(dead_code)]
pub fn console_rig() -> Rig<ConsoleLogSink> {
    Rig::new(ConsoleLogSink::new())
}

/// Lines persisted by a storage rig.
#[allow(dead_code)]
pub fn stored(rig: &Rig<StorageLogSink<MemoryLogStore>>) -> Vec<String> {
    rig.sink.store().lines()
}

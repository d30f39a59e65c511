//! Application service — the mode controller.
//!
//! [`ModeController`] owns the mode machine, the two button debouncers, the
//! sample throttle and the shared context.  All I/O flows through port
//! traits injected at call sites, so the controller runs unchanged against
//! real peripherals or test doubles.
//!
//! ```text
//!   ButtonPort ──▶ ┌──────────────────────────┐ ──▶ IndicatorPort
//! MotionSensor ──▶ │      ModeController       │ ──▶ LogSink
//!  ConsolePort ◀─▶ │ FSM · debounce · session  │
//!                  └──────────────────────────┘
//! ```
//!
//! Timing is driven by the `now_ms` argument of every call.  Nothing here
//! blocks; the ≥ `debounce_ms` spacing between accepted edges and the
//! ≥ `sample_interval_ms` spacing between samples are checked against it.

use core::fmt::Write;

use log::{debug, info, warn};

use crate::activity::{ActivitySample, SleepSession};
use crate::config::LoggerConfig;
use crate::drivers::button::ButtonDebouncer;
use crate::fsm::context::{IndicatorCommands, ModeContext};
use crate::fsm::states::build_mode_table;
use crate::fsm::{Mode, ModeMachine, Transition};
use crate::timing::IntervalGate;

use super::commands::SyncCommand;
use super::events::{DATA_CLOSE, DATA_OPEN, LogLine};
use super::ports::{
    Button, ButtonPort, ConsolePort, IndicatorPort, Led, LogSink, MotionSensorPort,
};

// ───────────────────────────────────────────────────────────────
// ModeController
// ───────────────────────────────────────────────────────────────

/// Owns the operating mode and everything that may change it.
pub struct ModeController {
    fsm: ModeMachine,
    ctx: ModeContext,
    config: LoggerConfig,
    sync_button: ButtonDebouncer,
    sleep_button: ButtonDebouncer,
    /// Sample throttle; reset on entering Sleep so the first sample is
    /// taken on the first Sleep tick.
    sampler: IntervalGate,
}

impl ModeController {
    /// Construct the controller in Idle.
    ///
    /// Does **not** drive any output; call [`start`](Self::start) next.
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            fsm: ModeMachine::new(build_mode_table(), Mode::Idle),
            ctx: ModeContext::new(),
            sync_button: ButtonDebouncer::new(config.debounce_ms),
            sleep_button: ButtonDebouncer::new(config.debounce_ms),
            sampler: IntervalGate::new(config.sample_interval_ms),
            config,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Start the mode machine and drive every indicator to its initial
    /// (off) state.
    pub fn start(&mut self, hw: &mut impl IndicatorPort) {
        self.fsm.start(&mut self.ctx);
        self.apply_indicators(hw);
        info!("ModeController started in {:?}", self.fsm.current_mode());
    }

    // ── Main-loop dispatch ────────────────────────────────────

    /// Run one main-loop iteration.  Which handlers run depends only on the
    /// mode at the start of the call:
    ///
    /// | Mode  | Handlers                                             |
    /// |-------|------------------------------------------------------|
    /// | Idle  | sync button, sleep button                            |
    /// | Sync  | sync button, then one console byte if still in Sync  |
    /// | Sleep | sleep button, then one sample if still in Sleep      |
    ///
    /// The inactive mode's button is still read so a press held through
    /// the other mode cannot fire on return to Idle.
    pub fn tick<H, M, C, S>(
        &mut self,
        now_ms: u32,
        hw: &mut H,
        sensor: &mut M,
        console: &mut C,
        sink: &mut S,
    ) where
        H: ButtonPort + IndicatorPort,
        M: MotionSensorPort,
        C: ConsolePort + ?Sized,
        S: LogSink,
    {
        match self.fsm.current_mode() {
            Mode::Idle => {
                self.poll_sync_button(now_ms, hw, console, sink);
                self.poll_sleep_button(now_ms, hw, console, sink);
            }
            Mode::Sync => {
                self.track_level(Button::Sleep, now_ms, hw);
                self.poll_sync_button(now_ms, hw, console, sink);
                if self.fsm.current_mode() == Mode::Sync {
                    if let Some(byte) = console.read_byte() {
                        self.handle_sync_command(byte, console, sink);
                    }
                }
            }
            Mode::Sleep => {
                self.track_level(Button::Sync, now_ms, hw);
                self.poll_sleep_button(now_ms, hw, console, sink);
                self.sample_sleep_activity(now_ms, sensor, hw);
            }
        }
    }

    // ── Button polling ────────────────────────────────────────

    /// Poll the sync button.  A debounced rising edge toggles Idle ⇄ Sync;
    /// it is read but ignored while Sleep is active.
    pub fn poll_sync_button<H, C, S>(
        &mut self,
        now_ms: u32,
        hw: &mut H,
        console: &mut C,
        sink: &mut S,
    ) -> Option<Transition>
    where
        H: ButtonPort + IndicatorPort,
        C: ConsolePort + ?Sized,
        S: LogSink,
    {
        self.poll_button(Button::Sync, now_ms, hw, console, sink)
    }

    /// Poll the sleep button.  A debounced rising edge toggles Idle ⇄ Sleep;
    /// it is read but ignored while Sync is active.
    pub fn poll_sleep_button<H, C, S>(
        &mut self,
        now_ms: u32,
        hw: &mut H,
        console: &mut C,
        sink: &mut S,
    ) -> Option<Transition>
    where
        H: ButtonPort + IndicatorPort,
        C: ConsolePort + ?Sized,
        S: LogSink,
    {
        self.poll_button(Button::Sleep, now_ms, hw, console, sink)
    }

    /// Refresh a button's last level without acting on any edge.
    fn track_level(&mut self, button: Button, now_ms: u32, hw: &mut impl ButtonPort) {
        let level = hw.read_level(button);
        let debouncer = match button {
            Button::Sync => &mut self.sync_button,
            Button::Sleep => &mut self.sleep_button,
        };
        if debouncer.sample(level, now_ms) {
            debug!("{:?} button ignored in {:?}", button, self.fsm.current_mode());
        }
    }

    fn poll_button<H, C, S>(
        &mut self,
        button: Button,
        now_ms: u32,
        hw: &mut H,
        console: &mut C,
        sink: &mut S,
    ) -> Option<Transition>
    where
        H: ButtonPort + IndicatorPort,
        C: ConsolePort + ?Sized,
        S: LogSink,
    {
        let level = hw.read_level(button);
        let debouncer = match button {
            Button::Sync => &mut self.sync_button,
            Button::Sleep => &mut self.sleep_button,
        };
        if !debouncer.sample(level, now_ms) {
            return None;
        }
        let mode = self.fsm.current_mode();
        if !mode.accepts(button) {
            debug!("{:?} button ignored in {:?}", button, mode);
            return None;
        }
        debouncer.lock(now_ms);

        match button {
            Button::Sync => self.ctx.edges.sync = true,
            Button::Sleep => self.ctx.edges.sleep = true,
        }
        let transition = self.fsm.step(&mut self.ctx);
        if let Some(t) = transition {
            if t.to == Mode::Sleep {
                self.sampler.reset();
            }
            self.apply_indicators(hw);
        }
        self.flush(console, sink);
        transition
    }

    // ── Sleep sampling ────────────────────────────────────────

    /// Take one motion sample if the mode is Sleep and the throttle allows.
    ///
    /// A failed sensor read is logged and skipped; the throttle still
    /// advances so the next attempt waits a full interval.
    pub fn sample_sleep_activity<M, H>(
        &mut self,
        now_ms: u32,
        sensor: &mut M,
        hw: &mut H,
    ) -> Option<ActivitySample>
    where
        M: MotionSensorPort,
        H: IndicatorPort,
    {
        if self.fsm.current_mode() != Mode::Sleep || !self.sampler.is_open(now_ms) {
            return None;
        }
        self.sampler.mark(now_ms);

        match sensor.read_motion() {
            Ok(frame) => {
                let sample = ActivitySample::from_frame(&frame);
                self.ctx.session.record(sample);
                self.ctx.indicators.activity_level = sample.intensity();
                hw.set_activity_level(sample.intensity());
                debug!(
                    "sample step={} (samples={}, total={})",
                    sample.step,
                    self.ctx.session.sample_count(),
                    self.ctx.session.activity_total()
                );
                Some(sample)
            }
            Err(e) => {
                warn!("Motion sample skipped: {}", e);
                None
            }
        }
    }

    // ── Sync-mode console commands ────────────────────────────

    /// Act on one console byte.  Only meaningful in Sync mode; unknown bytes
    /// are ignored.
    pub fn handle_sync_command<C, S>(
        &mut self,
        byte: u8,
        console: &mut C,
        sink: &mut S,
    ) -> Option<SyncCommand>
    where
        C: ConsolePort + ?Sized,
        S: LogSink,
    {
        if self.fsm.current_mode() != Mode::Sync {
            debug!("console byte 0x{:02x} outside Sync mode", byte);
            return None;
        }
        let Some(cmd) = SyncCommand::from_byte(byte) else {
            debug!("ignoring console byte 0x{:02x}", byte);
            return None;
        };

        let mut note = LogLine::new();
        let _ = write!(note, "received command {}", char::from(cmd.as_byte()));
        self.ctx.note(&note);
        self.flush(console, sink);

        match cmd {
            SyncCommand::DumpSummary => self.write_summary(console),
            SyncCommand::ResetLog => {
                match sink.clear() {
                    Ok(()) => {
                        info!("Persisted log cleared");
                        self.ctx.note("log cleared");
                    }
                    Err(e) => {
                        warn!("Log reset failed: {}", e);
                        let mut line = LogLine::new();
                        let _ = write!(line, "log reset failed: {}", e);
                        self.ctx.note(&line);
                    }
                }
                self.flush(console, sink);
            }
        }
        Some(cmd)
    }

    /// Data envelope holding the current (or last closed) session summary.
    fn write_summary<C: ConsolePort + ?Sized>(&self, console: &mut C) {
        let summary = self.ctx.session.summarize();
        for line in [DATA_OPEN, summary.as_str(), DATA_CLOSE] {
            if let Err(e) = console.write_line(line) {
                warn!("Data response aborted: {}", e);
                return;
            }
        }
    }

    // ── Output helpers ────────────────────────────────────────

    fn apply_indicators(&self, hw: &mut impl IndicatorPort) {
        let ind = self.ctx.indicators;
        hw.set_led(Led::Sync, ind.sync_led);
        hw.set_led(Led::Sleep, ind.sleep_led);
        hw.set_activity_level(ind.activity_level);
    }

    /// Hand every queued line to the sink, oldest first.  Sink failures are
    /// logged and never stop the controller.
    fn flush<C, S>(&mut self, console: &mut C, sink: &mut S)
    where
        C: ConsolePort + ?Sized,
        S: LogSink,
    {
        for line in self.ctx.take_outbox() {
            if let Err(e) = sink.record(console, &line) {
                warn!("Log sink rejected '{}': {}", line, e);
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.fsm.current_mode()
    }

    pub fn session(&self) -> &SleepSession {
        &self.ctx.session
    }

    pub fn indicators(&self) -> IndicatorCommands {
        self.ctx.indicators
    }

    /// Mode transitions taken since start.
    pub fn transitions(&self) -> u32 {
        self.fsm.transitions()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }
}

//! Concrete mode handler functions and table builder.
//!
//! Each mode is defined by three plain `fn` pointers in a fixed table.
//!
//! ```text
//!            [sync edge]              [sleep edge]
//!   SYNC ◀──────────────── IDLE ────────────────▶ SLEEP
//!     │    ──────────────▶  ▲  ◀──────────────     │
//!     │      [sync edge]    │    [sleep edge]      │
//!     └──── no transition between SYNC and SLEEP ──┘
//! ```

use super::context::ModeContext;
use super::{Mode, ModeDescriptor};
use log::info;

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static mode table.  Called once at startup.
pub fn build_mode_table() -> [ModeDescriptor; Mode::COUNT] {
    [
        // Index 0 — Idle
        ModeDescriptor {
            id: Mode::Idle,
            name: "Idle",
            on_enter: None,
            on_exit: None,
            on_update: idle_update,
        },
        // Index 1 — Sync
        ModeDescriptor {
            id: Mode::Sync,
            name: "Sync",
            on_enter: Some(sync_enter),
            on_exit: Some(sync_exit),
            on_update: sync_update,
        },
        // Index 2 — Sleep
        ModeDescriptor {
            id: Mode::Sleep,
            name: "Sleep",
            on_enter: Some(sleep_enter),
            on_exit: Some(sleep_exit),
            on_update: sleep_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  IDLE — neither mode active, both buttons live
// ═══════════════════════════════════════════════════════════════════════════

fn idle_update(ctx: &mut ModeContext) -> Option<Mode> {
    if ctx.edges.sync {
        return Some(Mode::Sync);
    }
    if ctx.edges.sleep {
        return Some(Mode::Sleep);
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  SYNC — console commands accepted, sleep button inert
// ═══════════════════════════════════════════════════════════════════════════

fn sync_enter(ctx: &mut ModeContext) {
    ctx.indicators.sync_led = true;
    ctx.note("sync mode enabled");
    info!("SYNC: console commands enabled");
}

fn sync_exit(ctx: &mut ModeContext) {
    ctx.indicators.sync_led = false;
    ctx.note("sync mode disabled");
}

fn sync_update(ctx: &mut ModeContext) -> Option<Mode> {
    ctx.edges.sync.then_some(Mode::Idle)
}

// ═══════════════════════════════════════════════════════════════════════════
//  SLEEP — sampling motion into the session, sync button inert
// ═══════════════════════════════════════════════════════════════════════════

fn sleep_enter(ctx: &mut ModeContext) {
    // Session must be zero before the LED tells the user sampling started.
    ctx.session.reset();
    ctx.indicators.sleep_led = true;
    ctx.note("sleep mode enabled");
    info!("SLEEP: new session started");
}

fn sleep_exit(ctx: &mut ModeContext) {
    ctx.indicators.sleep_led = false;
    ctx.indicators.activity_level = 0;
    ctx.note("sleep mode disabled");
    let summary = ctx.session.summarize();
    info!("SLEEP: session closed, {}", summary);
    ctx.note(&summary);
}

fn sleep_update(ctx: &mut ModeContext) -> Option<Mode> {
    ctx.edges.sleep.then_some(Mode::Idle)
}

//! Function-pointer finite state machine engine for the operating mode.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  ModeTable                                               │
//! │  ┌────────┬───────────┬──────────┬───────────────────┐   │
//! │  │ Mode   │ on_enter  │ on_exit  │ on_update         │   │
//! │  ├────────┼───────────┼──────────┼───────────────────┤   │
//! │  │ Idle   │ —         │ —        │ fn(ctx)->Option<> │   │
//! │  │ Sync   │ fn(ctx)   │ fn(ctx)  │ fn(ctx)->Option<> │   │
//! │  │ Sleep  │ fn(ctx)   │ fn(ctx)  │ fn(ctx)->Option<> │   │
//! │  └────────┴───────────┴──────────┴───────────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Each step the engine calls `on_update` for the **current** mode with the
//! debounced button edges in [`ModeContext::edges`].  If it returns
//! `Some(next)`, the engine runs `on_exit` for the current mode, then
//! `on_enter` for the next, and updates the current index.  Edges are
//! consumed by every step.

pub mod context;
pub mod states;

use context::ModeContext;
use log::info;

use crate::app::ports::Button;

// ---------------------------------------------------------------------------
// Mode identity
// ---------------------------------------------------------------------------

/// The mutually exclusive operating modes.
/// Must stay in sync with the table built in [`states::build_mode_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    Idle = 0,
    Sync = 1,
    Sleep = 2,
}

impl Mode {
    /// Total number of modes; sizes the table array.
    pub const COUNT: usize = 3;

    /// Whether an edge on `button` may act in this mode.  A button can start
    /// its own mode from Idle and stop it from that same mode; it is inert
    /// while the other mode is active.
    pub fn accepts(self, button: Button) -> bool {
        matches!(
            (self, button),
            (Self::Idle, _) | (Self::Sync, Button::Sync) | (Self::Sleep, Button::Sleep)
        )
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` actions.
/// These run exactly once on each transition.
pub type ModeActionFn = fn(&mut ModeContext);

/// Signature for the per-step update handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type ModeUpdateFn = fn(&mut ModeContext) -> Option<Mode>;

// ---------------------------------------------------------------------------
// Mode descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single mode.
/// Stored in a fixed-size array.
pub struct ModeDescriptor {
    pub id: Mode,
    pub name: &'static str,
    pub on_enter: Option<ModeActionFn>,
    pub on_exit: Option<ModeActionFn>,
    pub on_update: ModeUpdateFn,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// A completed transition, reported by [`ModeMachine::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Mode,
    pub to: Mode,
}

/// The mode state machine.
pub struct ModeMachine {
    /// Fixed-size table indexed by `Mode as usize`.
    table: [ModeDescriptor; Mode::COUNT],
    /// Index of the current mode.
    current: usize,
    /// Transitions taken since start (wraps at u32::MAX).
    transitions: u32,
}

impl ModeMachine {
    pub fn new(table: [ModeDescriptor; Mode::COUNT], initial: Mode) -> Self {
        debug_assert!(
            table.iter().enumerate().all(|(i, d)| d.id as usize == i),
            "mode table rows out of order"
        );
        Self {
            table,
            current: initial as usize,
            transitions: 0,
        }
    }

    /// Run the initial `on_enter` for the starting mode.
    /// Call once after construction, before the first `step()`.
    pub fn start(&mut self, ctx: &mut ModeContext) {
        info!("Mode machine starting in: {}", self.table[self.current].name);
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }

    /// Evaluate the current mode's `on_update` against the pending edges,
    /// transition if it asks to, and clear the edges.
    pub fn step(&mut self, ctx: &mut ModeContext) -> Option<Transition> {
        let next = (self.table[self.current].on_update)(ctx);
        ctx.edges.clear();

        let next = next?;
        if next as usize == self.current {
            return None;
        }
        let from = self.current_mode();
        self.transition(next, ctx);
        Some(Transition { from, to: next })
    }

    pub fn current_mode(&self) -> Mode {
        self.table[self.current].id
    }

    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next: Mode, ctx: &mut ModeContext) {
        let next_idx = next as usize;

        info!(
            "Mode transition: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );

        if let Some(exit) = self.table[self.current].on_exit {
            exit(ctx);
        }

        self.current = next_idx;
        self.transitions = self.transitions.wrapping_add(1);

        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }
}

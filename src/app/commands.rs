//! Inbound console commands, accepted only while Sync mode is active.
//!
//! The protocol is a single ASCII byte per command with no framing and no
//! acknowledgement.  Any other byte is ignored.

/// Commands the serial console can send into the mode controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncCommand {
    /// `'D'` — dump the session summary inside a `<cmd name='data'>` envelope.
    DumpSummary,
    /// `'R'` — erase the persisted log.
    ResetLog,
}

impl SyncCommand {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'D' => Some(Self::DumpSummary),
            b'R' => Some(Self::ResetLog),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Self::DumpSummary => b'D',
            Self::ResetLog => b'R',
        }
    }
}

//! Outbound log lines and their console wire format.
//!
//! The [`ModeController`](super::service::ModeController) emits [`LogLine`]s
//! through the [`LogSink`](super::ports::LogSink) port.  The console backend
//! wraps each one in a single self-closing tag:
//!
//! ```text
//!   <log message='sync mode enabled'/>
//! ```
//!
//! Data responses use a three-line envelope:
//!
//! ```text
//!   <cmd name='data'>
//!   SLEEP: duration=3, activity=4
//!   </cmd>
//! ```

use core::fmt::{self, Write};

use crate::error::ConsoleError;

/// Capacity of one log message (bytes).
pub const LOG_LINE_CAP: usize = 96;

/// Capacity of one rendered console line.  Escaping can grow a message up
/// to six-fold (`'` → `&apos;`), plus the tag itself.
pub const CONSOLE_LINE_CAP: usize = LOG_LINE_CAP * 6 + 24;

/// An immutable text record describing a transition or a session summary.
pub type LogLine = heapless::String<LOG_LINE_CAP>;

/// Rendered console line.
pub type ConsoleLine = heapless::String<CONSOLE_LINE_CAP>;

/// Opening line of a data response.
pub const DATA_OPEN: &str = "<cmd name='data'>";
/// Closing line of a data response.
pub const DATA_CLOSE: &str = "</cmd>";

/// Build a [`LogLine`], truncating at a character boundary if `message`
/// exceeds [`LOG_LINE_CAP`].
pub fn log_line(message: &str) -> LogLine {
    let mut line = LogLine::new();
    for ch in message.chars() {
        if line.push(ch).is_err() {
            break;
        }
    }
    line
}

/// Display adapter that renders `<log message='...'/>` with the payload
/// escaped, so quotes or angle brackets in a message cannot break the tag.
pub struct LogTag<'a>(pub &'a str);

impl fmt::Display for LogTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<log message='")?;
        write_escaped(f, self.0)?;
        f.write_str("'/>")
    }
}

fn write_escaped(out: &mut impl Write, text: &str) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '&' => out.write_str("&amp;")?,
            '\'' => out.write_str("&apos;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            other => out.write_char(other)?,
        }
    }
    Ok(())
}

/// Render `message` as a console log tag into a fixed-size buffer.
pub fn render_log_tag(message: &str) -> Result<ConsoleLine, ConsoleError> {
    let mut line = ConsoleLine::new();
    write!(line, "{}", LogTag(message)).map_err(|_| ConsoleError::LineTooLong)?;
    Ok(line)
}

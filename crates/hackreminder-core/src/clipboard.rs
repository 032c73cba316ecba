//! Copy text to the system clipboard through the terminal.
//!
//! Uses the OSC 52 escape sequence, which most terminal emulators (and
//! tmux with `set-clipboard on`) forward to the system clipboard, also
//! over SSH. Output that is not a terminal cannot carry it.

use std::io::{IsTerminal, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::error::{CoreError, Result};

/// The escape sequence that sets the clipboard to `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

/// Write the copy sequence to `out`.
pub fn copy_to(out: &mut dyn Write, text: &str) -> Result<()> {
    out.write_all(osc52_sequence(text).as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| CoreError::Clipboard(e.to_string()))?;
    debug!(bytes = text.len(), "copied to clipboard");
    Ok(())
}

/// Copy through stdout. Fails when stdout is redirected.
pub fn copy(text: &str) -> Result<()> {
    let stdout = std::io::stdout();
    if !stdout.is_terminal() {
        return Err(CoreError::Clipboard("stdout is not a terminal".into()));
    }
    copy_to(&mut stdout.lock(), text)
}

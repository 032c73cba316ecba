pub mod config;
pub mod data;
pub mod event;
pub mod notes;
pub mod profile;
pub mod settings;
pub mod status;
pub mod task;
pub mod template;
pub mod watch;

use std::io::{BufRead, IsTerminal, Write};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Ask a yes/no question on the terminal. Anything but "y"/"yes" is a no,
/// and so is a non-interactive stdin.
pub fn confirm(prompt: &str) -> bool {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return false;
    }
    print!("{prompt} [y/N] ");
    let _ = std::io::stdout().flush();
    let mut answer = String::new();
    if stdin.lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

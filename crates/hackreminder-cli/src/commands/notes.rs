//! Quick notes: edit, export to a file, or hand off to the mail client.

use std::io::Read;
use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;
use hackreminder_core::notes::{self, EmailDraft};
use hackreminder_core::Store;

use super::CmdResult;

#[derive(Subcommand)]
pub enum NotesAction {
    /// Print the notes
    Show,
    /// Replace the notes. Reads stdin when no text is given
    Set {
        text: Option<String>,
    },
    /// Append a line to the notes
    Append {
        line: String,
    },
    /// Erase the notes
    Clear,
    /// Write the notes to hackathon-notes-YYYY-MM-DD.txt
    Export {
        /// Target directory (default: current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Open a pre-filled email with the notes
    Email {
        /// Print the mailto link instead of opening it
        #[arg(long)]
        print: bool,
    },
}

pub fn run(action: NotesAction) -> CmdResult {
    let store = Store::open()?;

    match action {
        NotesAction::Show => {
            let text = store.notes();
            if text.is_empty() {
                eprintln!("(no notes)");
            } else {
                println!("{text}");
            }
        }
        NotesAction::Set { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            store.save_notes(&text)?;
            println!("Notes saved ({} characters)", text.chars().count());
        }
        NotesAction::Append { line } => {
            let updated = notes::append(&store.notes(), &line);
            store.save_notes(&updated)?;
            println!("Notes saved");
        }
        NotesAction::Clear => {
            store.save_notes("")?;
            println!("Notes cleared");
        }
        NotesAction::Export { dir } => {
            let dir = match dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            let path = notes::export_to_dir(&store.notes(), &dir, Utc::now())?;
            println!("Exported to {}", path.display());
        }
        NotesAction::Email { print } => {
            let draft = EmailDraft::for_notes(&store.notes(), Utc::now());
            if print {
                println!("{}", draft.mailto_url());
            } else if let Err(e) = draft.open() {
                eprintln!("could not open mail client: {e}");
                println!("{}", draft.mailto_url());
            }
        }
    }
    Ok(())
}

//! Scratch notes and their export surfaces.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};
use tracing::debug;

use crate::error::Result;

/// `hackathon-notes-YYYY-MM-DD.txt`, dated in UTC.
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("hackathon-notes-{}.txt", now.format("%Y-%m-%d"))
}

/// Write the notes verbatim into `dir`. Returns the file written.
pub fn export_to_dir(notes: &str, dir: &Path, now: DateTime<Utc>) -> Result<PathBuf> {
    let path = dir.join(export_file_name(now));
    std::fs::write(&path, notes)?;
    debug!(path = %path.display(), bytes = notes.len(), "notes exported");
    Ok(path)
}

/// Append a line, inserting a newline separator when needed.
pub fn append(notes: &str, line: &str) -> String {
    if notes.is_empty() {
        line.to_string()
    } else if notes.ends_with('\n') {
        format!("{notes}{line}")
    } else {
        format!("{notes}\n{line}")
    }
}

/// A pre-filled email for the platform's default mail handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    pub fn for_notes(notes: &str, now: DateTime<Utc>) -> Self {
        let local_date = now.with_timezone(&Local).format("%Y-%m-%d");
        Self {
            subject: format!("Hackathon Notes - {local_date}"),
            body: format!("Hi,\n\nHere are my hackathon notes:\n\n{notes}\n\nBest regards"),
        }
    }

    /// `mailto:` link with no recipient.
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:?subject={}&body={}",
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }

    /// Hand the draft to the default mail client.
    pub fn open(&self) -> Result<()> {
        open::that(self.mailto_url())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap()
    }

    #[test]
    fn export_name_uses_date() {
        assert_eq!(export_file_name(now()), "hackathon-notes-2024-03-15.txt");
    }

    #[test]
    fn export_writes_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let notes = "idea: 🚀 rocket\nlink: https://example.com\n";
        let path = export_to_dir(notes, dir.path(), now()).unwrap();
        assert_eq!(path.file_name().unwrap(), "hackathon-notes-2024-03-15.txt");
        assert_eq!(std::fs::read_to_string(path).unwrap(), notes);
    }

    #[test]
    fn append_separates_lines() {
        assert_eq!(append("", "a"), "a");
        assert_eq!(append("a", "b"), "a\nb");
        assert_eq!(append("a\n", "b"), "a\nb");
    }

    #[test]
    fn mailto_is_percent_encoded() {
        let draft = EmailDraft::for_notes("API key & demo", now());
        assert!(draft.body.starts_with("Hi,\n\nHere are my hackathon notes:\n\nAPI key & demo"));
        assert!(draft.body.ends_with("\n\nBest regards"));
        let url = draft.mailto_url();
        assert!(url.starts_with("mailto:?subject=Hackathon%20Notes%20-%20"));
        assert!(url.contains("&body=Hi%2C%0A%0AHere"));
        assert!(url.contains("API%20key%20%26%20demo"));
    }
}

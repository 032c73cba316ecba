//! Typed access to the persisted entries.
//!
//! Each entry lives under its own key as JSON. Reads never fail on bad
//! data: a missing or malformed entry yields the entry's default and the
//! problem is logged. Writes replace the whole entry.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::Database;
use crate::checklist::Checklist;
use crate::error::Result;
use crate::profile::Profile;
use crate::settings::Settings;
use crate::templates::TemplateSet;
use crate::tracked::{EventBook, TrackedEvent};

pub mod keys {
    pub const PROFILE: &str = "profile";
    pub const SELECTED_EVENT: &str = "selected-event";
    pub const TASKS: &str = "tasks";
    pub const NOTES: &str = "notes";
    pub const SETTINGS: &str = "settings";
    pub const TEMPLATES: &str = "templates";
    pub const CUSTOM_EVENTS: &str = "custom-events";

    pub const ALL: [&str; 7] = [
        PROFILE,
        SELECTED_EVENT,
        TASKS,
        NOTES,
        SETTINGS,
        TEMPLATES,
        CUSTOM_EVENTS,
    ];
}

pub struct Store {
    db: Database,
}

impl Store {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open the store in the data directory.
    pub fn open() -> Result<Self> {
        Ok(Self::new(Database::open()?))
    }

    pub fn open_memory() -> Result<Self> {
        Ok(Self::new(Database::open_memory()?))
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Read an entry, `None` when absent or unreadable.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.db.kv_get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "failed to read entry, using default");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "malformed entry, using default");
                None
            }
        }
    }

    pub fn load_or<T: DeserializeOwned>(&self, key: &str, default: impl FnOnce() -> T) -> T {
        self.load(key).unwrap_or_else(default)
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.db.kv_set(key, &json)?;
        debug!(key, bytes = json.len(), "entry saved");
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.db.kv_delete(key)?)
    }

    // ── Entries ──────────────────────────────────────────────────────

    pub fn profile(&self) -> Profile {
        self.load_or(keys::PROFILE, Profile::default)
    }

    pub fn set_profile(&self, profile: Profile) -> Result<()> {
        self.save(keys::PROFILE, &profile)
    }

    pub fn selected_event(&self) -> Option<TrackedEvent> {
        self.load::<Option<TrackedEvent>>(keys::SELECTED_EVENT).flatten()
    }

    pub fn event_book(&self) -> EventBook {
        EventBook::new(
            self.load_or(keys::CUSTOM_EVENTS, Vec::new),
            self.selected_event(),
        )
    }

    pub fn save_event_book(&self, book: &EventBook) -> Result<()> {
        self.save(keys::CUSTOM_EVENTS, &book.custom)?;
        self.save(keys::SELECTED_EVENT, &book.selected)
    }

    pub fn checklist(&self) -> Checklist {
        self.load_or(keys::TASKS, Checklist::default)
    }

    pub fn save_checklist(&self, checklist: &Checklist) -> Result<()> {
        self.save(keys::TASKS, checklist)
    }

    pub fn notes(&self) -> String {
        self.load_or(keys::NOTES, String::new)
    }

    pub fn save_notes(&self, notes: &str) -> Result<()> {
        self.save(keys::NOTES, notes)
    }

    pub fn settings(&self) -> Settings {
        self.load_or(keys::SETTINGS, Settings::default)
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.save(keys::SETTINGS, settings)
    }

    pub fn templates(&self) -> TemplateSet {
        self.load_or(keys::TEMPLATES, TemplateSet::default)
    }

    pub fn save_templates(&self, templates: &TemplateSet) -> Result<()> {
        self.save(keys::TEMPLATES, templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entries_fall_back_to_defaults() {
        let store = Store::open_memory().unwrap();
        assert_eq!(store.profile(), Profile::FirstTime);
        assert!(store.selected_event().is_none());
        assert!(store.checklist().is_empty());
        assert_eq!(store.notes(), "");
        assert_eq!(store.settings(), Settings::default());
        assert_eq!(store.templates(), TemplateSet::default());
        assert!(store.event_book().custom.is_empty());
    }

    #[test]
    fn malformed_entries_fall_back_to_defaults() {
        let store = Store::open_memory().unwrap();
        for key in keys::ALL {
            store.database().kv_set(key, "{not json").unwrap();
        }
        store.database().kv_set(keys::PROFILE, "\"night-owl\"").unwrap();
        assert_eq!(store.profile(), Profile::FirstTime);
        assert!(store.checklist().is_empty());
        assert_eq!(store.notes(), "");
        assert_eq!(store.settings(), Settings::default());
        assert_eq!(store.event_book(), EventBook::default());
    }

    #[test]
    fn cleared_selection_is_stored_as_null() {
        let store = Store::open_memory().unwrap();
        let mut book = store.event_book();
        book.select("bolthack").unwrap();
        store.save_event_book(&book).unwrap();
        assert_eq!(store.selected_event().unwrap().id, "bolthack");

        book.clear_selection();
        store.save_event_book(&book).unwrap();
        assert_eq!(
            store.database().kv_get(keys::SELECTED_EVENT).unwrap().as_deref(),
            Some("null")
        );
        assert!(store.selected_event().is_none());
    }

    #[test]
    fn remove_resets_entry() {
        let store = Store::open_memory().unwrap();
        store.save_notes("draft").unwrap();
        assert!(store.remove(keys::NOTES).unwrap());
        assert_eq!(store.notes(), "");
    }
}

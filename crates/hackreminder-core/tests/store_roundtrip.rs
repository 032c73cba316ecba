//! Persisted entries survive a reopen unchanged.

use hackreminder_core::storage::keys;
use hackreminder_core::{Database, Profile, Settings, Store, TemplateSet, Theme};

fn open(path: &std::path::Path) -> Store {
    Store::new(Database::open_at(path).unwrap())
}

#[test]
fn tasks_notes_and_settings_roundtrip_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hackreminder.db");

    let store = open(&path);
    let mut tasks = store.checklist();
    tasks.add("Write README", Some("20m")).unwrap();
    tasks.add("Ship 🚢 demo", None).unwrap();
    tasks.toggle("2").unwrap();
    store.save_checklist(&tasks).unwrap();
    store.save_notes("line one\n\tindented \"quoted\"\n中文笔记").unwrap();
    let mut settings = Settings::default();
    settings.toggle_theme();
    settings.toggle_language();
    store.save_settings(&settings).unwrap();

    let raw_before: Vec<_> = [keys::TASKS, keys::NOTES, keys::SETTINGS]
        .iter()
        .map(|k| store.database().kv_get(k).unwrap().unwrap())
        .collect();
    drop(store);

    let reopened = open(&path);
    assert_eq!(reopened.checklist(), tasks);
    assert_eq!(reopened.notes(), "line one\n\tindented \"quoted\"\n中文笔记");
    assert_eq!(reopened.settings(), settings);
    assert_eq!(reopened.settings().theme, Theme::Dark);

    // Saving what was loaded writes exactly the same bytes.
    reopened.save_checklist(&reopened.checklist()).unwrap();
    reopened.save_notes(&reopened.notes()).unwrap();
    reopened.save_settings(&reopened.settings()).unwrap();
    let raw_after: Vec<_> = [keys::TASKS, keys::NOTES, keys::SETTINGS]
        .iter()
        .map(|k| reopened.database().kv_get(k).unwrap().unwrap())
        .collect();
    assert_eq!(raw_before, raw_after);
}

#[test]
fn profile_events_and_templates_persist() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hackreminder.db");

    let store = open(&path);
    store.set_profile(Profile::Team).unwrap();
    let mut book = store.event_book();
    book.select("vshacks").unwrap();
    store.save_event_book(&book).unwrap();
    let mut templates = store.templates();
    templates.edit("built-with", "Rust, Tokio").unwrap();
    store.save_templates(&templates).unwrap();
    drop(store);

    let reopened = open(&path);
    assert_eq!(reopened.profile(), Profile::Team);
    assert_eq!(reopened.selected_event().unwrap().name, "vsHacks 2024");
    assert_eq!(reopened.templates(), templates);
    assert_ne!(reopened.templates(), TemplateSet::default());
}

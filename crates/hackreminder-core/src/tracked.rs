//! Tracked events: the hackathons a countdown can follow.
//!
//! Built-in events ship with the binary and are read-only apart from their
//! deadline and reminder, which may be overridden on the selected copy.
//! Custom events are created by the user and kept in their own list,
//! separate from the currently selected event.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;

/// Reminder choices offered when creating or editing an event.
pub const REMINDER_CHOICES: [u32; 4] = [15, 30, 60, 120];
pub const DEFAULT_REMINDER_MINUTES: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedEvent {
    pub id: String,
    pub name: String,
    pub deadline: DateTime<Utc>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub is_custom: bool,
    /// Overrides the profile presets with a single threshold.
    #[serde(default)]
    pub reminder_minutes: Option<u32>,
}

/// User input for creating or editing an event.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub name: Option<String>,
    pub deadline: Option<String>,
    pub reminder_minutes: Option<u32>,
}

/// Parse a deadline typed by the user.
///
/// Accepts RFC 3339 or a naive `YYYY-MM-DDTHH:MM[:SS]` (a space may replace
/// the `T`), the latter taken in the local time zone.
pub fn parse_deadline(input: &str) -> Result<DateTime<Utc>, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Required("deadline"));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| ValidationError::InvalidValue {
            field: "deadline".into(),
            message: format!("cannot parse '{input}' as a date-time"),
        })?;
    local_to_utc(naive).ok_or_else(|| ValidationError::InvalidValue {
        field: "deadline".into(),
        message: format!("'{input}' does not exist in the local time zone"),
    })
}

fn local_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

fn builtin(id: &str, name: &str, deadline: &str, resources: &[&str]) -> Option<TrackedEvent> {
    let naive = NaiveDateTime::parse_from_str(deadline, "%Y-%m-%dT%H:%M:%S").ok()?;
    Some(TrackedEvent {
        id: id.to_string(),
        name: name.to_string(),
        deadline: local_to_utc(naive)?,
        resources: resources.iter().map(|r| r.to_string()).collect(),
        is_custom: false,
        reminder_minutes: None,
    })
}

/// The events that ship with the binary.
pub fn builtin_events() -> Vec<TrackedEvent> {
    [
        builtin(
            "vshacks",
            "vsHacks 2024",
            "2024-03-15T23:59:59",
            &["VSCode Extensions", "GitHub Copilot", "Documentation"],
        ),
        builtin(
            "bolthack",
            "BoltHack",
            "2024-04-01T18:00:00",
            &["Bolt Platform", "API Docs", "Community Discord"],
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn validate_reminder(minutes: u32) -> Result<u32, ValidationError> {
    if REMINDER_CHOICES.contains(&minutes) {
        Ok(minutes)
    } else {
        Err(ValidationError::InvalidValue {
            field: "reminder".into(),
            message: format!("must be one of {REMINDER_CHOICES:?}"),
        })
    }
}

fn required_name(name: Option<&str>) -> Result<String, ValidationError> {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => Ok(n.to_string()),
        _ => Err(ValidationError::Required("name")),
    }
}

/// Custom events plus the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBook {
    pub custom: Vec<TrackedEvent>,
    pub selected: Option<TrackedEvent>,
}

impl EventBook {
    pub fn new(custom: Vec<TrackedEvent>, selected: Option<TrackedEvent>) -> Self {
        Self { custom, selected }
    }

    /// Built-in events first, then custom ones in creation order.
    pub fn all(&self) -> Vec<TrackedEvent> {
        let mut all = builtin_events();
        all.extend(self.custom.iter().cloned());
        all
    }

    pub fn find(&self, id: &str) -> Option<TrackedEvent> {
        self.all().into_iter().find(|e| e.id == id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_ref().is_some_and(|e| e.id == id)
    }

    /// Create a custom event and select it.
    pub fn create(
        &mut self,
        draft: EventDraft,
        now: DateTime<Utc>,
    ) -> Result<TrackedEvent, ValidationError> {
        let name = required_name(draft.name.as_deref())?;
        let deadline = parse_deadline(draft.deadline.as_deref().unwrap_or_default())?;
        let reminder =
            validate_reminder(draft.reminder_minutes.unwrap_or(DEFAULT_REMINDER_MINUTES))?;

        let mut id = format!("custom-{}", now.timestamp_millis());
        while self.custom.iter().any(|e| e.id == id) {
            id.push('x');
        }

        let event = TrackedEvent {
            id,
            name,
            deadline,
            resources: Vec::new(),
            is_custom: true,
            reminder_minutes: Some(reminder),
        };
        debug!(id = %event.id, "custom event created");
        self.custom.push(event.clone());
        self.selected = Some(event.clone());
        Ok(event)
    }

    /// Edit an event and select the edited copy.
    ///
    /// Fields missing from the draft keep their current values. Built-in
    /// events keep their name and their catalog entry; only the selected
    /// copy carries the new deadline and reminder.
    pub fn edit(&mut self, id: &str, draft: EventDraft) -> Result<TrackedEvent, ValidationError> {
        let current = if self.is_selected(id) {
            self.selected.clone()
        } else {
            self.find(id)
        }
        .ok_or_else(|| ValidationError::NotFound {
            kind: "event",
            id: id.to_string(),
        })?;

        let name = required_name(Some(draft.name.as_deref().unwrap_or(&current.name)))?;
        if !current.is_custom && name != current.name {
            return Err(ValidationError::BuiltInEvent(current.name, "renamed"));
        }
        let deadline = match draft.deadline.as_deref() {
            Some(input) => parse_deadline(input)?,
            None => current.deadline,
        };
        let reminder_minutes = match draft.reminder_minutes {
            Some(m) => Some(validate_reminder(m)?),
            None => current.reminder_minutes,
        };

        let updated = TrackedEvent {
            name,
            deadline,
            reminder_minutes,
            ..current
        };
        if updated.is_custom {
            if let Some(slot) = self.custom.iter_mut().find(|e| e.id == id) {
                *slot = updated.clone();
            }
        }
        debug!(id, "event edited");
        self.selected = Some(updated.clone());
        Ok(updated)
    }

    /// Delete a custom event. Clears the selection if it pointed at it.
    pub fn delete(&mut self, id: &str, confirmed: bool) -> Result<TrackedEvent, ValidationError> {
        let event = self.find(id).ok_or_else(|| ValidationError::NotFound {
            kind: "event",
            id: id.to_string(),
        })?;
        if !event.is_custom {
            return Err(ValidationError::BuiltInEvent(event.name, "deleted"));
        }
        if !confirmed {
            return Err(ValidationError::DeleteNotConfirmed(event.name));
        }
        self.custom.retain(|e| e.id != id);
        if self.is_selected(id) {
            self.selected = None;
        }
        debug!(id, "custom event deleted");
        Ok(event)
    }

    pub fn select(&mut self, id: &str) -> Result<TrackedEvent, ValidationError> {
        let event = self.find(id).ok_or_else(|| ValidationError::NotFound {
            kind: "event",
            id: id.to_string(),
        })?;
        self.selected = Some(event.clone());
        Ok(event)
    }

    pub fn clear_selection(&mut self) -> Option<TrackedEvent> {
        self.selected.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn draft(name: &str, deadline: &str) -> EventDraft {
        EventDraft {
            name: Some(name.to_string()),
            deadline: Some(deadline.to_string()),
            reminder_minutes: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn builtins_are_listed_first() {
        let book = EventBook::default();
        let ids: Vec<_> = book.all().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["vshacks", "bolthack"]);
        assert!(book.all().iter().all(|e| !e.is_custom));
    }

    #[test]
    fn parse_deadline_accepts_rfc3339_and_naive() {
        let utc = parse_deadline("2024-04-01T18:00:00Z").unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2024, 4, 1, 18, 0, 0).unwrap());
        assert!(parse_deadline("2024-04-01T18:00").is_ok());
        assert!(parse_deadline("2024-04-01 18:00:30").is_ok());
        assert_eq!(parse_deadline("  "), Err(ValidationError::Required("deadline")));
        assert!(parse_deadline("tomorrow").is_err());
    }

    #[test]
    fn create_requires_name_and_deadline() {
        let mut book = EventBook::default();
        assert_eq!(
            book.create(draft("   ", "2024-04-01T18:00:00Z"), now()),
            Err(ValidationError::Required("name"))
        );
        assert_eq!(
            book.create(EventDraft { name: Some("Jam".into()), ..Default::default() }, now()),
            Err(ValidationError::Required("deadline"))
        );
        assert!(book.custom.is_empty());
        assert!(book.selected.is_none());
    }

    #[test]
    fn create_selects_with_default_reminder() {
        let mut book = EventBook::default();
        let event = book.create(draft(" Game Jam ", "2024-04-01T18:00:00Z"), now()).unwrap();
        assert_eq!(event.name, "Game Jam");
        assert_eq!(event.id, format!("custom-{}", now().timestamp_millis()));
        assert_eq!(event.reminder_minutes, Some(30));
        assert!(event.is_custom);
        assert_eq!(book.selected.as_ref(), Some(&event));
        assert_eq!(book.all().len(), 3);
    }

    #[test]
    fn create_rejects_unknown_reminder_choice() {
        let mut book = EventBook::default();
        let mut d = draft("Jam", "2024-04-01T18:00:00Z");
        d.reminder_minutes = Some(45);
        assert!(matches!(book.create(d, now()), Err(ValidationError::InvalidValue { .. })));
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let mut book = EventBook::default();
        let a = book.create(draft("A", "2024-04-01T18:00:00Z"), now()).unwrap();
        let b = book.create(draft("B", "2024-04-01T18:00:00Z"), now()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn edit_custom_updates_list_and_selection() {
        let mut book = EventBook::default();
        let event = book.create(draft("Jam", "2024-04-01T18:00:00Z"), now()).unwrap();
        book.clear_selection();
        let edited = book
            .edit(
                &event.id,
                EventDraft {
                    name: Some("Jam II".into()),
                    deadline: Some("2024-04-02T18:00:00Z".into()),
                    reminder_minutes: Some(60),
                },
            )
            .unwrap();
        assert_eq!(edited.deadline, event.deadline + Duration::days(1));
        assert_eq!(book.custom[0], edited);
        assert_eq!(book.selected, Some(edited));
    }

    #[test]
    fn builtin_cannot_be_renamed_but_deadline_can_change() {
        let mut book = EventBook::default();
        let err = book
            .edit("bolthack", EventDraft { name: Some("Other".into()), ..Default::default() })
            .unwrap_err();
        assert!(matches!(err, ValidationError::BuiltInEvent(_, "renamed")));

        let edited = book
            .edit(
                "bolthack",
                EventDraft { deadline: Some("2030-01-01T00:00:00Z".into()), ..Default::default() },
            )
            .unwrap();
        assert_eq!(edited.name, "BoltHack");
        assert_eq!(book.selected.as_ref().map(|e| e.deadline), Some(edited.deadline));
        assert_ne!(book.find("bolthack").unwrap().deadline, edited.deadline);
    }

    #[test]
    fn builtin_delete_is_rejected() {
        let mut book = EventBook::default();
        let err = book.delete("vshacks", true).unwrap_err();
        assert!(matches!(err, ValidationError::BuiltInEvent(_, "deleted")));
    }

    #[test]
    fn custom_delete_needs_confirmation_and_clears_selection() {
        let mut book = EventBook::default();
        let event = book.create(draft("Jam", "2024-04-01T18:00:00Z"), now()).unwrap();
        assert_eq!(
            book.delete(&event.id, false),
            Err(ValidationError::DeleteNotConfirmed("Jam".into()))
        );
        assert_eq!(book.custom.len(), 1);

        book.delete(&event.id, true).unwrap();
        assert!(book.custom.is_empty());
        assert!(book.selected.is_none());
    }

    #[test]
    fn select_unknown_id_fails() {
        let mut book = EventBook::default();
        assert!(matches!(book.select("nope"), Err(ValidationError::NotFound { .. })));
        assert_eq!(book.select("vshacks").unwrap().name, "vsHacks 2024");
        assert!(book.is_selected("vshacks"));
    }
}

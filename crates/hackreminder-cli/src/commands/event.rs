//! Tracked event commands: built-in hackathons and custom deadlines.

use chrono::{Local, Utc};
use clap::Subcommand;
use hackreminder_core::tracked::REMINDER_CHOICES;
use hackreminder_core::{EventDraft, Store, TrackedEvent};

use super::{confirm, print_json, CmdResult};

#[derive(Subcommand)]
pub enum EventAction {
    /// List built-in and custom events
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one event
    Show {
        /// Event id
        id: String,
    },
    /// Track an event
    Select {
        /// Event id
        id: String,
    },
    /// Stop tracking the current event
    Clear,
    /// Create a custom event and track it
    Add {
        /// Event name
        name: String,
        /// Deadline, RFC 3339 or local "YYYY-MM-DDTHH:MM"
        #[arg(long)]
        deadline: String,
        /// Reminder in minutes before the deadline (15, 30, 60 or 120)
        #[arg(long, value_parser = parse_reminder)]
        reminder: Option<u32>,
    },
    /// Edit an event and track the edited copy
    Edit {
        /// Event id
        id: String,
        /// New name (custom events only)
        #[arg(long)]
        name: Option<String>,
        /// New deadline
        #[arg(long)]
        deadline: Option<String>,
        /// New reminder in minutes
        #[arg(long, value_parser = parse_reminder)]
        reminder: Option<u32>,
    },
    /// Delete a custom event
    Delete {
        /// Event id
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

fn parse_reminder(s: &str) -> Result<u32, String> {
    let minutes: u32 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if REMINDER_CHOICES.contains(&minutes) {
        Ok(minutes)
    } else {
        Err(format!("reminder must be one of {REMINDER_CHOICES:?}"))
    }
}

pub fn run(action: EventAction) -> CmdResult {
    let store = Store::open()?;
    let mut book = store.event_book();

    match action {
        EventAction::List { json } => {
            if json {
                return print_json(&book.all());
            }
            println!("{}", store.settings().translations().hackathon_selector);
            for event in book.all() {
                let marker = if book.is_selected(&event.id) { "*" } else { " " };
                let kind = if event.is_custom { "custom" } else { "built-in" };
                println!(
                    "{marker} {:<22} {:<32} {}  [{kind}]",
                    event.id,
                    event.name,
                    local_time(&event)
                );
            }
        }
        EventAction::Show { id } => {
            let event = if book.is_selected(&id) {
                book.selected.clone()
            } else {
                book.find(&id)
            }
            .ok_or_else(|| format!("event not found: {id}"))?;
            print_event(&event);
        }
        EventAction::Select { id } => {
            let event = book.select(&id)?;
            store.save_event_book(&book)?;
            println!("Tracking {} (deadline {})", event.name, local_time(&event));
        }
        EventAction::Clear => match book.clear_selection() {
            Some(event) => {
                store.save_event_book(&book)?;
                println!("Stopped tracking {}", event.name);
            }
            None => println!("No event is being tracked"),
        },
        EventAction::Add {
            name,
            deadline,
            reminder,
        } => {
            let event = book.create(
                EventDraft {
                    name: Some(name),
                    deadline: Some(deadline),
                    reminder_minutes: reminder,
                },
                Utc::now(),
            )?;
            store.save_event_book(&book)?;
            println!("Created {} ({})", event.name, event.id);
        }
        EventAction::Edit {
            id,
            name,
            deadline,
            reminder,
        } => {
            let event = book.edit(
                &id,
                EventDraft {
                    name,
                    deadline,
                    reminder_minutes: reminder,
                },
            )?;
            store.save_event_book(&book)?;
            println!("Updated {}", event.name);
            print_event(&event);
        }
        EventAction::Delete { id, yes } => {
            let confirmed = yes || {
                let name = book.find(&id).map(|e| e.name).unwrap_or_else(|| id.clone());
                confirm(&format!("Delete \"{name}\"?"))
            };
            let event = book.delete(&id, confirmed)?;
            store.save_event_book(&book)?;
            println!("Deleted {}", event.name);
        }
    }
    Ok(())
}

fn local_time(event: &TrackedEvent) -> String {
    event
        .deadline
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

fn print_event(event: &TrackedEvent) {
    println!("{} ({})", event.name, event.id);
    println!("  Deadline: {}", local_time(event));
    match event.reminder_minutes {
        Some(m) => println!("  Reminder: {m} minutes before"),
        None => println!("  Reminder: profile presets"),
    }
    if !event.resources.is_empty() {
        println!("  Resources:");
        for link in &event.resources {
            println!("    {link}");
        }
    }
}

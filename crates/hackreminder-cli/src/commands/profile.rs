//! Reminder profile commands.
//!
//! A profile only decides which reminder presets are used when the tracked
//! event has no reminder of its own.

use clap::Subcommand;
use hackreminder_core::{Profile, Store};
use serde_json::json;

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// List all profiles with their reminder presets
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one profile
    Show {
        /// Profile id (e.g. "first-time", "time-crunch")
        id: String,
    },
    /// Make a profile the active one
    #[command(alias = "select")]
    Set {
        /// Profile id
        id: String,
    },
    /// Show the active profile
    Current,
}

pub fn run(action: ProfileAction) -> CmdResult {
    match action {
        ProfileAction::List { json } => list(json),
        ProfileAction::Show { id } => show(&id),
        ProfileAction::Set { id } => set(&id),
        ProfileAction::Current => current(),
    }
}

fn presets(profile: Profile) -> String {
    profile
        .reminder_presets()
        .iter()
        .map(|m| format!("{m}m"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn list(json: bool) -> CmdResult {
    let store = Store::open()?;
    let active = store.profile();

    if json {
        let profiles: Vec<_> = Profile::ALL
            .iter()
            .map(|p| {
                json!({
                    "id": p.id(),
                    "label": p.label(),
                    "reminders": p.reminder_presets(),
                    "active": *p == active,
                })
            })
            .collect();
        return print_json(&profiles);
    }

    println!("{}", store.settings().translations().identity_selector);
    for profile in Profile::ALL {
        let marker = if profile == active { "*" } else { " " };
        println!(
            "{marker} {:<12} {:<20} {}",
            profile.id(),
            profile.label(),
            presets(profile)
        );
    }
    Ok(())
}

fn show(id: &str) -> CmdResult {
    let profile: Profile = id.parse()?;
    println!("{} ({})", profile.label(), profile.id());
    println!("  Reminders: {}", presets(profile));
    Ok(())
}

fn set(id: &str) -> CmdResult {
    let profile: Profile = id.parse()?;
    let store = Store::open()?;
    store.set_profile(profile)?;
    println!("Profile set to {}", profile.label());
    if store
        .selected_event()
        .is_some_and(|e| e.reminder_minutes.is_some())
    {
        println!("  Note: the tracked event has its own reminder, which takes precedence.");
    }
    Ok(())
}

fn current() -> CmdResult {
    let profile = Store::open()?.profile();
    println!("{} ({})", profile.label(), profile.id());
    println!("  Reminders: {}", presets(profile));
    Ok(())
}

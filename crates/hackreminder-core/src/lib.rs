//! # HackReminder Core Library
//!
//! This library provides the core logic for HackReminder, a deadline
//! companion for hackathon participants. All operations are exposed through
//! the standalone CLI binary; this crate holds everything that is not
//! terminal plumbing.
//!
//! ## Architecture
//!
//! - **Countdown**: a pure engine that turns a deadline and the current time
//!   into a snapshot, plus the threshold alert policy and the tick loop that
//!   drives both
//! - **Storage**: a SQLite key-value store with typed, default-on-missing
//!   entries, and a TOML configuration file
//! - **Collaborators**: profiles, tracked events, task checklist, notes,
//!   submission templates and settings
//!
//! ## Key Components
//!
//! - [`compute_remaining`]: countdown decomposition
//! - [`should_alert`]: threshold alert policy
//! - [`Reminder`] / [`Ticker`]: one tick, and the loop that runs ticks
//! - [`Store`]: persisted application state
//! - [`Config`]: application configuration management

pub mod checklist;
pub mod clipboard;
pub mod countdown;
pub mod error;
pub mod events;
pub mod notes;
pub mod notify;
pub mod profile;
pub mod settings;
pub mod storage;
pub mod templates;
pub mod tracked;

pub use checklist::{Checklist, Progress, Task};
pub use countdown::{
    compute_remaining, should_alert, AlertNotice, AlertPolicy, AlertState, Clock,
    CountdownSnapshot, ManualClock, Reminder, SystemClock, TickContext, TickOutcome, Ticker,
    TickerHandle,
};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::{Event, StopReason};
pub use notify::{Notifier, Sound, SoundNotifier, TerminalNotifier};
pub use profile::Profile;
pub use settings::{Language, Settings, Theme, Translations};
pub use storage::{Config, Database, Store};
pub use templates::{Template, TemplateSet};
pub use tracked::{EventBook, EventDraft, TrackedEvent};

//! Built-in reminder profiles.
//!
//! A profile describes the kind of participant and carries the default
//! alert thresholds used when the tracked event has no custom reminder.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    #[default]
    FirstTime,
    Experienced,
    Team,
    TimeCrunch,
}

impl Profile {
    pub const ALL: [Profile; 4] = [
        Profile::FirstTime,
        Profile::Experienced,
        Profile::Team,
        Profile::TimeCrunch,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Profile::FirstTime => "first-time",
            Profile::Experienced => "experienced",
            Profile::Team => "team",
            Profile::TimeCrunch => "time-crunch",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Profile::FirstTime => "First-time Hacker",
            Profile::Experienced => "Experienced",
            Profile::Team => "Team Leader",
            Profile::TimeCrunch => "Time Crunch",
        }
    }

    /// Minutes before the deadline at which to alert, largest first.
    pub fn reminder_presets(self) -> &'static [u32] {
        match self {
            Profile::FirstTime => &[120, 60, 30, 15],
            Profile::Experienced => &[60, 30, 15],
            Profile::Team => &[90, 45, 30, 15],
            Profile::TimeCrunch => &[30, 15, 10, 5],
        }
    }

    pub fn find(id: &str) -> Option<Profile> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Profile {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::find(s).ok_or_else(|| crate::error::ValidationError::NotFound {
            kind: "profile",
            id: s.to_string(),
        })
    }
}

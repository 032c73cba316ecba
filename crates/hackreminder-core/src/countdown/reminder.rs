//! One tick of the countdown: engine + alert policy.
//!
//! The [`Reminder`] owns the [`AlertState`]. Everything else it needs is
//! handed in as a [`TickContext`] built fresh for every tick, so a change
//! to the tasks, the profile or the audio setting is seen on the very next
//! tick instead of whatever was current when watching started.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::alert::{AlertPolicy, AlertState};
use super::engine::{compute_remaining, CountdownSnapshot};
use crate::checklist::Progress;
use crate::events::Event;
use crate::profile::Profile;
use crate::storage::Store;
use crate::tracked::TrackedEvent;

/// Read-only inputs of one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickContext {
    pub event: Option<TrackedEvent>,
    pub profile: Profile,
    pub progress: Progress,
    pub audio_alerts: bool,
}

impl TickContext {
    /// Snapshot the persisted state.
    pub fn from_store(store: &Store) -> Self {
        Self {
            event: store.selected_event(),
            profile: store.profile(),
            progress: store.checklist().progress(),
            audio_alerts: store.settings().audio_alerts,
        }
    }

    /// The event's own reminder when set, else the profile presets.
    pub fn thresholds(&self) -> Vec<u32> {
        match self.event.as_ref().and_then(|e| e.reminder_minutes) {
            Some(m) => vec![m],
            None => self.profile.reminder_presets().to_vec(),
        }
    }

    /// The reminder shown as "next" next to the countdown.
    pub fn next_reminder(&self) -> Option<u32> {
        self.thresholds().first().copied()
    }
}

/// What the notifier is told when an alert fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertNotice {
    pub minutes_left: u32,
    pub target_name: String,
    pub progress: Progress,
    pub audio: bool,
}

impl AlertNotice {
    pub fn message(&self) -> String {
        format!(
            "⏰ HackReminder Alert!\n\n\
             {} minutes until {} deadline!\n\
             Task Progress: {}/{} ({}%)\n\n\
             Keep going! 🚀",
            self.minutes_left,
            self.target_name,
            self.progress.completed,
            self.progress.total,
            self.progress.percent()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// `None` when no event is tracked.
    pub snapshot: Option<CountdownSnapshot>,
    pub alert: Option<AlertNotice>,
    /// Set on the first tick that observes the deadline as past.
    pub deadline_passed: bool,
}

impl TickOutcome {
    pub fn events(&self, ctx: &TickContext, at: DateTime<Utc>) -> Vec<Event> {
        let mut events = Vec::new();
        if let Some(snapshot) = self.snapshot {
            events.push(Event::CountdownTick {
                event_id: ctx.event.as_ref().map(|e| e.id.clone()).unwrap_or_default(),
                snapshot,
                at,
            });
        }
        if let Some(alert) = &self.alert {
            events.push(Event::AlertFired {
                minutes_left: alert.minutes_left,
                target_name: alert.target_name.clone(),
                completed: alert.progress.completed,
                total: alert.progress.total,
                progress_pct: alert.progress.percent(),
                at,
            });
        }
        if self.deadline_passed {
            events.push(Event::DeadlinePassed {
                target_name: ctx.event.as_ref().map(|e| e.name.clone()).unwrap_or_default(),
                at,
            });
        }
        events
    }
}

/// Owns the alert state of one countdown loop.
#[derive(Debug, Clone, Default)]
pub struct Reminder {
    policy: AlertPolicy,
    state: AlertState,
    /// (event id, deadline) seen on the previous tick.
    tracking: Option<(String, DateTime<Utc>)>,
    passed_reported: bool,
}

impl Reminder {
    pub fn new(policy: AlertPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn tick(&mut self, ctx: &TickContext, now: DateTime<Utc>) -> TickOutcome {
        let Some(event) = ctx.event.as_ref() else {
            if self.tracking.take().is_some() {
                debug!("tracked event cleared");
            }
            self.passed_reported = false;
            return TickOutcome::default();
        };

        let key = (event.id.clone(), event.deadline);
        if self.tracking.as_ref() != Some(&key) {
            debug!(id = %event.id, deadline = %event.deadline, "tracking deadline");
            self.tracking = Some(key);
            self.passed_reported = false;
            self.state.reset();
        }

        let snapshot = compute_remaining(event.deadline, now);
        let mut outcome = TickOutcome {
            snapshot: Some(snapshot),
            ..TickOutcome::default()
        };

        if snapshot.is_past {
            outcome.deadline_passed = !self.passed_reported;
            self.passed_reported = true;
            return outcome;
        }

        let minutes_left = snapshot.total_minutes as i64;
        let thresholds = ctx.thresholds();
        if self
            .policy
            .should_alert(minutes_left, &thresholds, self.state.last_alert_at(), now)
        {
            self.state.record(now);
            info!(minutes_left, target = %event.name, "alert fired");
            outcome.alert = Some(AlertNotice {
                minutes_left: snapshot.total_minutes as u32,
                target_name: event.name.clone(),
                progress: ctx.progress,
                audio: ctx.audio_alerts,
            });
        }
        outcome
    }
}

//! Threshold alert policy.
//!
//! An alert fires when the whole minutes left equal one of the configured
//! thresholds exactly. Because minutes are evaluated on a per-second tick,
//! the same minute is observed about sixty times in a row; the cooldown
//! keeps it to one alert. Thresholds skipped over (suspended process,
//! slow tick) are not caught up.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Minimum gap between two alerts.
pub const ALERT_COOLDOWN_SECS: i64 = 60;

/// Decide whether an alert fires with the default 60 second cooldown.
pub fn should_alert(
    remaining_minutes: i64,
    thresholds: &[u32],
    last_alert_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    AlertPolicy::default().should_alert(remaining_minutes, thresholds, last_alert_at, now)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertPolicy {
    cooldown: Duration,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self::with_cooldown_secs(ALERT_COOLDOWN_SECS)
    }
}

impl AlertPolicy {
    pub fn with_cooldown_secs(secs: i64) -> Self {
        Self {
            cooldown: Duration::seconds(secs.max(0)),
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn should_alert(
        &self,
        remaining_minutes: i64,
        thresholds: &[u32],
        last_alert_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> bool {
        if remaining_minutes <= 0 {
            return false;
        }
        let hit = thresholds
            .iter()
            .any(|&t| t > 0 && i64::from(t) == remaining_minutes);
        if !hit {
            return false;
        }
        match last_alert_at {
            None => true,
            Some(last) => now.signed_duration_since(last) > self.cooldown,
        }
    }
}

/// When the last alert fired. Owned by exactly one tick loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertState {
    last_alert_at: Option<DateTime<Utc>>,
}

impl AlertState {
    pub fn last_alert_at(&self) -> Option<DateTime<Utc>> {
        self.last_alert_at
    }

    /// Consume a fire. Must be called in the same tick that observed it.
    pub fn record(&mut self, at: DateTime<Utc>) {
        self.last_alert_at = Some(at);
    }

    pub fn reset(&mut self) {
        self.last_alert_at = None;
    }
}

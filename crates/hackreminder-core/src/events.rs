use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::countdown::CountdownSnapshot;

/// Everything the watch loop reports. Printed as JSON lines by the CLI in
/// machine-readable mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    WatchStarted {
        event_id: String,
        target_name: String,
        deadline: DateTime<Utc>,
        thresholds: Vec<u32>,
        at: DateTime<Utc>,
    },
    CountdownTick {
        event_id: String,
        snapshot: CountdownSnapshot,
        at: DateTime<Utc>,
    },
    AlertFired {
        minutes_left: u32,
        target_name: String,
        completed: usize,
        total: usize,
        progress_pct: u32,
        at: DateTime<Utc>,
    },
    DeadlinePassed {
        target_name: String,
        at: DateTime<Utc>,
    },
    WatchStopped {
        reason: StopReason,
        at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    DeadlinePassed,
    EventCleared,
    Interrupted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_with_type_tag() {
        let at = Utc.with_ymd_and_hms(2024, 4, 1, 18, 0, 0).unwrap();
        let json = serde_json::to_value(Event::WatchStopped {
            reason: StopReason::EventCleared,
            at,
        })
        .unwrap();
        assert_eq!(json["type"], "watch_stopped");
        assert_eq!(json["reason"], "event_cleared");
    }
}

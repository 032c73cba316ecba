//! Countdown engine.
//!
//! Turns a deadline and the current wall-clock time into a
//! [`CountdownSnapshot`]. The engine holds no state: callers recompute the
//! snapshot on every tick, so it is never persisted.
//!
//! ## Decomposition
//!
//! ```text
//! remaining_ms = deadline - now
//! days    = remaining_ms / 86_400_000
//! hours   = remaining_ms % 86_400_000 / 3_600_000
//! minutes = remaining_ms % 3_600_000  / 60_000
//! seconds = remaining_ms % 60_000     / 1_000
//! ```
//!
//! No calendar arithmetic is involved; a "day" is always 24 hours.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Remaining time until a deadline, split into display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    pub days: u64,
    /// 0..=23
    pub hours: u8,
    /// 0..=59
    pub minutes: u8,
    /// 0..=59
    pub seconds: u8,
    pub is_past: bool,
    /// Whole minutes left, the value thresholds are matched against.
    pub total_minutes: u64,
}

impl CountdownSnapshot {
    /// The all-zero snapshot reported once the deadline has passed.
    pub fn past() -> Self {
        Self {
            is_past: true,
            ..Self::default()
        }
    }

    /// Less than two hours left.
    pub fn is_urgent(&self) -> bool {
        !self.is_past && self.days == 0 && self.hours < 2
    }

    /// Milliseconds represented by the four display fields.
    pub fn as_millis(&self) -> u64 {
        self.days * MS_PER_DAY as u64
            + u64::from(self.hours) * MS_PER_HOUR as u64
            + u64::from(self.minutes) * MS_PER_MINUTE as u64
            + u64::from(self.seconds) * MS_PER_SECOND as u64
    }
}

impl std::fmt::Display for CountdownSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Compute the time left until `deadline` as seen at `now`.
///
/// Returns [`CountdownSnapshot::past`] when `deadline <= now`.
pub fn compute_remaining(deadline: DateTime<Utc>, now: DateTime<Utc>) -> CountdownSnapshot {
    let diff_ms = deadline.signed_duration_since(now).num_milliseconds();
    if diff_ms <= 0 {
        return CountdownSnapshot::past();
    }

    CountdownSnapshot {
        days: (diff_ms / MS_PER_DAY) as u64,
        hours: ((diff_ms % MS_PER_DAY) / MS_PER_HOUR) as u8,
        minutes: ((diff_ms % MS_PER_HOUR) / MS_PER_MINUTE) as u8,
        seconds: ((diff_ms % MS_PER_MINUTE) / MS_PER_SECOND) as u8,
        is_past: false,
        total_minutes: (diff_ms / MS_PER_MINUTE) as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn decomposes_mixed_duration() {
        let now = base();
        let deadline = now
            + Duration::days(2)
            + Duration::hours(3)
            + Duration::minutes(4)
            + Duration::seconds(5)
            + Duration::milliseconds(999);
        let snap = compute_remaining(deadline, now);
        assert_eq!(snap.days, 2);
        assert_eq!(snap.hours, 3);
        assert_eq!(snap.minutes, 4);
        assert_eq!(snap.seconds, 5);
        assert!(!snap.is_past);
        assert_eq!(snap.total_minutes, 2 * 1440 + 3 * 60 + 4);
    }

    #[test]
    fn deadline_equal_to_now_is_past() {
        let snap = compute_remaining(base(), base());
        assert_eq!(snap, CountdownSnapshot::past());
    }

    #[test]
    fn sub_second_remaining_is_not_past() {
        let now = base();
        let snap = compute_remaining(now + Duration::milliseconds(400), now);
        assert!(!snap.is_past);
        assert_eq!(snap.as_millis(), 0);
        assert_eq!(snap.total_minutes, 0);
    }

    #[test]
    fn urgency_below_two_hours() {
        let now = base();
        assert!(compute_remaining(now + Duration::minutes(119), now).is_urgent());
        assert!(!compute_remaining(now + Duration::minutes(120), now).is_urgent());
        assert!(!CountdownSnapshot::past().is_urgent());
    }

    #[test]
    fn display_matches_countdown_format() {
        let now = base();
        let snap = compute_remaining(now + Duration::hours(25) + Duration::seconds(7), now);
        assert_eq!(snap.to_string(), "1d 1h 0m 7s");
    }

    proptest! {
        #[test]
        fn future_deadline_fields_stay_in_range(ms in 1i64..(400 * MS_PER_DAY)) {
            let now = base();
            let snap = compute_remaining(now + Duration::milliseconds(ms), now);
            prop_assert!(!snap.is_past);
            prop_assert!(snap.hours <= 23);
            prop_assert!(snap.minutes <= 59);
            prop_assert!(snap.seconds <= 59);
            let rebuilt = snap.as_millis() as i64;
            prop_assert!(rebuilt <= ms);
            prop_assert!(ms - rebuilt < MS_PER_SECOND);
            prop_assert_eq!(snap.total_minutes as i64, ms / MS_PER_MINUTE);
        }

        #[test]
        fn past_deadline_is_all_zero(ms in 0i64..(400 * MS_PER_DAY)) {
            let now = base();
            let snap = compute_remaining(now - Duration::milliseconds(ms), now);
            prop_assert_eq!(snap, CountdownSnapshot::past());
        }
    }
}

//! Deadline countdown and threshold alerts.
//!
//! ```text
//! Clock -> compute_remaining -> CountdownSnapshot -> display
//!                                       |
//!                                       v
//!                      AlertPolicy::should_alert -> Notifier
//! ```
//!
//! [`Reminder`] combines the two for one tick; [`Ticker`] runs it
//! periodically.

mod alert;
mod clock;
mod engine;
mod reminder;
mod ticker;

pub use alert::{should_alert, AlertPolicy, AlertState, ALERT_COOLDOWN_SECS};
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{compute_remaining, CountdownSnapshot};
pub use reminder::{AlertNotice, Reminder, TickContext, TickOutcome};
pub use ticker::{Ticker, TickerHandle};

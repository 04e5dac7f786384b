//! Events board: upcoming/past partition and countdown labels

use crate::core::{FetchRequest, FilterCriteria, Record, Timeframe};
use crate::models::Event;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Events in date order, soonest first
pub fn fetch_request() -> FetchRequest {
    FetchRequest::new(Event::collection()).order("event_date", true)
}

/// Events on the requested side of `now`
///
/// Undated events are listed as past.
pub fn criteria(timeframe: Timeframe, now: DateTime<Utc>) -> FilterCriteria {
    FilterCriteria::new().timeframe("event_date", timeframe, now)
}

/// Time left before an event starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Countdown {
    Passed,
    Days(i64),
    Hours(i64),
}

impl Countdown {
    /// Whole days when at least one remains, otherwise whole hours
    pub fn until(date: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = date - now;
        if remaining < chrono::Duration::zero() {
            return Countdown::Passed;
        }

        match remaining.num_days() {
            0 => Countdown::Hours(remaining.num_hours()),
            days => Countdown::Days(days),
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Passed => f.write_str("Event passed"),
            Countdown::Days(days) => write!(f, "{} days", days),
            Countdown::Hours(hours) => write!(f, "{} hours", hours),
        }
    }
}

/// Countdown for an event; `None` when it has no date
pub fn countdown(event: &Event, now: DateTime<Utc>) -> Option<Countdown> {
    event.event_date.map(|date| Countdown::until(date, now))
}

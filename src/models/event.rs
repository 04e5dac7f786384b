//! Network events and RSVPs (`events`, `event_rsvps` collections)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Event {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub max_attendees: Option<i32>,

    /// Denormalized attendee counter, bumped on every RSVP
    #[serde(default)]
    pub rsvp_count: i64,

    pub created_at: Option<DateTime<Utc>>,
}

crate::impl_record!(
    Event,
    "events",
    [
        title,
        description,
        event_type,
        event_date,
        location,
        image_url,
        max_attendees,
        rsvp_count,
        created_at,
    ]
);

impl Event {
    /// Whether the event has reached its attendee cap
    pub fn is_full(&self) -> bool {
        self.max_attendees
            .is_some_and(|max| max > 0 && self.rsvp_count >= i64::from(max))
    }
}

/// A member's attendance of an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRsvp {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,

    /// Always "attending" when created from the events board
    pub status: String,

    pub created_at: Option<DateTime<Utc>>,
}

crate::impl_record!(EventRsvp, "event_rsvps", [event_id, user_id, status, created_at]);

impl EventRsvp {
    pub fn attending(event_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_id,
            user_id,
            status: "attending".to_string(),
            created_at: Some(Utc::now()),
        }
    }
}

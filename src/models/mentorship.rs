//! Mentorship session requests (`mentorship_sessions` collection)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Pending => "pending",
            SessionStatus::Confirmed => "confirmed",
            SessionStatus::Completed => "completed",
            SessionStatus::Cancelled => "cancelled",
        }
    }
}

impl crate::core::field::ToFieldValue for SessionStatus {
    fn to_field_value(&self) -> crate::core::FieldValue {
        crate::core::FieldValue::String(self.as_str().to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MentorshipSession {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub mentee_id: Uuid,
    pub session_date: DateTime<Utc>,
    pub topic: String,
    pub status: SessionStatus,
    pub duration_minutes: i32,
    pub created_at: Option<DateTime<Utc>>,
}

crate::impl_record!(
    MentorshipSession,
    "mentorship_sessions",
    [
        mentor_id,
        mentee_id,
        session_date,
        topic,
        status,
        duration_minutes,
        created_at,
    ]
);

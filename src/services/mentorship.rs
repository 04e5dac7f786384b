//! Mentorship session booking

use crate::core::{
    error::{PortalResult, ValidationError},
    listing::ListingHandle,
    service::Repository,
    session::Session,
    store::RemoteStore,
};
use crate::listings::mentors;
use crate::models::{MentorshipSession, Profile, SessionStatus};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Length of every booked session
pub const SESSION_MINUTES: i32 = 60;

/// The booking form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingRequest {
    pub mentor_id: Uuid,

    /// RFC 3339, or a `YYYY-MM-DDTHH:MM` picker value taken as UTC
    pub session_date: String,

    pub topic: String,
}

impl BookingRequest {
    fn validate(&self, mentee_id: Uuid) -> Result<(DateTime<Utc>, String), ValidationError> {
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(ValidationError::Required("topic".to_string()));
        }
        if self.session_date.trim().is_empty() {
            return Err(ValidationError::Required("session_date".to_string()));
        }
        if self.mentor_id == mentee_id {
            return Err(ValidationError::InvalidField {
                field: "mentor_id".to_string(),
                message: "cannot book a session with yourself".to_string(),
            });
        }

        let date = parse_session_date(self.session_date.trim())?;
        Ok((date, topic.to_string()))
    }
}

fn parse_session_date(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .map(|naive| naive.and_utc())
        .map_err(|e| ValidationError::InvalidField {
            field: "session_date".to_string(),
            message: e.to_string(),
        })
}

#[derive(Clone)]
pub struct MentorshipService {
    mentors: Repository<Profile>,
    sessions: Repository<MentorshipSession>,
}

impl MentorshipService {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            mentors: Repository::new(store.clone()),
            sessions: Repository::new(store),
        }
    }

    pub async fn load_mentors(&self, listing: &ListingHandle<Profile>) -> PortalResult<bool> {
        listing.refresh(&self.mentors, &mentors::fetch_request()).await
    }

    /// Request a session with a mentor; it starts out pending
    pub async fn book(&self, session: &Session, request: &BookingRequest) -> PortalResult<MentorshipSession> {
        let mentee = session.require_user()?;
        let (session_date, topic) = request.validate(mentee.id)?;

        let booking = MentorshipSession {
            id: Uuid::new_v4(),
            mentor_id: request.mentor_id,
            mentee_id: mentee.id,
            session_date,
            topic,
            status: SessionStatus::Pending,
            duration_minutes: SESSION_MINUTES,
            created_at: Some(Utc::now()),
        };

        let stored = self.sessions.insert(&booking).await?;
        tracing::info!(
            mentor_id = %stored.mentor_id,
            mentee_id = %stored.mentee_id,
            "Mentorship session requested"
        );
        Ok(stored)
    }
}

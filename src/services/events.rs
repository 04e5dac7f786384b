//! Event RSVPs

use crate::core::{
    error::{PortalError, PortalResult},
    listing::ListingHandle,
    record::Record,
    service::Repository,
    session::Session,
    store::RemoteStore,
};
use crate::listings::events as board;
use crate::models::{Event, EventRsvp};
use crate::services::counter::CounterService;
use std::sync::Arc;
use uuid::Uuid;

/// Result of an RSVP attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpOutcome {
    /// A new RSVP was recorded; carries the new attendee count
    Registered { rsvp_count: i64 },

    /// The member was already attending; nothing changed
    AlreadyAttending,
}

#[derive(Clone)]
pub struct EventService {
    events: Repository<Event>,
    rsvps: Repository<EventRsvp>,
    counter: CounterService,
}

impl EventService {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            events: Repository::new(store.clone()),
            rsvps: Repository::new(store.clone()),
            counter: CounterService::new(store),
        }
    }

    pub fn events(&self) -> &Repository<Event> {
        &self.events
    }

    /// Load the events board into `listing`
    pub async fn load(&self, listing: &ListingHandle<Event>) -> PortalResult<bool> {
        listing.refresh(&self.events, &board::fetch_request()).await
    }

    /// Mark the signed-in member as attending
    ///
    /// Records an `event_rsvps` row, then bumps the event's `rsvp_count`.
    /// A second RSVP by the same member is not counted twice.
    pub async fn rsvp(&self, session: &Session, event_id: Uuid) -> PortalResult<RsvpOutcome> {
        let user = session.require_user()?;

        if self.events.get(&event_id).await?.is_none() {
            return Err(PortalError::not_found(Event::collection(), event_id));
        }

        if self.is_attending(user.id, event_id).await? {
            tracing::debug!(event_id = %event_id, user_id = %user.id, "Already attending");
            return Ok(RsvpOutcome::AlreadyAttending);
        }

        self.rsvps
            .insert(&EventRsvp::attending(event_id, user.id))
            .await?;
        let rsvp_count = self.counter.bump::<Event>(&event_id, "rsvp_count").await?;

        tracing::info!(event_id = %event_id, user_id = %user.id, rsvp_count, "RSVP recorded");
        Ok(RsvpOutcome::Registered { rsvp_count })
    }

    /// RSVP, then reload the board the member clicked from
    pub async fn rsvp_and_refresh(
        &self,
        session: &Session,
        event_id: Uuid,
        listing: &ListingHandle<Event>,
    ) -> PortalResult<RsvpOutcome> {
        let outcome = self.rsvp(session, event_id).await?;
        self.load(listing).await?;
        Ok(outcome)
    }

    pub async fn is_attending(&self, user_id: Uuid, event_id: Uuid) -> PortalResult<bool> {
        let request = self
            .rsvps
            .request()
            .eq("event_id", event_id.to_string())
            .eq("user_id", user_id.to_string())
            .limit(1);
        Ok(!self.rsvps.fetch(&request).await?.is_empty())
    }

    /// Number of events the member has RSVP'd to
    pub async fn attending_count(&self, user_id: Uuid) -> PortalResult<usize> {
        let request = self.rsvps.request().eq("user_id", user_id.to_string());
        Ok(self.rsvps.fetch(&request).await?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AccessError;
    use crate::models::Profile;
    use crate::storage::InMemoryStore;
    use serde_json::json;

    fn setup() -> (EventService, Uuid) {
        let store = InMemoryStore::new();
        let event_id = Uuid::new_v4();
        store
            .seed(
                "events",
                vec![json!({"id": event_id, "title": "Reunion", "rsvp_count": 3})],
            )
            .unwrap();
        (EventService::new(Arc::new(store)), event_id)
    }

    fn member() -> Session {
        Session::signed_in(Profile {
            id: Uuid::new_v4(),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_rsvp_requires_sign_in() {
        let (service, event_id) = setup();
        let err = service.rsvp(&Session::anonymous(), event_id).await.unwrap_err();
        assert!(matches!(err, PortalError::Access(AccessError::NotSignedIn)));
    }

    #[tokio::test]
    async fn test_rsvp_counts_once() {
        let (service, event_id) = setup();
        let session = member();

        let first = service.rsvp(&session, event_id).await.unwrap();
        assert_eq!(first, RsvpOutcome::Registered { rsvp_count: 4 });

        let second = service.rsvp(&session, event_id).await.unwrap();
        assert_eq!(second, RsvpOutcome::AlreadyAttending);

        let user_id = session.user_id().unwrap();
        assert_eq!(service.attending_count(user_id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_rsvp_unknown_event() {
        let (service, _) = setup();
        let err = service.rsvp(&member(), Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }
}

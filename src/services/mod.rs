//! Portal operations that write to the store
//!
//! Reads go through the listings; everything that mutates (counters,
//! RSVPs, bookings, registrations, moderation) lives here. Each service
//! takes the [`Session`](crate::core::Session) explicitly and checks the
//! access it needs before touching the store.

pub mod admin;
pub mod counter;
pub mod dashboard;
pub mod events;
pub mod landing;
pub mod memories;
pub mod mentorship;
pub mod registration;

pub use admin::{AdminService, AdminStats, Decision};
pub use counter::CounterService;
pub use dashboard::{DashboardService, DashboardSummary, OnboardingTask};
pub use events::{EventService, RsvpOutcome};
pub use landing::LandingService;
pub use memories::MemoryService;
pub use mentorship::{BookingRequest, MentorshipService};
pub use registration::{LocalAuthProvider, RegistrationForm, RegistrationService};

use crate::config::ListingConfig;
use crate::core::{session::AuthProvider, store::RemoteStore};
use std::sync::Arc;

/// Every service wired to one store
#[derive(Clone)]
pub struct PortalServices {
    pub counter: CounterService,
    pub events: EventService,
    pub landing: LandingService,
    pub memories: MemoryService,
    pub mentorship: MentorshipService,
    pub registration: RegistrationService,
    pub admin: AdminService,
    pub dashboard: DashboardService,
}

impl PortalServices {
    pub fn new(store: Arc<dyn RemoteStore>, auth: Arc<dyn AuthProvider>, listings: &ListingConfig) -> Self {
        Self {
            counter: CounterService::new(store.clone()),
            events: EventService::new(store.clone()),
            landing: LandingService::new(store.clone()),
            memories: MemoryService::new(store.clone()),
            mentorship: MentorshipService::new(store.clone()),
            registration: RegistrationService::new(auth),
            admin: AdminService::new(store.clone(), listings.admin_logs_limit),
            dashboard: DashboardService::new(store),
        }
    }
}

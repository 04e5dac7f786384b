//! # Alumni portal core
//!
//! Listing, filtering and member-portal logic for an alumni network whose
//! data lives in a hosted store.
//!
//! ## Features
//!
//! - **Listing filter engine**: criteria composed over records fetched
//!   once, with null-safe field access and facets from the unfiltered set
//! - **Typed records**: one struct per remote collection, exposed to the
//!   filters by field name through `impl_record!`
//! - **Stale-fetch gating**: results of superseded or abandoned fetches
//!   never overwrite a listing
//! - **Counter mutations**: RSVP and like counters, atomic where the store
//!   allows it
//! - **Session-scoped access**: signed-in and admin checks on pages and
//!   services, no global state
//! - **Pluggable stores**: in-memory, JSON snapshot, or the hosted REST
//!   store (`remote` feature)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use alumni::prelude::*;
//!
//! let store: Arc<dyn RemoteStore> = Arc::new(load_snapshot("portal.json").await?);
//! let profiles = Repository::<Profile>::new(store.clone());
//!
//! let directory = ListingHandle::new();
//! directory.refresh(&profiles, &listings::directory::fetch_request()).await?;
//!
//! let filter = DirectoryFilter {
//!     search_text: "arjun".into(),
//!     batch_year: "2019".into(),
//!     ..Default::default()
//! };
//! let visible = directory.read(|l| l.view(&filter.criteria()).len())?;
//! ```

pub mod config;
pub mod core;
pub mod listings;
pub mod models;
pub mod router;
pub mod services;
pub mod storage;
pub mod telemetry;
pub mod ui;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        AccessError, AccessPolicy, AuthProvider, ConfigError, Criterion, FacetOrder, FacetValue,
        FetchRequest, FetchTicket, FieldValue, FilterCriteria, Listing, ListingHandle, LoadState,
        PageRequest, Paginated, PaginationMeta, PortalError, PortalResult, Record, RemoteStore,
        Repository, Session, StoreError, Theme, Timeframe, ValidationError, facet, paginate,
        text_facet, year_facet,
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Models ===
    pub use crate::models::{
        AdminAction, AdminLog, ApprovalStatus, Event, EventRsvp, Job, Memory, MentorshipSession,
        NewProfile, PlatformStats, Profile, SessionStatus, Story, StoryAuthor,
    };

    // === Listings ===
    pub use crate::listings::{self, Countdown, DirectoryFacets, DirectoryFilter, JobFilter};

    // === Services ===
    pub use crate::services::{
        AdminService, AdminStats, BookingRequest, CounterService, DashboardService,
        DashboardSummary, Decision, EventService, LandingService, LocalAuthProvider, MemoryService,
        MentorshipService, PortalServices, RegistrationForm, RegistrationService, RsvpOutcome,
    };

    // === Navigation & UI ===
    pub use crate::router::{NavItem, Page, Router, View};
    pub use crate::ui::{Carousel, CarouselKind};

    // === Storage ===
    pub use crate::storage::{InMemoryStore, connect, load_snapshot, parse_snapshot};

    #[cfg(feature = "remote")]
    pub use crate::storage::RestStore;

    // === Configuration ===
    pub use crate::config::{CarouselConfig, ListingConfig, PortalConfig, StoreConfig};
    pub use crate::telemetry::init_tracing;

    // === External re-exports ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}

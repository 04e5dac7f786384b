//! Page-specific listings
//!
//! Each page pairs a fetch request (what to load from the store, in which
//! order) with the filter criteria its controls produce. The records are
//! loaded once into a [`crate::core::ListingHandle`]; changing a control
//! only rebuilds the criteria.

pub mod directory;
pub mod events;
pub mod jobs;
pub mod memories;
pub mod mentors;
pub mod stories;

pub use directory::{DirectoryFacets, DirectoryFilter};
pub use events::Countdown;
pub use jobs::JobFilter;

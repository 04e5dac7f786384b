//! Core module containing the record model, filter engine and store seams

pub mod error;
pub mod field;
pub mod listing;
pub mod query;
pub mod record;
pub mod service;
pub mod session;
pub mod store;

pub use error::{AccessError, ConfigError, PortalError, PortalResult, StoreError, ValidationError};
pub use field::FieldValue;
pub use listing::{FetchTicket, LoadState, Listing, ListingHandle};
pub use query::{
    Criterion, FacetOrder, FacetValue, FilterCriteria, PageRequest, Paginated, PaginationMeta,
    Timeframe, facet, paginate, text_facet, year_facet,
};
pub use record::Record;
pub use service::Repository;
pub use session::{AccessPolicy, AuthProvider, Session, Theme};
pub use store::{FetchRequest, OrderBy, RemoteStore, StoreResult};

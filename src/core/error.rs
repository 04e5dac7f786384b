//! Typed error handling for the portal
//!
//! Remote calls used to fail with an undifferentiated "something went
//! wrong". Every failure is now classified so callers can tell a store
//! outage apart from an empty result, a rejected form, or a user who is not
//! allowed to perform the action.
//!
//! # Error Categories
//!
//! - [`StoreError`]: the remote data store could not be reached or answered badly
//! - [`ValidationError`]: user input was rejected before reaching the store
//! - [`AccessError`]: the session lacks the required sign-in or role
//! - [`ConfigError`]: configuration could not be loaded
//!
//! # Example
//!
//! ```rust,ignore
//! match events.rsvp(&session, event_id).await {
//!     Ok(count) => println!("{} attending", count),
//!     Err(PortalError::Access(AccessError::NotSignedIn)) => router.navigate(Page::Login),
//!     Err(e) => eprintln!("[{}] {}", e.error_code(), e),
//! }
//! ```

use thiserror::Error;
use uuid::Uuid;

/// Result alias used across the crate
pub type PortalResult<T> = std::result::Result<T, PortalError>;

/// The main error type for the portal
#[derive(Debug, Error)]
pub enum PortalError {
    /// Remote store failures
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Rejected user input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Missing sign-in or role
    #[error(transparent)]
    Access(#[from] AccessError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A record addressed by id does not exist
    #[error("{collection} record {id} not found")]
    NotFound { collection: String, id: Uuid },

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PortalError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PortalError::Store(e) => e.error_code(),
            PortalError::Validation(_) => "VALIDATION_ERROR",
            PortalError::Access(e) => e.error_code(),
            PortalError::Config(_) => "CONFIG_ERROR",
            PortalError::NotFound { .. } => "NOT_FOUND",
            PortalError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether retrying the same call later could succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortalError::Store(StoreError::Network(_))
                | PortalError::Store(StoreError::Status { status: 500..=599, .. })
        )
    }

    pub fn not_found(collection: &str, id: Uuid) -> Self {
        PortalError::NotFound {
            collection: collection.to_string(),
            id,
        }
    }
}

// =============================================================================
// Store Errors
// =============================================================================

/// Errors raised by a remote store backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// The store answered with a non-success status
    #[error("Store returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// A row could not be decoded into the expected record type
    #[error("Failed to decode {collection} row: {message}")]
    Decode { collection: String, message: String },

    /// A local snapshot could not be read
    #[error("I/O error: {0}")]
    Io(String),

    /// A local lock was poisoned
    #[error("Failed to acquire {0} lock")]
    Lock(&'static str),

    /// The backend does not support the requested operation
    #[error("Operation not supported by this store: {0}")]
    Unsupported(String),
}

impl StoreError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Network(_) => "STORE_UNREACHABLE",
            StoreError::Status { .. } => "STORE_STATUS",
            StoreError::Decode { .. } => "STORE_DECODE",
            StoreError::Io(_) => "STORE_IO",
            StoreError::Lock(_) => "STORE_LOCK",
            StoreError::Unsupported(_) => "STORE_UNSUPPORTED",
        }
    }

    pub fn decode(collection: &str, err: impl std::fmt::Display) -> Self {
        StoreError::Decode {
            collection: collection.to_string(),
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised while validating user input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty
    #[error("Field '{0}' is required")]
    Required(String),

    /// The value does not have the expected shape
    #[error("Field '{field}' is invalid: {message}")]
    InvalidField { field: String, message: String },

    /// Password and confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Password shorter than the minimum
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

// =============================================================================
// Access Errors
// =============================================================================

/// Errors raised when the session does not allow an action
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Please sign in to continue")]
    NotSignedIn,

    #[error("Administrator access required")]
    AdminRequired,
}

impl AccessError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AccessError::NotSignedIn => "NOT_SIGNED_IN",
            AccessError::AdminRequired => "ADMIN_REQUIRED",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Missing required setting '{0}'")]
    Missing(String),
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Store(StoreError::Decode {
            collection: "json".to_string(),
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for PortalError {
    fn from(err: serde_yaml::Error) -> Self {
        PortalError::Config(ConfigError::Parse(err.to_string()))
    }
}

//! Member registration
//!
//! New accounts are created through the [`AuthProvider`] and start out
//! pending until an administrator approves them.

use crate::core::{
    error::{PortalError, PortalResult, ValidationError},
    service::Repository,
    session::AuthProvider,
    store::RemoteStore,
};
use crate::models::{ApprovalStatus, NewProfile, Profile};
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::{Arc, LazyLock};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

pub const MIN_PASSWORD_LEN: usize = 6;

static BATCH_YEAR: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^\d{4}$"));

const USER_TYPES: &[&str] = &["alumni", "student"];

/// The registration form as submitted
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct RegistrationForm {
    #[validate(email(message = "enter a valid email address"))]
    pub email: String,

    pub password: String,
    pub confirm_password: String,

    #[validate(length(min = 1))]
    pub full_name: String,

    /// "alumni" or "student"
    #[validate(custom(function = "validate_user_type"))]
    pub user_type: String,

    #[validate(custom(function = "validate_batch_year"))]
    pub batch_year: String,

    #[validate(length(min = 1))]
    pub department: String,

    /// Company for alumni, college for students
    pub current_company: String,

    pub location: String,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            full_name: String::new(),
            user_type: "alumni".to_string(),
            batch_year: String::new(),
            department: String::new(),
            current_company: String::new(),
            location: String::new(),
        }
    }
}

fn validate_batch_year(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("required"));
    }

    match BATCH_YEAR.as_ref() {
        Ok(re) if re.is_match(value.trim()) => Ok(()),
        _ => {
            let mut err = validator::ValidationError::new("batch_year");
            err.message = Some(Cow::Borrowed("must be a four-digit year"));
            Err(err)
        }
    }
}

fn validate_user_type(value: &str) -> Result<(), validator::ValidationError> {
    if USER_TYPES.contains(&value) {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new("user_type");
        err.message = Some(Cow::Borrowed("must be alumni or student"));
        Err(err)
    }
}

/// Order in which field problems are reported, matching the form layout
const FIELD_ORDER: &[&str] = &["email", "full_name", "user_type", "batch_year", "department"];

fn first_field_error(errors: &ValidationErrors) -> ValidationError {
    let field_errors = errors.field_errors();

    for field in FIELD_ORDER {
        let Some(first) = field_errors.get(*field).and_then(|errs| errs.first()) else {
            continue;
        };

        return match &*first.code {
            "required" | "length" => ValidationError::Required(field.to_string()),
            _ => ValidationError::InvalidField {
                field: field.to_string(),
                message: first
                    .message
                    .as_deref()
                    .unwrap_or("is invalid")
                    .to_string(),
            },
        };
    }

    ValidationError::InvalidField {
        field: "form".to_string(),
        message: errors.to_string(),
    }
}

impl RegistrationForm {
    /// Check the form and produce the profile to create
    ///
    /// Password problems are reported before field problems.
    pub fn to_new_profile(&self) -> Result<NewProfile, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }

        self.validate().map_err(|e| first_field_error(&e))?;

        let batch_year = self
            .batch_year
            .trim()
            .parse::<i32>()
            .map_err(|e| ValidationError::InvalidField {
                field: "batch_year".to_string(),
                message: e.to_string(),
            })?;

        Ok(NewProfile {
            email: self.email.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            user_type: self.user_type.clone(),
            batch_year,
            department: self.department.trim().to_string(),
            current_company: non_empty(&self.current_company),
            location: non_empty(&self.location),
            approval_status: ApprovalStatus::Pending,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Clone)]
pub struct RegistrationService {
    auth: Arc<dyn AuthProvider>,
}

impl RegistrationService {
    pub fn new(auth: Arc<dyn AuthProvider>) -> Self {
        Self { auth }
    }

    /// Validate the form and create the pending account
    pub async fn register(&self, form: &RegistrationForm) -> PortalResult<Profile> {
        let new_profile = form.to_new_profile().map_err(|e| {
            tracing::debug!(error = %e, "Registration rejected");
            e
        })?;

        let email = new_profile.email.clone();
        let profile = self.auth.sign_up(&email, &form.password, new_profile).await?;

        tracing::info!(
            provider = self.auth.provider_name(),
            id = %profile.id,
            "Registered member pending approval"
        );
        Ok(profile)
    }
}

/// Auth provider keeping accounts in the store's `profiles` collection
///
/// Passwords are not kept: this provider is meant for offline snapshots
/// and tests, where nobody signs in with a password afterwards.
#[derive(Clone)]
pub struct LocalAuthProvider {
    profiles: Repository<Profile>,
}

impl LocalAuthProvider {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            profiles: Repository::new(store),
        }
    }
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    async fn sign_up(&self, email: &str, _password: &str, profile: NewProfile) -> PortalResult<Profile> {
        let existing = self
            .profiles
            .fetch(&self.profiles.request().eq("email", email).limit(1))
            .await?;
        if !existing.is_empty() {
            return Err(PortalError::Validation(ValidationError::InvalidField {
                field: "email".to_string(),
                message: "is already registered".to_string(),
            }));
        }

        self.profiles.insert(&profile.into_profile(Uuid::new_v4())).await
    }

    fn provider_name(&self) -> &str {
        "local"
    }
}

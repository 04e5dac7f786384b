//! Session context: who is signed in and which theme is active
//!
//! The signed-in member and the theme flag are passed explicitly to every
//! service and to the router instead of living in process-wide providers.
//! Access rules come in three levels:
//! - Public pages and reads
//! - Authenticated members
//! - Administrators (`role == "admin"`)

use crate::core::error::{AccessError, PortalResult};
use crate::models::{NewProfile, Profile};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Light or dark color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The persisted preference flag
    pub fn as_flag(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_flag())
    }
}

/// The client session threaded through services and the router
#[derive(Debug, Clone, Default)]
pub struct Session {
    profile: Option<Profile>,
    theme: Theme,
}

impl Session {
    /// A visitor who has not signed in
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A signed-in member
    pub fn signed_in(profile: Profile) -> Self {
        Self {
            profile: Some(profile),
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.profile.as_ref().map(|p| p.id)
    }

    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.profile.as_ref().is_some_and(Profile::is_admin)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip between light and dark, returning the new theme
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn sign_out(&mut self) {
        self.profile = None;
    }

    /// The signed-in member, or `AccessError::NotSignedIn`
    pub fn require_user(&self) -> Result<&Profile, AccessError> {
        self.profile.as_ref().ok_or(AccessError::NotSignedIn)
    }

    /// The signed-in administrator, or the reason access is refused
    pub fn require_admin(&self) -> Result<&Profile, AccessError> {
        let profile = self.require_user()?;
        if profile.is_admin() {
            Ok(profile)
        } else {
            Err(AccessError::AdminRequired)
        }
    }
}

/// Access rule attached to a page or an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Anyone, signed in or not
    Public,

    /// Any signed-in member
    Authenticated,

    /// Administrators only
    AdminOnly,
}

impl AccessPolicy {
    /// Check whether the session satisfies this policy
    pub fn check(&self, session: &Session) -> Result<(), AccessError> {
        match self {
            AccessPolicy::Public => Ok(()),
            AccessPolicy::Authenticated => session.require_user().map(|_| ()),
            AccessPolicy::AdminOnly => session.require_admin().map(|_| ()),
        }
    }
}

/// The hosted authentication provider
///
/// Credentials never touch the portal's own tables; the provider creates
/// the account and returns the id the profile row is keyed by.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Create an account and its pending profile
    async fn sign_up(&self, email: &str, password: &str, profile: NewProfile) -> PortalResult<Profile>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Profile {
        Profile {
            id: Uuid::new_v4(),
            role: Some("admin".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_anonymous_session() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(session.require_user().unwrap_err(), AccessError::NotSignedIn);
        assert_eq!(session.require_admin().unwrap_err(), AccessError::NotSignedIn);
    }

    #[test]
    fn test_member_is_not_admin() {
        let session = Session::signed_in(Profile {
            id: Uuid::new_v4(),
            role: Some("member".to_string()),
            ..Default::default()
        });
        assert!(session.is_authenticated());
        assert_eq!(session.require_admin().unwrap_err(), AccessError::AdminRequired);
    }

    #[test]
    fn test_policies() {
        let anonymous = Session::anonymous();
        let admin = Session::signed_in(admin());

        assert!(AccessPolicy::Public.check(&anonymous).is_ok());
        assert!(AccessPolicy::Authenticated.check(&anonymous).is_err());
        assert!(AccessPolicy::AdminOnly.check(&admin).is_ok());
    }

    #[test]
    fn test_theme_toggle_and_flag() {
        let mut session = Session::anonymous();
        assert_eq!(session.theme(), Theme::Light);
        assert_eq!(session.toggle_theme(), Theme::Dark);
        assert!(session.theme().is_dark());
        assert_eq!(session.theme().as_flag(), "dark");
        assert_eq!("DARK".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_sign_out() {
        let mut session = Session::signed_in(admin());
        session.sign_out();
        assert!(session.user_id().is_none());
    }
}

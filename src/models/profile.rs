//! Member profiles (`profiles` collection)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Moderation state of a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

/// A member of the network: alumni, student or administrator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Profile {
    pub id: Uuid,
    pub email: Option<String>,
    pub full_name: Option<String>,

    /// "alumni" or "student"
    pub user_type: Option<String>,

    pub batch_year: Option<i32>,
    pub department: Option<String>,
    pub current_company: Option<String>,
    pub job_title: Option<String>,
    pub location: Option<String>,
    pub country: Option<String>,
    pub bio: Option<String>,
    pub linkedin_url: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub is_mentor: bool,

    /// "admin" for administrators, otherwise a regular member
    pub role: Option<String>,

    pub approval_status: Option<ApprovalStatus>,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

crate::impl_record!(
    Profile,
    "profiles",
    [
        email,
        full_name,
        user_type,
        batch_year,
        department,
        current_company,
        job_title,
        location,
        country,
        bio,
        linkedin_url,
        skills,
        is_mentor,
        role,
        approval_status,
        approved_by,
        approved_at,
        rejection_reason,
        created_at,
    ]
);

impl Profile {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }

    /// Name to show in lists, falling back to the email address
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Unknown member")
    }

    /// The fields the onboarding checklist asks for are all filled in
    pub fn is_complete(&self) -> bool {
        self.full_name.as_deref().is_some_and(|s| !s.is_empty())
            && self.department.as_deref().is_some_and(|s| !s.is_empty())
            && self.batch_year.is_some_and(|y| y != 0)
    }
}

impl crate::core::field::ToFieldValue for ApprovalStatus {
    fn to_field_value(&self) -> crate::core::FieldValue {
        crate::core::FieldValue::String(self.as_str().to_string())
    }
}

/// Profile data captured at registration, before the account exists
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProfile {
    pub email: String,
    pub full_name: String,
    pub user_type: String,
    pub batch_year: i32,
    pub department: String,
    pub current_company: Option<String>,
    pub location: Option<String>,
    pub approval_status: ApprovalStatus,
}

impl NewProfile {
    /// The profile row created once the auth provider assigned an id
    pub fn into_profile(self, id: Uuid) -> Profile {
        Profile {
            id,
            email: Some(self.email),
            full_name: Some(self.full_name),
            user_type: Some(self.user_type),
            batch_year: Some(self.batch_year),
            department: Some(self.department),
            current_company: self.current_company,
            location: self.location,
            approval_status: Some(self.approval_status),
            created_at: Some(Utc::now()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldValue, Record};
    use serde_json::json;

    #[test]
    fn test_decode_sparse_row() {
        let id = Uuid::new_v4();
        let profile: Profile =
            serde_json::from_value(json!({"id": id, "full_name": "Arjun Patel"})).unwrap();

        assert_eq!(profile.id, id);
        assert!(profile.skills.is_empty());
        assert!(!profile.is_mentor);
        assert!(profile.field_value("department").is_null());
        assert_eq!(
            profile.field_value("full_name"),
            FieldValue::String("Arjun Patel".to_string())
        );
    }

    #[test]
    fn test_approval_status_field() {
        let profile = Profile {
            approval_status: Some(ApprovalStatus::Pending),
            ..Default::default()
        };
        assert_eq!(profile.field_value("approval_status").as_string(), Some("pending"));
    }

    #[test]
    fn test_is_complete() {
        let mut profile = Profile {
            full_name: Some("Sneha Gupta".to_string()),
            department: Some("ECE".to_string()),
            ..Default::default()
        };
        assert!(!profile.is_complete());

        profile.batch_year = Some(2020);
        assert!(profile.is_complete());
    }

    #[test]
    fn test_display_name_fallback() {
        let profile = Profile {
            email: Some("a@b.co".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.display_name(), "a@b.co");
        assert_eq!(Profile::default().display_name(), "Unknown member");
    }
}

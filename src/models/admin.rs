//! Moderation audit trail and platform counters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Action recorded in the admin log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminAction {
    ApproveUser,
    RejectUser,
}

impl crate::core::field::ToFieldValue for AdminAction {
    fn to_field_value(&self) -> crate::core::FieldValue {
        let label = match self {
            AdminAction::ApproveUser => "APPROVE_USER",
            AdminAction::RejectUser => "REJECT_USER",
        };
        crate::core::FieldValue::String(label.to_string())
    }
}

/// One entry of the `admin_logs` collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminLog {
    pub id: Uuid,
    pub admin_id: Uuid,
    pub action: AdminAction,
    pub target_type: String,
    pub target_id: Uuid,

    #[serde(default)]
    pub details: Value,

    pub created_at: Option<DateTime<Utc>>,
}

crate::impl_record!(
    AdminLog,
    "admin_logs",
    [admin_id, action, target_type, target_id, details, created_at]
);

/// The single-row `platform_stats` collection shown on the landing page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlatformStats {
    pub id: Uuid,

    #[serde(default)]
    pub total_alumni: i64,

    #[serde(default)]
    pub total_countries: i64,

    #[serde(default)]
    pub total_events: i64,

    #[serde(default)]
    pub total_jobs: i64,
}

crate::impl_record!(
    PlatformStats,
    "platform_stats",
    [total_alumni, total_countries, total_events, total_jobs]
);

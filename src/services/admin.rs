//! Registration moderation and platform statistics
//!
//! Every operation requires an administrator session. Approving or
//! rejecting a profile writes the decision onto the profile, appends an
//! audit entry and, on approval, bumps the public alumni counter.

use crate::core::{
    error::PortalResult,
    service::Repository,
    session::Session,
    store::RemoteStore,
};
use crate::models::{AdminAction, AdminLog, ApprovalStatus, Event, Job, PlatformStats, Profile};
use crate::services::counter::CounterService;
use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use uuid::Uuid;

/// Headline numbers of the admin dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub total_users: usize,
    pub pending_approvals: usize,
    pub total_events: usize,
    pub total_jobs: usize,
}

/// A moderation decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject { reason: Option<String> },
}

impl Decision {
    fn status(&self) -> ApprovalStatus {
        match self {
            Decision::Approve => ApprovalStatus::Approved,
            Decision::Reject { .. } => ApprovalStatus::Rejected,
        }
    }

    fn action(&self) -> AdminAction {
        match self {
            Decision::Approve => AdminAction::ApproveUser,
            Decision::Reject { .. } => AdminAction::RejectUser,
        }
    }

    fn reason(&self) -> Option<&str> {
        match self {
            Decision::Reject { reason } => reason.as_deref().filter(|r| !r.trim().is_empty()),
            Decision::Approve => None,
        }
    }
}

#[derive(Clone)]
pub struct AdminService {
    profiles: Repository<Profile>,
    logs: Repository<AdminLog>,
    stats: Repository<PlatformStats>,
    events: Repository<Event>,
    jobs: Repository<Job>,
    counter: CounterService,
    logs_limit: usize,
}

impl AdminService {
    pub fn new(store: Arc<dyn RemoteStore>, logs_limit: usize) -> Self {
        Self {
            profiles: Repository::new(store.clone()),
            logs: Repository::new(store.clone()),
            stats: Repository::new(store.clone()),
            events: Repository::new(store.clone()),
            jobs: Repository::new(store.clone()),
            counter: CounterService::new(store),
            logs_limit,
        }
    }

    /// Registrations awaiting a decision, newest first
    pub async fn pending_profiles(&self, session: &Session) -> PortalResult<Vec<Profile>> {
        session.require_admin()?;
        let request = self
            .profiles
            .request()
            .eq("approval_status", ApprovalStatus::Pending.as_str())
            .order("created_at", false);
        self.profiles.fetch(&request).await
    }

    pub async fn approve(&self, session: &Session, profile_id: Uuid) -> PortalResult<Profile> {
        self.decide(session, profile_id, Decision::Approve).await
    }

    pub async fn reject(
        &self,
        session: &Session,
        profile_id: Uuid,
        reason: Option<&str>,
    ) -> PortalResult<Profile> {
        let decision = Decision::Reject {
            reason: reason.map(str::to_string),
        };
        self.decide(session, profile_id, decision).await
    }

    /// Record a decision on a profile
    pub async fn decide(
        &self,
        session: &Session,
        profile_id: Uuid,
        decision: Decision,
    ) -> PortalResult<Profile> {
        let admin = session.require_admin()?;

        let mut patch = Map::new();
        patch.insert("approval_status".into(), json!(decision.status()));
        patch.insert("approved_by".into(), json!(admin.id));
        patch.insert("approved_at".into(), json!(Utc::now()));
        if let Some(reason) = decision.reason() {
            patch.insert("rejection_reason".into(), json!(reason));
        }

        let profile = self.profiles.update(&profile_id, Value::Object(patch)).await?;

        let entry = AdminLog {
            id: Uuid::new_v4(),
            admin_id: admin.id,
            action: decision.action(),
            target_type: "profile".to_string(),
            target_id: profile_id,
            details: json!({ "reason": decision.reason() }),
            created_at: Some(Utc::now()),
        };
        self.logs.insert(&entry).await?;

        if decision == Decision::Approve {
            self.bump_alumni_total().await?;
        }

        tracing::info!(
            admin_id = %admin.id,
            profile_id = %profile_id,
            status = decision.status().as_str(),
            "Moderation decision recorded"
        );
        Ok(profile)
    }

    /// Add one to the public alumni counter, if the stats row exists
    async fn bump_alumni_total(&self) -> PortalResult<()> {
        let rows = self.stats.fetch(&self.stats.request().limit(1)).await?;
        match rows.first() {
            Some(stats) => {
                self.counter
                    .bump::<PlatformStats>(&stats.id, "total_alumni")
                    .await?;
            }
            None => tracing::warn!("No platform_stats row, alumni total not updated"),
        }
        Ok(())
    }

    /// Dashboard counters, fetched concurrently
    pub async fn stats(&self, session: &Session) -> PortalResult<AdminStats> {
        session.require_admin()?;

        let (profiles, events, jobs) = futures::try_join!(
            self.profiles.list(),
            self.events.list(),
            self.jobs.list()
        )?;

        let count_status = |status: ApprovalStatus| {
            profiles
                .iter()
                .filter(|p| p.approval_status == Some(status))
                .count()
        };

        Ok(AdminStats {
            total_users: count_status(ApprovalStatus::Approved),
            pending_approvals: count_status(ApprovalStatus::Pending),
            total_events: events.len(),
            total_jobs: jobs.len(),
        })
    }

    /// Most recent audit entries
    pub async fn recent_logs(&self, session: &Session) -> PortalResult<Vec<AdminLog>> {
        session.require_admin()?;
        let request = self
            .logs
            .request()
            .order("created_at", false)
            .limit(self.logs_limit);
        self.logs.fetch(&request).await
    }
}

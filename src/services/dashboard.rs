//! Member dashboard: attendance count and onboarding checklist

use crate::core::{error::PortalResult, session::Session, store::RemoteStore};
use crate::models::Profile;
use crate::router::Page;
use crate::services::events::EventService;
use serde::Serialize;
use std::sync::Arc;

/// One step of the onboarding checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingTask {
    pub id: u8,
    pub task: &'static str,

    /// Where the task's button leads
    pub page: Page,

    pub completed: bool,
}

const TASKS: [(u8, &str, Page); 5] = [
    (1, "Complete your profile", Page::Dashboard),
    (2, "Browse alumni directory", Page::Directory),
    (3, "RSVP to an event", Page::Events),
    (4, "Explore job opportunities", Page::Jobs),
    (5, "Read an alumni story", Page::Stories),
];

/// The checklist for a profile
///
/// Only the profile task can be detected; the others stay open.
pub fn onboarding_checklist(profile: &Profile) -> Vec<OnboardingTask> {
    TASKS
        .iter()
        .map(|&(id, task, page)| OnboardingTask {
            id,
            task,
            page,
            completed: id == 1 && profile.is_complete(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub events_attending: usize,
    pub checklist: Vec<OnboardingTask>,
}

impl DashboardSummary {
    pub fn completed_tasks(&self) -> usize {
        self.checklist.iter().filter(|t| t.completed).count()
    }

    /// Rounded share of completed tasks, 0 to 100
    pub fn progress_percent(&self) -> u8 {
        if self.checklist.is_empty() {
            return 0;
        }
        let ratio = self.completed_tasks() as f64 / self.checklist.len() as f64;
        (ratio * 100.0).round() as u8
    }
}

#[derive(Clone)]
pub struct DashboardService {
    events: EventService,
}

impl DashboardService {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            events: EventService::new(store),
        }
    }

    pub async fn summary(&self, session: &Session) -> PortalResult<DashboardSummary> {
        let profile = session.require_user()?;
        let events_attending = self.events.attending_count(profile.id).await?;

        Ok(DashboardSummary {
            events_attending,
            checklist: onboarding_checklist(profile),
        })
    }
}

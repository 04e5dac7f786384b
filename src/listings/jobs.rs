//! Job board: all / featured / per-type tabs and the featured strip

use crate::core::{FetchRequest, FilterCriteria, Record};
use crate::models::Job;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The job board tab
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum JobFilter {
    #[default]
    All,
    Featured,

    /// A `job_type` value such as "full-time" or "internship"
    Type(String),
}

impl JobFilter {
    pub fn criteria(&self) -> FilterCriteria {
        match self {
            JobFilter::All => FilterCriteria::new(),
            JobFilter::Featured => FilterCriteria::new().flag("is_featured"),
            JobFilter::Type(job_type) => FilterCriteria::new().equals("job_type", job_type.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            JobFilter::All => "all",
            JobFilter::Featured => "featured",
            JobFilter::Type(job_type) => job_type,
        }
    }

    /// The featured strip is only shown on the "all" tab
    pub fn shows_featured_strip(&self) -> bool {
        matches!(self, JobFilter::All)
    }
}

impl From<String> for JobFilter {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" | "all" => JobFilter::All,
            "featured" => JobFilter::Featured,
            _ => JobFilter::Type(value),
        }
    }
}

impl From<JobFilter> for String {
    fn from(filter: JobFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl FromStr for JobFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(JobFilter::from(s.to_string()))
    }
}

impl fmt::Display for JobFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The most recent `limit` postings
pub fn fetch_request(limit: usize) -> FetchRequest {
    FetchRequest::new(Job::collection())
        .order("created_at", false)
        .limit(limit)
}

/// The first `count` featured postings in fetch order
pub fn featured_jobs(jobs: &[Job], count: usize) -> Vec<&Job> {
    jobs.iter().filter(|j| j.is_featured).take(count).collect()
}

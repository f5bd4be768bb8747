use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::grouping::{summarize, ReviewActivity};

/// Login used when GitHub no longer knows the account (deleted users).
pub const UNKNOWN_AUTHOR: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub author: String,
    pub draft: bool,
    /// Raw `owner:branch` label of the base ref, before alias resolution
    pub base_label: String,
    pub updated_at: DateTime<Utc>,
    pub additions: u64,
    pub deletions: u64,
    pub changed_files: u64,
    pub labels: Vec<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub author: String,
    pub pull_request: u64,
}

/// One open pull request joined with its repository and reviews.
///
/// The review activity is derived once at construction and never recomputed.
#[derive(Debug, Clone)]
pub struct AggregateRecord {
    repository: Arc<Repository>,
    pull_request: PullRequest,
    reviews: Vec<Review>,
    activity: ReviewActivity,
}

impl AggregateRecord {
    pub fn new(
        repository: Arc<Repository>,
        pull_request: PullRequest,
        reviews: Vec<Review>,
    ) -> Self {
        let activity = summarize(&reviews);
        Self {
            repository,
            pull_request,
            reviews,
            activity,
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn pull_request(&self) -> &PullRequest {
        &self.pull_request
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn activity(&self) -> ReviewActivity {
        self.activity
    }
}

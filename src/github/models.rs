//! Wire shapes of the GitHub REST responses we read.
//!
//! Only the fields the report needs are declared; everything optional on
//! GitHub's side stays optional here so a sparse payload still decodes.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::model::{PullRequest, Repository, Review, UNKNOWN_AUTHOR};

#[derive(Debug, Deserialize)]
pub struct ApiUser {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiRepository {
    pub name: String,
    pub owner: ApiUser,
}

impl From<ApiRepository> for Repository {
    fn from(repo: ApiRepository) -> Self {
        Repository::new(repo.owner.login, repo.name)
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiBaseRef {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "ref")]
    pub ref_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiLabel {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiPullRequest {
    pub number: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub user: Option<ApiUser>,
    #[serde(default)]
    pub draft: Option<bool>,
    pub base: ApiBaseRef,
    pub updated_at: DateTime<Utc>,
    // The list endpoint omits the diff stats; they decode as zero there.
    #[serde(default)]
    pub additions: Option<u64>,
    #[serde(default)]
    pub deletions: Option<u64>,
    #[serde(default)]
    pub changed_files: Option<u64>,
    #[serde(default)]
    pub labels: Vec<ApiLabel>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl From<ApiPullRequest> for PullRequest {
    fn from(pr: ApiPullRequest) -> Self {
        PullRequest {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            author: pr
                .user
                .map(|u| u.login)
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            draft: pr.draft.unwrap_or(false),
            base_label: pr.base.label.unwrap_or(pr.base.ref_name),
            updated_at: pr.updated_at,
            additions: pr.additions.unwrap_or(0),
            deletions: pr.deletions.unwrap_or(0),
            changed_files: pr.changed_files.unwrap_or(0),
            labels: pr.labels.into_iter().map(|l| l.name).collect(),
            url: pr.html_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiReview {
    #[serde(default)]
    pub user: Option<ApiUser>,
}

impl ApiReview {
    pub fn into_review(self, pull_request: u64) -> Review {
        Review {
            author: self
                .user
                .map(|u| u.login)
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            pull_request,
        }
    }
}

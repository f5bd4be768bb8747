use chrono::{DateTime, Utc};
use serde::Serialize;

use super::report::rounded_hours;
use crate::error::OutputError;
use crate::grouping::{total_records, Grouping};
use crate::model::AggregateRecord;

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub generated_at: DateTime<Utc>,
    pub organization: String,
    pub total: usize,
    pub bases: Vec<BaseSummary>,
}

#[derive(Debug, Serialize)]
pub struct BaseSummary {
    pub base: String,
    pub pull_requests: Vec<PullRequestSummary>,
}

#[derive(Debug, Serialize)]
pub struct PullRequestSummary {
    pub repository: String,
    pub number: u64,
    pub title: String,
    pub author: String,
    pub draft: bool,
    pub labels: Vec<String>,
    pub additions: u64,
    pub deletions: u64,
    pub changed_files: u64,
    pub updated_at: DateTime<Utc>,
    pub age_hours: i64,
    pub review_count: usize,
    pub distinct_reviewer_count: usize,
    /// Distinct reviewer logins in order of first review
    pub reviewers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl PullRequestSummary {
    fn from_record(record: &AggregateRecord, now: DateTime<Utc>) -> Self {
        let pr = record.pull_request();
        let activity = record.activity();
        let mut reviewers: Vec<String> = Vec::new();
        for review in record.reviews() {
            if !reviewers.contains(&review.author) {
                reviewers.push(review.author.clone());
            }
        }
        Self {
            repository: record.repository().full_name(),
            number: pr.number,
            title: pr.title.clone(),
            author: pr.author.clone(),
            draft: pr.draft,
            labels: pr.labels.clone(),
            additions: pr.additions,
            deletions: pr.deletions,
            changed_files: pr.changed_files,
            updated_at: pr.updated_at,
            age_hours: rounded_hours(now.signed_duration_since(pr.updated_at)),
            review_count: activity.review_count,
            distinct_reviewer_count: activity.distinct_reviewer_count,
            reviewers,
            url: pr.url.clone(),
        }
    }
}

pub fn build_summary(grouping: &Grouping, organization: &str, now: DateTime<Utc>) -> SummaryReport {
    let bases = grouping
        .iter()
        .map(|(base, records)| BaseSummary {
            base: base.clone(),
            pull_requests: records
                .iter()
                .map(|record| PullRequestSummary::from_record(record, now))
                .collect(),
        })
        .collect();

    SummaryReport {
        generated_at: now,
        organization: organization.to_string(),
        total: total_records(grouping),
        bases,
    }
}

pub fn render_json(
    grouping: &Grouping,
    organization: &str,
    now: DateTime<Utc>,
) -> Result<String, OutputError> {
    let mut json = serde_json::to_string_pretty(&build_summary(grouping, organization, now))?;
    json.push('\n');
    Ok(json)
}

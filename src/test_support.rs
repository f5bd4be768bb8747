use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::TransportError;
use crate::github::{HostingClient, Page, PageRequest};
use crate::model::{AggregateRecord, PullRequest, Repository, Review};

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

pub fn pull_request(number: u64, base: &str, updated_offset_secs: i64) -> PullRequest {
    PullRequest {
        number,
        title: format!("PR {number}"),
        author: "octocat".to_string(),
        draft: false,
        base_label: base.to_string(),
        updated_at: epoch() + Duration::seconds(updated_offset_secs),
        additions: 10,
        deletions: 2,
        changed_files: 1,
        labels: Vec::new(),
        url: None,
    }
}

pub fn record(
    repo: &str,
    number: u64,
    base: &str,
    updated_offset_secs: i64,
    reviewers: &[&str],
) -> AggregateRecord {
    let reviews = reviewers
        .iter()
        .map(|author| Review {
            author: author.to_string(),
            pull_request: number,
        })
        .collect();
    AggregateRecord::new(
        Arc::new(Repository::new("acme", repo)),
        pull_request(number, base, updated_offset_secs),
        reviews,
    )
}

/// In-memory hosting service that serves fixed data in pages.
#[derive(Default)]
pub struct FakeClient {
    pub login: String,
    pub repositories: Vec<Repository>,
    pub pull_requests: HashMap<String, Vec<PullRequest>>,
    pub reviews: HashMap<(String, u64), Vec<Review>>,
    pub fail_repository_page: Option<u32>,
    pub fail_pull_requests_for: Option<String>,
    pub fail_reviews_for: Option<(String, u64)>,
    pub review_delay_ms: u64,
    repository_pages: Mutex<Vec<u32>>,
}

impl FakeClient {
    pub fn with_repositories(count: usize) -> Self {
        let mut client = Self::default();
        for i in 0..count {
            client.add_repository(&format!("repo-{i:03}"));
        }
        client
    }

    pub fn add_repository(&mut self, name: &str) {
        self.repositories.push(Repository::new("acme", name));
    }

    pub fn add_pull_request(&mut self, repo: &str, pull_request: PullRequest) {
        self.pull_requests
            .entry(repo.to_string())
            .or_default()
            .push(pull_request);
    }

    pub fn add_reviews(&mut self, repo: &str, number: u64, authors: &[&str]) {
        let reviews = self.reviews.entry((repo.to_string(), number)).or_default();
        reviews.extend(authors.iter().map(|author| Review {
            author: author.to_string(),
            pull_request: number,
        }));
    }

    pub fn repository_pages_requested(&self) -> Vec<u32> {
        self.repository_pages.lock().unwrap().clone()
    }

    fn failure(operation: &str) -> TransportError {
        TransportError::Network {
            operation: operation.to_string(),
            message: "connection reset".to_string(),
        }
    }
}

fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let per_page = usize::from(request.per_page);
    let start = (request.page as usize - 1) * per_page;
    let end = (start + per_page).min(items.len());
    let slice = items.get(start..end).unwrap_or_default().to_vec();
    let next_page = (end < items.len()).then_some(request.page + 1);
    Page {
        items: slice,
        next_page,
    }
}

#[async_trait]
impl HostingClient for FakeClient {
    async fn authenticated_user(&self) -> Result<String, TransportError> {
        Ok(self.login.clone())
    }

    async fn list_org_repositories(
        &self,
        _org: &str,
        page: PageRequest,
    ) -> Result<Page<Repository>, TransportError> {
        self.repository_pages.lock().unwrap().push(page.page);
        if self.fail_repository_page == Some(page.page) {
            return Err(Self::failure("list organization repositories"));
        }
        Ok(paginate(&self.repositories, page))
    }

    async fn list_open_pull_requests(
        &self,
        repository: &Repository,
        page: PageRequest,
    ) -> Result<Page<PullRequest>, TransportError> {
        if self.fail_pull_requests_for.as_deref() == Some(repository.name.as_str()) {
            return Err(Self::failure("list pull requests"));
        }
        let items = self
            .pull_requests
            .get(&repository.name)
            .cloned()
            .unwrap_or_default();
        Ok(paginate(&items, page))
    }

    async fn list_reviews(
        &self,
        repository: &Repository,
        number: u64,
        page: PageRequest,
    ) -> Result<Page<Review>, TransportError> {
        if self.review_delay_ms > 0 {
            // Later pull requests answer first.
            let delay = self.review_delay_ms * (10 - number % 10);
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
        }
        let key = (repository.name.clone(), number);
        if self.fail_reviews_for.as_ref() == Some(&key) {
            return Err(Self::failure("list reviews"));
        }
        let items = self.reviews.get(&key).cloned().unwrap_or_default();
        Ok(paginate(&items, page))
    }
}

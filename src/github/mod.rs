//! Access to the hosting service.
//!
//! `HostingClient` is the seam between the collection engine and GitHub. The
//! octocrab-backed implementation is `OctocrabClient`; tests substitute an
//! in-memory fake.

mod client;
mod models;

pub use client::OctocrabClient;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::model::{PullRequest, Repository, Review};

/// Largest page GitHub serves for list endpoints.
pub const MAX_PER_PAGE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    pub per_page: u8,
}

impl PageRequest {
    pub fn first(per_page: u8) -> Self {
        Self { page: 1, per_page }
    }

    pub fn at(self, page: u32) -> Self {
        Self { page, ..self }
    }
}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Page to request next, `None` on the last page
    pub next_page: Option<u32>,
}

#[async_trait]
pub trait HostingClient: Send + Sync {
    /// Login of the account the credential belongs to.
    async fn authenticated_user(&self) -> Result<String, TransportError>;

    async fn list_org_repositories(
        &self,
        org: &str,
        page: PageRequest,
    ) -> Result<Page<Repository>, TransportError>;

    async fn list_open_pull_requests(
        &self,
        repository: &Repository,
        page: PageRequest,
    ) -> Result<Page<PullRequest>, TransportError>;

    async fn list_reviews(
        &self,
        repository: &Repository,
        number: u64,
        page: PageRequest,
    ) -> Result<Page<Review>, TransportError>;
}

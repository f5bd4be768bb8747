use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Serialize;
use tracing::debug;

use super::models::{ApiPullRequest, ApiRepository, ApiReview, ApiUser};
use super::{HostingClient, Page, PageRequest};
use crate::error::TransportError;
use crate::model::{PullRequest, Repository, Review};

#[derive(Debug, Serialize)]
struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'static str>,
    per_page: u8,
    page: u32,
}

impl ListParams {
    fn new(request: PageRequest) -> Self {
        Self {
            state: None,
            per_page: request.per_page,
            page: request.page,
        }
    }

    fn open(request: PageRequest) -> Self {
        Self {
            state: Some("open"),
            ..Self::new(request)
        }
    }
}

/// GitHub REST client backed by octocrab.
pub struct OctocrabClient {
    octo: Octocrab,
}

impl OctocrabClient {
    pub fn new(octo: Octocrab) -> Self {
        Self { octo }
    }

    /// Build an authenticated client, optionally against a non-default API base.
    pub fn connect(token: &str, api_base: Option<&str>) -> Result<Self, TransportError> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());
        if let Some(api) = api_base {
            builder = builder
                .base_uri(api)
                .map_err(|e| TransportError::InvalidBaseUrl {
                    url: api.to_string(),
                    message: e.to_string(),
                })?;
        }
        let octo = builder
            .build()
            .map_err(|e| map_octocrab_error("build client", &e))?;
        Ok(Self::new(octo))
    }

    async fn get_page<T>(
        &self,
        operation: &str,
        route: &str,
        params: &ListParams,
    ) -> Result<Page<T>, TransportError>
    where
        T: serde::de::DeserializeOwned + 'static,
    {
        debug!("GET {} page {}", route, params.page);
        let page: octocrab::Page<T> = self
            .octo
            .get(route, Some(params))
            .await
            .map_err(|e| map_octocrab_error(operation, &e))?;

        let next_page = page.next.as_ref().and_then(|uri| next_page_number(uri.query()));
        Ok(Page {
            items: page.items,
            next_page,
        })
    }
}

#[async_trait]
impl HostingClient for OctocrabClient {
    async fn authenticated_user(&self) -> Result<String, TransportError> {
        let user: ApiUser = self
            .octo
            .get("/user", None::<&()>)
            .await
            .map_err(|e| map_octocrab_error("get authenticated user", &e))?;
        Ok(user.login)
    }

    async fn list_org_repositories(
        &self,
        org: &str,
        page: PageRequest,
    ) -> Result<Page<Repository>, TransportError> {
        let route = format!("/orgs/{org}/repos");
        let page: Page<ApiRepository> = self
            .get_page("list organization repositories", &route, &ListParams::new(page))
            .await?;
        Ok(Page {
            items: page.items.into_iter().map(Repository::from).collect(),
            next_page: page.next_page,
        })
    }

    async fn list_open_pull_requests(
        &self,
        repository: &Repository,
        page: PageRequest,
    ) -> Result<Page<PullRequest>, TransportError> {
        let route = format!("/repos/{}/{}/pulls", repository.owner, repository.name);
        let page: Page<ApiPullRequest> = self
            .get_page("list pull requests", &route, &ListParams::open(page))
            .await?;
        Ok(Page {
            items: page.items.into_iter().map(PullRequest::from).collect(),
            next_page: page.next_page,
        })
    }

    async fn list_reviews(
        &self,
        repository: &Repository,
        number: u64,
        page: PageRequest,
    ) -> Result<Page<Review>, TransportError> {
        let route = format!(
            "/repos/{}/{}/pulls/{}/reviews",
            repository.owner, repository.name, number
        );
        let page: Page<ApiReview> = self
            .get_page("list reviews", &route, &ListParams::new(page))
            .await?;
        Ok(Page {
            items: page
                .items
                .into_iter()
                .map(|r| r.into_review(number))
                .collect(),
            next_page: page.next_page,
        })
    }
}

/// Extract `page=N` from the query string of a `Link: rel="next"` URL.
fn next_page_number(query: Option<&str>) -> Option<u32> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

fn is_rate_limit(status: u16, message: &str) -> bool {
    matches!(status, 403 | 429) && message.to_lowercase().contains("rate limit")
}

fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> TransportError {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            let status = source.status_code.as_u16();
            let message = source.message.clone();
            if is_rate_limit(status, &message) {
                TransportError::RateLimited {
                    operation: operation.to_string(),
                    message,
                }
            } else if matches!(status, 401 | 403) {
                TransportError::Authentication {
                    operation: operation.to_string(),
                    message,
                }
            } else {
                TransportError::Api {
                    operation: operation.to_string(),
                    status,
                    message,
                }
            }
        }
        octocrab::Error::Serde { source, .. } => TransportError::Decode {
            operation: operation.to_string(),
            message: source.to_string(),
        },
        octocrab::Error::Json { source, .. } => TransportError::Decode {
            operation: operation.to_string(),
            message: source.to_string(),
        },
        other => TransportError::Network {
            operation: operation.to_string(),
            message: other.to_string(),
        },
    }
}

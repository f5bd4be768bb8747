use futures::stream::{self, StreamExt, TryStreamExt};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::error::{CollectError, TransportError};
use crate::github::{HostingClient, Page, PageRequest, MAX_PER_PAGE};
use crate::grouping::{AliasTable, Grouping};
use crate::model::{AggregateRecord, PullRequest, Repository, Review};

#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Upper bound on in-flight requests; 1 fetches strictly one call at a time
    pub concurrency: usize,
    pub per_page: u8,
    /// Follow pagination for pull requests and reviews instead of reading one page
    pub all_pages: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            concurrency: 1,
            per_page: MAX_PER_PAGE,
            all_pages: false,
        }
    }
}

fn permits(concurrency: usize) -> usize {
    concurrency.clamp(1, Semaphore::MAX_PERMITS)
}

/// Fetches open pull requests and their reviews and buckets them by base.
pub struct Collector<'a, C: ?Sized> {
    client: &'a C,
    aliases: &'a AliasTable,
    options: CollectOptions,
    semaphore: Semaphore,
}

impl<'a, C> Collector<'a, C>
where
    C: HostingClient + ?Sized,
{
    pub fn new(client: &'a C, aliases: &'a AliasTable, options: CollectOptions) -> Self {
        let semaphore = Semaphore::new(permits(options.concurrency));
        Self {
            client,
            aliases,
            options,
            semaphore,
        }
    }

    fn width(&self) -> usize {
        permits(self.options.concurrency)
    }

    /// Build the base-label grouping for `repositories`.
    ///
    /// Records land in their bucket in repository order, then pull request
    /// order, whatever order the fetches complete in. Any error drops the
    /// outstanding fetches and no grouping is produced.
    pub async fn collect_by_base(
        &self,
        repositories: &[Repository],
    ) -> Result<Grouping, CollectError> {
        info!(
            "Collecting pull requests from {} repositories with concurrency {}",
            repositories.len(),
            self.width()
        );

        let per_repository: Vec<Vec<AggregateRecord>> =
            stream::iter(repositories.iter().cloned().map(Arc::new))
                .map(|repository| self.collect_repository(repository))
                .buffered(self.width())
                .try_collect()
                .await?;

        let mut grouping = Grouping::new();
        let mut total = 0usize;
        for records in per_repository {
            total += records.len();
            for record in records {
                let base = self.aliases.normalize(&record.pull_request().base_label);
                grouping.entry(base).or_default().push(record);
            }
        }

        info!("TOTAL PR: {}", total);
        Ok(grouping)
    }

    async fn collect_repository(
        &self,
        repository: Arc<Repository>,
    ) -> Result<Vec<AggregateRecord>, CollectError> {
        let what = format!("open pull requests of {}", repository.full_name());
        let pull_requests = self
            .fetch_pages(&what, |request| {
                self.client.list_open_pull_requests(&repository, request)
            })
            .await?;

        if pull_requests.is_empty() {
            debug!("No open pull requests in {}", repository.full_name());
            return Ok(Vec::new());
        }

        info!("{:02} PR: {}", pull_requests.len(), repository.name);

        stream::iter(pull_requests)
            .map(|pull_request| self.collect_record(Arc::clone(&repository), pull_request))
            .buffered(self.width())
            .try_collect()
            .await
    }

    async fn collect_record(
        &self,
        repository: Arc<Repository>,
        pull_request: PullRequest,
    ) -> Result<AggregateRecord, CollectError> {
        let number = pull_request.number;
        let what = format!("reviews of {}#{}", repository.full_name(), number);
        let reviews: Vec<Review> = self
            .fetch_pages(&what, |request| {
                self.client.list_reviews(&repository, number, request)
            })
            .await?;

        Ok(AggregateRecord::new(repository, pull_request, reviews))
    }

    /// Read the first page, or every page when `all_pages` is set. A dropped
    /// tail is logged so truncation is never silent.
    async fn fetch_pages<T, F, Fut>(&self, what: &str, fetch: F) -> Result<Vec<T>, CollectError>
    where
        F: Fn(PageRequest) -> Fut,
        Fut: Future<Output = Result<Page<T>, TransportError>>,
    {
        let mut request = PageRequest::first(self.options.per_page);
        let mut items = Vec::new();

        loop {
            let page = {
                let _permit = self.semaphore.acquire().await?;
                fetch(request).await?
            };
            items.extend(page.items);

            match page.next_page {
                Some(next) if self.options.all_pages => request = request.at(next),
                Some(_) => {
                    warn!(
                        "Only the first {} {} are reported (use --all-pages to read the rest)",
                        items.len(),
                        what
                    );
                    break;
                }
                None => break,
            }
        }

        Ok(items)
    }
}

/// Collect with a fresh [`Collector`].
pub async fn collect_by_base<C>(
    client: &C,
    repositories: &[Repository],
    aliases: &AliasTable,
    options: CollectOptions,
) -> Result<Grouping, CollectError>
where
    C: HostingClient + ?Sized,
{
    Collector::new(client, aliases, options)
        .collect_by_base(repositories)
        .await
}

use tracing::debug;

use crate::error::TransportError;
use crate::github::{HostingClient, PageRequest, MAX_PER_PAGE};
use crate::model::Repository;

/// List every repository of `org`, following pagination to the end.
///
/// Either the full listing or the first error is returned, never a prefix.
pub async fn enumerate_repositories<C>(
    client: &C,
    org: &str,
) -> Result<Vec<Repository>, TransportError>
where
    C: HostingClient + ?Sized,
{
    let mut request = PageRequest::first(MAX_PER_PAGE);
    let mut repositories = Vec::new();

    loop {
        let page = client.list_org_repositories(org, request).await?;
        debug!(
            "Organization {} page {}: {} repositories",
            org,
            request.page,
            page.items.len()
        );
        repositories.extend(page.items);

        match page.next_page {
            Some(next) => request = request.at(next),
            None => break,
        }
    }

    Ok(repositories)
}

use std::time::Duration;

use scraper::Html;

use crate::schema::BookSummary;
use crate::search::{self, SEARCH_URL};
use crate::summary;

/// A dead endpoint and a drifted page template are different problems;
/// callers get to tell them apart.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected page structure: {0}")]
    Structure(anyhow::Error),
}

/// Builds the shared client.  No timeout is applied unless one is given, so
/// by default a hung endpoint blocks the call indefinitely.
pub fn reqwest_client(timeout: Option<Duration>) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// One GET against the fixed search URL; returns at most ten absolute
/// book-detail links in document order.
pub async fn fetch_search_links(client: &reqwest::Client) -> Result<Vec<String>, FetchError> {
    let document = fetch_document(client, SEARCH_URL).await?;
    Ok(search::parse_search_links(&document))
}

/// One GET per call; no batching, callers loop over their URLs.
pub async fn fetch_book_summary(
    client: &reqwest::Client,
    url: &str,
) -> Result<BookSummary, FetchError> {
    let document = fetch_document(client, url).await?;
    summary::parse_book_summary(&document).map_err(FetchError::Structure)
}

async fn fetch_document(client: &reqwest::Client, url: &str) -> Result<Html, reqwest::Error> {
    let response = client.get(url).send().await?;
    Ok(Html::parse_document(&response.text().await?))
}

//! Feed sources for pulling content from the web.
//!
//! This module contains one submodule per configured feed source, plus the
//! shared fetch loop that drives them all.
//!
//! # Supported Sources
//!
//! | Source | Module | Format | Cap | Notes |
//! |--------|--------|--------|-----|-------|
//! | arXiv | [`arxiv`] | Atom | 5 | Finance + AI search, newest submissions first |
//! | Google News | [`news`] | RSS | 15 | Search feed with a `when:` time-window term |
//!
//! # Common Pattern
//!
//! Each source module exports its label, item cap, query URL builder, and a
//! `parse` function mapping raw feed XML into [`Item`]s. A source is wired
//! into the pipeline by listing it in [`default_sources`]; adding a source
//! requires no branching in the fetch loop.
//!
//! Fetching is strictly sequential and per-source failures are logged and
//! skipped: a dead feed contributes zero items and the run continues with
//! whatever the remaining sources return.

use crate::models::Item;
use reqwest::Client;
use std::error::Error;
use std::time::Duration;
use tracing::{error, info, instrument};

pub mod arxiv;
pub mod news;

/// Parse raw feed XML into items, bounded by a per-source cap.
///
/// The final argument is the current year in the configured timezone, used by
/// mappers that reject implausibly future-dated entries.
pub type ParseFn = fn(&str, usize, i32) -> Result<Vec<Item>, Box<dyn Error>>;

/// Everything the pipeline needs to know about one feed source.
pub struct FeedSource {
    /// Provenance label stamped onto every item from this source.
    pub name: &'static str,
    /// Fully-formed query URL.
    pub url: String,
    /// Maximum number of entries taken from this feed per run.
    pub cap: usize,
    /// Maps the fetched feed body into items.
    pub parse: ParseFn,
}

/// The configured feed sources, in fetch order.
pub fn default_sources() -> Vec<FeedSource> {
    vec![
        FeedSource {
            name: arxiv::SOURCE_NAME,
            url: arxiv::query_url(),
            cap: arxiv::MAX_RESULTS,
            parse: arxiv::parse,
        },
        FeedSource {
            name: news::SOURCE_NAME,
            url: news::query_url(),
            cap: news::MAX_ITEMS,
            parse: news::parse,
        },
    ]
}

/// Build the HTTP client shared by all feed fetches.
pub fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("fin-ai-radar/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .build()
}

/// Fetch every configured source in order, preserving partial results.
///
/// Each source is fetched and parsed in turn. Any failure (network, HTTP
/// status, malformed feed) is caught and logged; that source contributes
/// zero items and processing continues with the remaining sources. The run
/// never fails here, even if every source is down.
#[instrument(level = "info", skip_all)]
pub async fn fetch_all(client: &Client, sources: &[FeedSource], current_year: i32) -> Vec<Item> {
    let mut items = Vec::new();
    for source in sources {
        match fetch_source(client, source, current_year).await {
            Ok(mut batch) => {
                info!(source = source.name, count = batch.len(), "Fetched feed");
                items.append(&mut batch);
            }
            Err(e) => {
                error!(
                    source = source.name,
                    url = %source.url,
                    error = %e,
                    "Feed fetch failed; continuing with remaining sources"
                );
            }
        }
    }
    info!(count = items.len(), "Collected items from all feeds");
    items
}

/// Fetch and parse a single source.
#[instrument(level = "info", skip_all, fields(source = source.name))]
async fn fetch_source(
    client: &Client,
    source: &FeedSource,
    current_year: i32,
) -> Result<Vec<Item>, Box<dyn Error>> {
    let body = client
        .get(&source.url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    (source.parse)(&body, source.cap, current_year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sources_order_and_caps() {
        let sources = default_sources();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].name, "ArXiv");
        assert_eq!(sources[0].cap, 5);
        assert_eq!(sources[1].name, "News");
        assert_eq!(sources[1].cap, 15);
    }

    #[test]
    fn test_default_source_urls_are_valid() {
        for source in default_sources() {
            url::Url::parse(&source.url).expect("source URL must parse");
        }
    }

    #[tokio::test]
    async fn test_fetch_all_survives_dead_sources() {
        let client = http_client().unwrap();
        let dead = |name: &'static str| FeedSource {
            name,
            url: "http://127.0.0.1:9/unreachable".to_string(),
            cap: 5,
            parse: arxiv::parse,
        };
        let items = fetch_all(&client, &[dead("ArXiv"), dead("News")], 2025).await;
        assert!(items.is_empty());
    }
}

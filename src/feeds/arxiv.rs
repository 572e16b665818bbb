//! arXiv paper feed.
//!
//! Pulls the newest submissions matching a finance + artificial intelligence
//! search from the [arXiv Atom export API](http://export.arxiv.org/api/query).
//!
//! # Entry Mapping
//!
//! Atom `published` timestamps arrive as RFC 3339 (`2025-08-06T17:59:59Z`)
//! and are sliced to their first 10 characters to produce the `YYYY-MM-DD`
//! sort key. Titles arrive line-wrapped inside the XML and are flattened to a
//! single line. Abstracts are tag-stripped and truncated.
//!
//! Entries dated more than one year beyond the current year are skipped: the
//! arXiv API occasionally surfaces records with garbled submission dates, and
//! an implausibly future date would pin the entry to the top of the page
//! indefinitely.

use crate::models::Item;
use crate::utils::{clean_summary, normalize_title, SUMMARY_MAX_CHARS};
use serde::Deserialize;
use std::error::Error;
use tracing::{debug, warn};

/// Provenance label for items from this feed.
pub const SOURCE_NAME: &str = "ArXiv";

/// Maximum number of paper entries taken per run.
pub const MAX_RESULTS: usize = 5;

/// Build the fixed search query URL.
pub fn query_url() -> String {
    format!(
        "http://export.arxiv.org/api/query?search_query={}&start=0&max_results={}&sortBy=submittedDate&sortOrder=descending",
        urlencoding::encode("all:finance AND all:artificial intelligence"),
        MAX_RESULTS
    )
}

#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(rename = "entry", default)]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    id: String,
    title: String,
    #[serde(default)]
    summary: Option<String>,
    published: String,
    #[serde(rename = "link", default)]
    links: Vec<AtomLink>,
}

#[derive(Debug, Deserialize)]
struct AtomLink {
    #[serde(rename = "@href")]
    href: String,
    #[serde(rename = "@rel")]
    rel: Option<String>,
}

/// Parse an arXiv Atom document into items.
///
/// Takes at most `cap` entries. Entries with malformed `published` fields or
/// a year more than one ahead of `current_year` are skipped individually;
/// only an unparseable document fails the whole feed.
pub fn parse(xml: &str, cap: usize, current_year: i32) -> Result<Vec<Item>, Box<dyn Error>> {
    let feed: AtomFeed = quick_xml::de::from_str(xml)?;
    let mut items = Vec::new();
    for entry in feed.entries.into_iter().take(cap) {
        let Some(time) = entry.published.get(..10).map(str::to_string) else {
            warn!(published = %entry.published, "Skipping entry with malformed published date");
            continue;
        };
        match time.get(..4).and_then(|y| y.parse::<i32>().ok()) {
            Some(year) if year <= current_year + 1 => {}
            Some(year) => {
                warn!(year, id = %entry.id, "Skipping entry dated implausibly far in the future");
                continue;
            }
            None => {
                warn!(published = %entry.published, "Skipping entry with unparseable year");
                continue;
            }
        }

        // The abstract page link carries rel="alternate"; the bare pdf link
        // does not qualify. Fall back to the feed-assigned id, itself a URL.
        let link = entry
            .links
            .iter()
            .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
            .map(|l| l.href.clone())
            .unwrap_or_else(|| entry.id.clone());

        let title = normalize_title(&entry.title);
        debug!(id = %entry.id, %time, "Mapped arXiv entry");
        items.push(Item {
            id: entry.id,
            source: SOURCE_NAME.to_string(),
            kind: "paper".to_string(),
            title_en: title.clone(),
            title,
            time,
            link,
            tags: vec!["Research".to_string()],
            summary: clean_summary(entry.summary.as_deref().unwrap_or(""), SUMMARY_MAX_CHARS),
        });
    }
    Ok(items)
}

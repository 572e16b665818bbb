//! Google News search feed.
//!
//! Pulls recent coverage of AI in finance from the Google News RSS search
//! endpoint. The query carries a fixed `when:2d` time-window term, so the
//! feed only ever returns the last two days of coverage and the per-run cap
//! does the rest.
//!
//! # Entry Mapping
//!
//! RSS `pubDate` values arrive as RFC 2822 (`Wed, 06 Aug 2025 12:00:00 GMT`)
//! and are reformatted to the `YYYY-MM-DD` sort key. Descriptions arrive as
//! HTML fragments and are tag-stripped and truncated. Entries whose link is
//! not a parseable URL are skipped.

use crate::models::Item;
use crate::utils::{clean_summary, normalize_title, SUMMARY_MAX_CHARS};
use chrono::DateTime;
use serde::Deserialize;
use std::error::Error;
use tracing::{debug, warn};

/// Provenance label for items from this feed.
pub const SOURCE_NAME: &str = "News";

/// Maximum number of news entries taken per run.
pub const MAX_ITEMS: usize = 15;

/// Build the fixed search query URL.
pub fn query_url() -> String {
    format!(
        "https://news.google.com/rss/search?q={}&hl=en-US&gl=US&ceid=US:en",
        urlencoding::encode("artificial intelligence finance when:2d")
    )
}

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<RssItem>,
}

#[derive(Debug, Deserialize)]
struct RssItem {
    title: String,
    link: String,
    #[serde(rename = "pubDate", default)]
    pub_date: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Parse a Google News RSS document into items.
///
/// Takes at most `cap` entries. Entries with missing or unparseable
/// `pubDate` fields, or links that are not valid URLs, are skipped
/// individually; only an unparseable document fails the whole feed.
pub fn parse(xml: &str, cap: usize, _current_year: i32) -> Result<Vec<Item>, Box<dyn Error>> {
    let rss: Rss = quick_xml::de::from_str(xml)?;
    let mut items = Vec::new();
    for entry in rss.channel.items {
        if items.len() == cap {
            break;
        }
        let Some(time) = entry
            .pub_date
            .as_deref()
            .and_then(|d| DateTime::parse_from_rfc2822(d).ok())
            .map(|d| d.format("%Y-%m-%d").to_string())
        else {
            warn!(pub_date = ?entry.pub_date, "Skipping entry with unparseable pubDate");
            continue;
        };
        if url::Url::parse(&entry.link).is_err() {
            warn!(link = %entry.link, "Skipping entry with invalid link");
            continue;
        }

        let title = normalize_title(&entry.title);
        debug!(link = %entry.link, %time, "Mapped news entry");
        items.push(Item {
            id: entry.link.clone(),
            source: SOURCE_NAME.to_string(),
            kind: "news".to_string(),
            title_en: title.clone(),
            title,
            time,
            link: entry.link,
            tags: vec!["Market".to_string()],
            summary: clean_summary(entry.description.as_deref().unwrap_or(""), SUMMARY_MAX_CHARS),
        });
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_xml(link: &str, pub_date: &str, title: &str) -> String {
        format!(
            r#"<item>
                 <title>{title}</title>
                 <link>{link}</link>
                 <guid isPermaLink="false">{link}#guid</guid>
                 <pubDate>{pub_date}</pubDate>
                 <description>&lt;a href="{link}"&gt;{title}&lt;/a&gt;&amp;nbsp;- Example Wire</description>
               </item>"#
        )
    }

    fn feed_xml(items: &[String]) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
               <rss version="2.0">
                 <channel>
                   <title>"ai finance" - Google News</title>
                   <language>en-US</language>
                   {}
                 </channel>
               </rss>"#,
            items.join("\n")
        )
    }

    #[test]
    fn test_parse_maps_entries() {
        let xml = feed_xml(&[item_xml(
            "https://example.com/story-1",
            "Wed, 06 Aug 2025 12:00:00 GMT",
            "Banks lean on AI models",
        )]);
        let items = parse(&xml, 15, 2025).unwrap();
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.source, "News");
        assert_eq!(item.kind, "news");
        assert_eq!(item.time, "2025-08-06");
        assert_eq!(item.title, "Banks lean on AI models");
        assert_eq!(item.id, "https://example.com/story-1");
        assert_eq!(item.link, "https://example.com/story-1");
        assert!(!item.summary.contains('<'));
        assert!(item.summary.contains("Banks lean on AI models"));
    }

    #[test]
    fn test_parse_applies_cap() {
        let entries: Vec<String> = (0..20)
            .map(|i| {
                item_xml(
                    &format!("https://example.com/story-{i}"),
                    "Wed, 06 Aug 2025 12:00:00 GMT",
                    "Story",
                )
            })
            .collect();
        let items = parse(&feed_xml(&entries), 15, 2025).unwrap();
        assert_eq!(items.len(), 15);
    }

    #[test]
    fn test_parse_skips_bad_dates_and_links() {
        let xml = feed_xml(&[
            item_xml("https://example.com/ok", "Wed, 06 Aug 2025 12:00:00 GMT", "Kept"),
            item_xml("https://example.com/bad-date", "sometime last week", "Dropped"),
            item_xml("not a url", "Wed, 06 Aug 2025 12:00:00 GMT", "Dropped Too"),
        ]);
        let items = parse(&xml, 15, 2025).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Kept");
    }

    #[test]
    fn test_parse_rejects_garbage_document() {
        assert!(parse("{\"not\": \"xml\"}", 15, 2025).is_err());
    }

    #[test]
    fn test_query_url_has_time_window() {
        let url = query_url();
        assert!(url.starts_with("https://news.google.com/rss/search?"));
        assert!(url.contains("when%3A2d"));
    }
}

//! Data model for aggregated content items.
//!
//! This module defines the one entity the pipeline manipulates:
//! - [`Item`]: a normalized record representing one piece of aggregated
//!   content, regardless of whether it came from the paper feed, the news
//!   feed, or the manually curated data file.
//!
//! Items are constructed transiently during a run, serialized once into the
//! page payload, and discarded. There is no cache of previously seen items;
//! every run rebuilds the collection from scratch.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One aggregated piece of content.
///
/// The field names match the JSON payload consumed by the page template,
/// hence `kind` serializing as `type`. Non-ASCII text (translated titles and
/// summaries) is carried through verbatim; `serde_json` does not escape it.
///
/// # Invariants
///
/// * `time` is always a fixed-width `YYYY-MM-DD` string, so lexical ordering
///   equals chronological ordering. The sort in [`sort_newest_first`] relies
///   on this.
/// * `title_en` always holds the original-language title. Feed mappers set it
///   at construction; the manual-data loader backfills it from `title`.
/// * `id` is not unique across sources and is never used for deduplication.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Item {
    /// The entry's canonical link or feed-assigned id. Display/keying only.
    #[serde(default)]
    pub id: String,
    /// Provenance label: `"ArXiv"`, `"News"`, or `"Manual"`.
    #[serde(default = "default_source")]
    pub source: String,
    /// Content class, serialized as `type`: `"paper"` or `"news"`.
    #[serde(default = "default_kind", rename = "type")]
    pub kind: String,
    /// Display title, possibly machine-translated.
    pub title: String,
    /// Original-language title, backfilled from `title` when absent.
    #[serde(default)]
    pub title_en: String,
    /// Publication date, `YYYY-MM-DD`. The sort key.
    pub time: String,
    /// Canonical source link.
    pub link: String,
    /// Topic labels shown on the page.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Cleaned, truncated, possibly translated excerpt.
    #[serde(default)]
    pub summary: String,
}

fn default_source() -> String {
    "Manual".to_string()
}

fn default_kind() -> String {
    "news".to_string()
}

/// Sort items newest-first by their `time` field.
///
/// Descending lexical order on `YYYY-MM-DD` strings is descending
/// chronological order. The sort is stable: items sharing the same day keep
/// their relative pre-sort order, so feed order breaks ties. Finer-grained
/// ordering within a day is intentionally not attempted.
pub fn sort_newest_first(items: Vec<Item>) -> Vec<Item> {
    items
        .into_iter()
        .sorted_by(|a, b| b.time.cmp(&a.time))
        .collect()
}

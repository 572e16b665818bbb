//! Manually curated data file loader.
//!
//! Alongside the fetched feeds, the page can carry hand-authored items from a
//! local JSON file (a list of item-shaped records). The file is optional and
//! always best-effort: a missing, unreadable, or malformed file contributes
//! zero items and is only logged, never fatal.

use crate::models::Item;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Load items from the manually curated file, if present.
///
/// Records are tolerated loosely: optional fields missing from a record are
/// backfilled with defaults derived from its other fields (see [`backfill`]),
/// so downstream consumers can rely on every field being populated.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn load_extra_items(path: &str) -> Vec<Item> {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            info!(error = %e, "No manual data file; skipping");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<Item>>(&raw) {
        Ok(mut items) => {
            for item in &mut items {
                backfill(item);
            }
            info!(count = items.len(), "Merged manually curated items");
            items
        }
        Err(e) => {
            warn!(error = %e, "Manual data file is not a list of items; skipping");
            Vec::new()
        }
    }
}

/// Backfill missing optional fields from their sibling fields.
///
/// An empty `title_en` takes the item's own `title`; an empty `id` takes the
/// item's `link`.
pub fn backfill(item: &mut Item) {
    if item.title_en.is_empty() {
        item.title_en = item.title.clone();
    }
    if item.id.is_empty() {
        item.id = item.link.clone();
    }
}

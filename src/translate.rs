//! Machine translation for titles and summaries.
//!
//! Translation is always advisory: a failed call degrades to the original
//! text and never blocks the pipeline. The design is trait-based:
//! - [`Translate`]: capability trait for turning a source string into its
//!   localized version, returning a typed [`TranslationError`] on failure
//! - [`GoogleTranslator`]: implementation backed by the public
//!   `translate.googleapis.com` text endpoint
//! - [`translate_or_original`]: the single fallback policy, applied once at
//!   the call site rather than duplicated per field
//!
//! Each string is translated with one independent call. There is no caching,
//! batching, rate limiting, or retrying; input is clipped to
//! [`MAX_INPUT_CHARS`] before submission to bound cost and latency.

use crate::models::Item;
use crate::utils::{truncate_chars, truncate_for_log};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Maximum number of characters submitted per translation call.
pub const MAX_INPUT_CHARS: usize = 500;

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Failure modes of a single translation call.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response shape: {0}")]
    Shape(&'static str),
}

/// Capability for producing a best-effort localized version of a string.
pub trait Translate {
    /// Translate `text` toward the implementation's target language.
    async fn translate(&self, text: &str) -> Result<String, TranslationError>;
}

/// Translator backed by the public Google Translate text endpoint.
///
/// The endpoint returns a nested JSON array whose first element lists
/// translated segments; the segments are concatenated to form the result.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    target: String,
}

impl GoogleTranslator {
    /// Create a translator producing text in `target` (a BCP-47 tag).
    pub fn new(client: Client, target: String) -> Self {
        Self { client, target }
    }
}

impl Translate for GoogleTranslator {
    #[instrument(level = "debug", skip_all)]
    async fn translate(&self, text: &str) -> Result<String, TranslationError> {
        let clipped = truncate_chars(text, MAX_INPUT_CHARS);
        let url = format!(
            "{ENDPOINT}?client=gtx&sl=auto&tl={}&dt=t&q={}",
            self.target,
            urlencoding::encode(clipped)
        );
        let body: Value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or(TranslationError::Shape("missing segment array"))?;
        let mut out = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(Value::as_str) {
                out.push_str(part);
            }
        }
        if out.is_empty() {
            return Err(TranslationError::Shape("no translated segments"));
        }
        debug!(chars_in = clipped.chars().count(), chars_out = out.chars().count(), "Translated string");
        Ok(out)
    }
}

/// The single fallback policy: translate, or keep the original unchanged.
///
/// Every translated field goes through this function so the policy lives in
/// exactly one place. Failures are logged and swallowed.
pub async fn translate_or_original<T: Translate>(translator: &T, text: &str) -> String {
    match translator.translate(text).await {
        Ok(translated) => translated,
        Err(e) => {
            warn!(
                error = %e,
                text = %truncate_for_log(text, 120),
                "Translation failed; keeping original text"
            );
            text.to_string()
        }
    }
}

/// Whether `text` is foreign relative to the `target` language.
///
/// For Chinese targets this checks for the absence of CJK ideographs, which
/// cleanly separates fetched English feed entries (translated) from manually
/// curated entries already written in Chinese (skipped). For any other
/// target the check is conservative and reports everything as foreign.
pub fn needs_translation(text: &str, target: &str) -> bool {
    if target.starts_with("zh") {
        !text.chars().any(|c| ('\u{4E00}'..='\u{9FFF}').contains(&c))
    } else {
        true
    }
}

/// Localize every foreign item in place, one sequential call per field.
///
/// The original title is preserved in `title_en` before being overwritten
/// with its translation. Items already in the target language are left
/// untouched.
#[instrument(level = "info", skip_all, fields(target = %target))]
pub async fn localize_items<T: Translate>(translator: &T, target: &str, items: &mut [Item]) {
    let mut translated = 0usize;
    for item in items.iter_mut() {
        if !needs_translation(&item.title, target) {
            continue;
        }
        item.title_en = item.title.clone();
        item.title = translate_or_original(translator, &item.title).await;
        if !item.summary.is_empty() && needs_translation(&item.summary, target) {
            item.summary = translate_or_original(translator, &item.summary).await;
        }
        translated += 1;
    }
    info!(total = items.len(), translated, "Localization pass complete");
}

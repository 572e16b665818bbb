//! Page rendering and output.
//!
//! The publisher performs exactly two literal substring substitutions on the
//! template — one for the serialized item payload, one for the last-updated
//! timestamp — and overwrites the output file with the result. There is no
//! templating engine and no partial write: an unreadable template aborts the
//! run before anything touches the output path.

use chrono::{DateTime, FixedOffset, Utc};
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Placeholder replaced verbatim with the serialized item payload.
pub const DATA_PLACEHOLDER: &str = "{{ITEMS_DATA}}";

/// The template's initial waiting-timestamp line, replaced with the run time.
///
/// The template ships with this literal as the page's pre-render value; the
/// substitution rewrites the whole line so the page never shows the stale
/// default.
pub const STAMP_PLACEHOLDER: &str = "lastUpdated: '2025-11-19 14:00'";

/// Format the page timestamp in the configured timezone.
///
/// The offset is an explicit parameter rather than ambient process state, so
/// the formatted result is fully determined by its inputs.
pub fn format_timestamp(now: DateTime<Utc>, tz: FixedOffset) -> String {
    now.with_timezone(&tz).format("%Y-%m-%d %H:%M").to_string()
}

/// Substitute the payload and timestamp into the template text.
pub fn substitute(template: &str, payload: &str, stamp: &str) -> String {
    template
        .replace(DATA_PLACEHOLDER, payload)
        .replace(STAMP_PLACEHOLDER, &format!("lastUpdated: '{stamp}'"))
}

/// Render the page and overwrite the output file.
///
/// Reads the template, substitutes both placeholders, and writes the result.
///
/// # Errors
///
/// An unreadable template or a failed write is fatal to the run; in the
/// template case the output file is guaranteed untouched.
#[instrument(level = "info", skip_all, fields(template = %template_path, output = %output_path))]
pub async fn render_page(
    template_path: &str,
    output_path: &str,
    payload: &str,
    stamp: &str,
) -> Result<(), Box<dyn Error>> {
    let template = match fs::read_to_string(template_path).await {
        Ok(template) => template,
        Err(e) => {
            error!(error = %e, "Cannot read template; aborting without writing output");
            return Err(e.into());
        }
    };
    let html = substitute(&template, payload, stamp);
    fs::write(output_path, html).await?;
    info!(bytes = payload.len(), "Wrote rendered page");
    Ok(())
}

//! # Fin AI Radar
//!
//! A static-site content aggregator that pulls AI-in-finance research papers
//! and market news from web feeds, optionally merges manually curated items,
//! machine-translates titles and summaries toward a target language, and
//! renders the result into a publishable HTML page.
//!
//! ## Features
//!
//! - Fetches the newest matching papers from the arXiv Atom export API and
//!   recent coverage from a Google News RSS search
//! - Merges an optional hand-authored `manual_data.json`
//! - Best-effort machine translation with per-string fallback to the original
//! - Renders a static page by substituting two placeholder tokens in an HTML
//!   template
//!
//! ## Usage
//!
//! ```sh
//! fin_ai_radar                 # template.html -> index.html
//! RUST_LOG=debug fin_ai_radar --no-translate
//! ```
//!
//! ## Architecture
//!
//! One strictly linear pipeline, re-run from scratch on every invocation:
//! 1. **Fetch**: one sequential request per configured feed source; a failed
//!    source contributes zero items and never fails the run
//! 2. **Merge**: append items from the optional manual data file
//! 3. **Translate**: one call per foreign title/summary, falling back to the
//!    original text on any failure
//! 4. **Publish**: sort newest-first, serialize to JSON, substitute into the
//!    template, overwrite the output file
//!
//! Only an unreadable template (or a failed output write) is fatal.

use chrono::{Datelike, FixedOffset, Utc};
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod extra;
mod feeds;
mod models;
mod output;
mod translate;
mod utils;

use cli::Cli;
use translate::GoogleTranslator;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("fin_ai_radar starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.template, ?args.output, ?args.extra_data, "Parsed CLI arguments");

    // The page timezone is explicit configuration, threaded into timestamp
    // formatting and the future-year guard.
    let tz = FixedOffset::east_opt(args.utc_offset_hours * 3600)
        .ok_or("utc offset out of range")?;
    let current_year = Utc::now().with_timezone(&tz).year();

    // ---- Fetch feeds ----
    let client = feeds::http_client()?;
    let sources = feeds::default_sources();
    let mut items = feeds::fetch_all(&client, &sources, current_year).await;

    // ---- Merge manually curated data ----
    let extra_items = extra::load_extra_items(&args.extra_data).await;
    items.extend(extra_items);

    // ---- Translate ----
    if args.no_translate {
        info!("Translation disabled; keeping original text");
    } else {
        let translator = GoogleTranslator::new(client.clone(), args.target_lang.clone());
        translate::localize_items(&translator, &args.target_lang, &mut items).await;
    }

    // ---- Sort & serialize ----
    let items = models::sort_newest_first(items);
    let payload = serde_json::to_string(&items)?;
    info!(count = items.len(), bytes = payload.len(), "Serialized item payload");

    // ---- Render page ----
    let stamp = output::format_timestamp(Utc::now(), tz);
    if let Err(e) = output::render_page(&args.template, &args.output, &payload, &stamp).await {
        error!(error = %e, "Run aborted before producing output");
        return Err(e);
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        count = items.len(),
        stamp = %stamp,
        path = %args.output,
        "Site updated"
    );
    Ok(())
}

//! Command-line interface definitions for Fin AI Radar.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every option has a default reproducing the zero-argument behavior expected
//! from a cron-driven run; selected options can also come from environment
//! variables.

use clap::Parser;

/// Command-line arguments for the Fin AI Radar application.
///
/// # Examples
///
/// ```sh
/// # Zero-argument cron usage: template.html in, index.html out
/// fin_ai_radar
///
/// # Custom paths, translation off
/// fin_ai_radar -t site/template.html -o site/index.html --no-translate
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the HTML template containing the substitution placeholders
    #[arg(short, long, default_value = "template.html")]
    pub template: String,

    /// Path the rendered page is written to (whole-file overwrite)
    #[arg(short, long, default_value = "index.html")]
    pub output: String,

    /// Optional manually curated items merged into the feed results
    #[arg(short = 'd', long, default_value = "manual_data.json")]
    pub extra_data: String,

    /// Target language for machine translation (BCP-47 tag)
    #[arg(long, env = "RADAR_TARGET_LANG", default_value = "zh-CN")]
    pub target_lang: String,

    /// Skip the machine-translation pass entirely
    #[arg(long)]
    pub no_translate: bool,

    /// Fixed UTC offset, in hours, for the page timestamp and year guard
    #[arg(long, env = "RADAR_UTC_OFFSET", default_value_t = 8)]
    pub utc_offset_hours: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["fin_ai_radar"]);
        assert_eq!(cli.template, "template.html");
        assert_eq!(cli.output, "index.html");
        assert_eq!(cli.extra_data, "manual_data.json");
        assert_eq!(cli.target_lang, "zh-CN");
        assert!(!cli.no_translate);
        assert_eq!(cli.utc_offset_hours, 8);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "fin_ai_radar",
            "-t",
            "site/template.html",
            "-o",
            "site/index.html",
            "-d",
            "site/manual_data.json",
        ]);
        assert_eq!(cli.template, "site/template.html");
        assert_eq!(cli.output, "site/index.html");
        assert_eq!(cli.extra_data, "site/manual_data.json");
    }

    #[test]
    fn test_cli_translation_options() {
        let cli = Cli::parse_from([
            "fin_ai_radar",
            "--no-translate",
            "--utc-offset-hours",
            "0",
        ]);
        assert!(cli.no_translate);
        assert_eq!(cli.utc_offset_hours, 0);
    }
}

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use asset_recolor::{format_hex_color, parse_hex_color, run_batch, BatchReport, BatchSettings};

#[derive(Parser)]
#[command(name = "asset-recolor")]
#[command(about = "Replace near-black backgrounds in asset images with a target color, in place")]
struct Cli {
    /// Directory holding the images (default: ./assets)
    #[arg(short = 'd', long)]
    assets_dir: Option<PathBuf>,

    /// Replacement color as hex, e.g. "#9333ea" (default: #9333ea)
    #[arg(short, long)]
    color: Option<String>,

    /// Channels must all be below this to count as black (default: 30)
    #[arg(short, long)]
    threshold: Option<u8>,

    /// JSON settings file; explicit flags take precedence over it
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Print the batch report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// File names to process instead of the default asset list
    files: Vec<String>,
}

impl Cli {
    fn into_settings(self) -> anyhow::Result<(BatchSettings, bool)> {
        let mut settings = match &self.settings {
            Some(path) => BatchSettings::load(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => BatchSettings::default(),
        };

        if let Some(dir) = self.assets_dir {
            settings.base_dir = dir;
        }
        if let Some(color) = &self.color {
            settings.recolor.target_color = parse_hex_color(color)?;
        }
        if let Some(threshold) = self.threshold {
            settings.recolor.threshold = threshold;
        }
        if !self.files.is_empty() {
            settings.files = self.files;
        }

        Ok((settings, self.json))
    }
}

fn render_report(report: &BatchReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asset_recolor=info".into()),
        )
        // stdout carries only the --json report
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let (settings, json) = Cli::parse().into_settings()?;

    let banner = "=".repeat(60);
    info!("{}", banner);
    info!("Recoloring backgrounds in {}", settings.base_dir.display());
    info!("New background color: {}", format_hex_color(settings.recolor.target_color));
    info!("{}", banner);

    let report = run_batch(&settings);

    info!("{}", banner);
    info!(
        recolored = report.recolored_count(),
        missing = report.missing_count(),
        failed = report.failed_count(),
        "Done! {} pixels changed in total.",
        report.total_changed
    );
    info!("{}", banner);

    if json {
        println!("{}", render_report(&report)?);
    }

    // Per-file failures are already reported; the run itself succeeded
    Ok(())
}

//! revery-summarize: print the key points of a document.
//!
//! Reads a document from a file (or stdin), summarizes it and prints each
//! key point as a bullet, or the full result as JSON.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use revery_summarizer::pipeline::observer::StageTimingObserver;
use revery_summarizer::{SummarizerConfig, SummaryPipeline};

// ── CLI ─────────────────────────────────────────────────────────────

/// Extractive key-point summarizer.
#[derive(Parser, Debug)]
#[command(name = "revery-summarize", version, about)]
struct Cli {
    /// Document to summarize. Reads stdin when omitted or `-`.
    file: Option<PathBuf>,

    /// Print the full result as JSON instead of bullets.
    #[arg(long)]
    json: bool,

    /// Path to a JSON summarizer config.
    #[arg(long, env = "REVERY_SUMMARIZER_CONFIG")]
    config: Option<PathBuf>,
}

// ── main ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            let cfg = SummarizerConfig::from_json_str(&raw)
                .with_context(|| format!("invalid config {}", path.display()))?;
            info!(path = %path.display(), "loaded summarizer config");
            cfg
        }
        None => SummarizerConfig::default(),
    };

    let text = read_input(cli.file.as_ref())?;

    let mut observer = StageTimingObserver::new();
    let pipeline = SummaryPipeline::with_config(config).context("invalid summarizer config")?;
    let result = pipeline.run(&text, &mut observer);
    for (stage, report) in observer.reports() {
        debug!(stage = *stage, elapsed_us = report.elapsed().as_micros() as u64, "stage finished");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for point in &result.points {
            println!("- {}", point.text);
        }
    }

    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

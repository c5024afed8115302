mod aggregate;
mod catalog;
mod error;
mod estimate;
mod extract;
mod fetch;
mod pipeline;
mod report;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::info;

use crate::fetch::HttpSource;
use crate::settings::{OutputMode, Settings};

#[derive(Parser)]
#[command(
    name = "kjv_scraper",
    about = "KJV chapter word counts and reading-time estimates"
)]
struct Cli {
    /// Book catalog file (one `<name> <chapter count>` per line)
    #[arg(short, long)]
    catalog: Option<PathBuf>,
    /// Directory for the report artifacts
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
    /// Reading rate in words per minute
    #[arg(long)]
    wpm: Option<u32>,
    /// Second artifact: per-book summary or tab-delimited chapter table
    #[arg(long, value_enum)]
    mode: Option<OutputMode>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut settings = Settings::load()?;
    if let Some(catalog) = cli.catalog {
        settings.catalog = catalog;
    }
    if let Some(out_dir) = cli.out_dir {
        settings.out_dir = out_dir;
    }
    if let Some(wpm) = cli.wpm {
        settings.words_per_minute = wpm;
    }
    if let Some(mode) = cli.mode {
        settings.output_mode = mode;
    }
    anyhow::ensure!(
        settings.words_per_minute > 0,
        "words per minute must be positive"
    );

    info!(settings = ?settings, msg = "starting scrape run");

    println!("KJV Reading Time");
    println!("================\n");

    let books = catalog::load(&settings.catalog)?;
    let total: u64 = books.iter().map(|b| u64::from(b.chapters)).sum();
    println!("Loaded {} books ({} chapters)\n", books.len(), total);
    if books.is_empty() {
        return Ok(());
    }

    let source = HttpSource::new()?;
    let output = pipeline::run(&source, &books, settings.words_per_minute)?;

    let records = aggregate::build_records(&books, &output)?;
    let summaries = aggregate::summarize(&records);

    let written = report::write_reports(
        &settings.out_dir,
        &records,
        &summaries,
        settings.output_mode,
    )?;
    for path in &written {
        println!("Wrote {}", path.display());
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

use std::path::PathBuf;

use clap::ValueEnum;
use config::{Config, Environment};
use serde::Deserialize;

/// Default reading rate in words per minute. Earlier builds of this tool
/// shipped with both 200 and 250; neither is authoritative, so the rate is
/// a setting (`--wpm`, `KJV_WORDS_PER_MINUTE`) with 200 as the default.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Which artifact a run produces alongside the chapter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Per-book totals in books.csv
    Summary,
    /// Tab-delimited copy of the chapter table in chapters.tsv
    Tab,
}

/// Runtime settings. `KJV_*` environment variables override the defaults;
/// CLI flags override both.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: PathBuf,
    pub out_dir: PathBuf,
    pub words_per_minute: u32,
    pub output_mode: OutputMode,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            catalog: PathBuf::from("bible.txt"),
            out_dir: PathBuf::from("."),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            output_mode: OutputMode::Summary,
        }
    }
}

impl Settings {
    pub fn load() -> anyhow::Result<Self> {
        let cfg = Config::builder()
            .add_source(Environment::with_prefix("KJV"))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}

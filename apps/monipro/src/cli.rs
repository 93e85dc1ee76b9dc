//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use monipro_common::Result;

use crate::config::Config;
use crate::ui::OutputMode;

#[derive(Parser, Debug)]
#[command(name = "monipro")]
#[command(about = "Terminal monitoring dashboard driven by simulated metrics")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to $XDG_CONFIG_HOME/monipro/config.toml)
    #[arg(long, env = "MONIPRO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Refresh interval in milliseconds, overrides the config file
    #[arg(long, env = "MONIPRO_INTERVAL_MS", global = true)]
    pub interval_ms: Option<u64>,

    /// Seed the random source for reproducible output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Print a text block per tick instead of the full-screen view
    #[arg(long, global = true, conflicts_with = "json")]
    pub plain: bool,

    /// Print a JSON line per tick instead of the full-screen view
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the live dashboard (default)
    Run {
        /// Stop after this many ticks (text and JSON output only)
        #[arg(long)]
        ticks: Option<u64>,
    },
    /// Draw one snapshot immediately, print it and exit
    Snapshot,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run { ticks: None }
    }
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.plain {
            OutputMode::Text
        } else {
            OutputMode::Interactive
        }
    }

    /// Load the config file and apply command-line overrides
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_path(path)?,
            None => Config::load()?,
        };
        if let Some(interval_ms) = self.interval_ms {
            config.refresh_interval_ms = interval_ms;
        }
        config.validate()?;
        Ok(config)
    }
}

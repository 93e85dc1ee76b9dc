//! MoniPro - Terminal monitoring dashboard with simulated metrics
//!
//! # Usage
//!
//! ```text
//! monipro                         # full-screen dashboard
//! monipro --plain                 # text block per tick
//! monipro --json run --ticks 10   # ten JSON lines, then exit
//! monipro snapshot --seed 42      # one reproducible snapshot
//! ```

use anyhow::Result;
use clap::Parser;

use monipro::cli::{Cli, Commands};
use monipro::ui::{self, OutputMode};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode = cli.output_mode();

    // Keep the full-screen view clean; RUST_LOG=monipro=info shows host diagnostics.
    let level = if mode == OutputMode::Interactive {
        "warn"
    } else {
        "info"
    };
    monipro_common::init_tracing("monipro", level)?;

    let config = cli.resolve_config()?;

    match cli.command.clone().unwrap_or_default() {
        Commands::Snapshot => {
            println!("{}", ui::render_snapshot(&config, mode, cli.seed)?);
        }
        Commands::Run { ticks } => {
            tracing::info!(
                interval_ms = config.refresh_interval_ms,
                "Starting {} dashboard",
                config.title
            );
            ui::run(&config, mode, cli.seed, ticks).await?;
            tracing::info!("Dashboard closed");
        }
    }

    Ok(())
}

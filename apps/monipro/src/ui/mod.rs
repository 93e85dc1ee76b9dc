//! Presentation: full-screen dashboard, plain text and JSON output

pub mod dashboard;
pub mod plain;
pub mod stream;
pub mod theme;
pub mod tui;

use std::io::{self, Write};

use monipro_common::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::{App, Message};
use crate::config::Config;
use crate::host::{detect_host_bridge, init_host, HostBridge};
use crate::sim::{generate, Simulator};
use stream::StreamFormat;

/// How the dashboard is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Full-screen terminal dashboard, falling back to text without a TTY
    Interactive,
    /// One text block per tick
    Text,
    /// One JSON line per tick
    Json,
}

/// Mount the dashboard and drive it until the user quits
///
/// `limit` caps the number of records in text and JSON modes.
pub async fn run(
    config: &Config,
    mode: OutputMode,
    seed: Option<u64>,
    limit: Option<u64>,
) -> Result<()> {
    let mut app = App::new(config, seed);
    let mut simulator = Simulator::new(config.refresh_interval());
    if let Some(seed) = seed {
        simulator = simulator.with_seed(seed);
    }

    let host = match mode {
        OutputMode::Interactive => detect_host_bridge(&config.title),
        _ => None,
    };
    let host = host.as_ref().map(|h| h as &dyn HostBridge);

    run_app(&mut app, simulator, mode, host, limit, &mut io::stdout()).await
}

/// Mount `app` on `simulator` and present it until it stops
///
/// In interactive mode the full-screen view is used only when `host`
/// accepts `ready` and `expand`; otherwise text records go to `out`.
/// The app is unmounted before this returns.
pub async fn run_app<W: Write>(
    app: &mut App,
    simulator: Simulator,
    mode: OutputMode,
    host: Option<&dyn HostBridge>,
    limit: Option<u64>,
    out: &mut W,
) -> Result<()> {
    let ticks = app.mount(simulator)?;

    if mode == OutputMode::Interactive {
        if init_host(host) {
            let result = tui::run(app, ticks).await;
            app.unmount();
            if let Some(host) = host {
                host.restore()?;
            }
            return result;
        }
        if let Some(host) = host {
            // Undo whatever part of `expand` succeeded before the failure.
            let _ = host.restore();
        }
        tracing::debug!("No interactive host, streaming text instead");
    }

    let format = match mode {
        OutputMode::Json => StreamFormat::Json,
        _ => StreamFormat::Text,
    };
    let result = stream::run(app, ticks, format, limit, out).await;
    app.unmount();
    result
}

/// Draw one snapshot right away, without a timer, and render it
///
/// With a seed this matches the first tick of a seeded `run`.
pub fn render_snapshot(config: &Config, mode: OutputMode, seed: Option<u64>) -> Result<String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut app = App::new(config, seed);
    app.update(Message::Tick(generate(&mut rng)));

    match mode {
        OutputMode::Json => plain::render_json_pretty(app.state()),
        _ => Ok(plain::render_text(app.title(), app.state())),
    }
}

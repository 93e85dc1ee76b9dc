//! Host integration
//!
//! A dashboard may run inside a host that wants to be told when the view is
//! ready and asked to give it the full screen. The host is feature-detected:
//! when none is found the dashboard runs without it and nothing is reported
//! as an error.

use std::io::{self, IsTerminal};

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};

/// Optional host the dashboard can announce itself to
pub trait HostBridge {
    /// Name used in diagnostics
    fn name(&self) -> &str;

    /// Tell the host the view is ready
    fn ready(&self) -> io::Result<()>;

    /// Ask the host to give the view its full area
    fn expand(&self) -> io::Result<()>;

    /// Undo `expand`; also called after a partial `expand` failure
    fn restore(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Host bridge for an interactive terminal
///
/// `ready` sets the window title and `expand` switches to the alternate
/// screen in raw mode. `restore` leaves both.
#[derive(Debug, Clone)]
pub struct TerminalHost {
    title: String,
}

impl TerminalHost {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl HostBridge for TerminalHost {
    fn name(&self) -> &str {
        "terminal"
    }

    fn ready(&self) -> io::Result<()> {
        execute!(io::stdout(), SetTitle(&self.title))
    }

    fn expand(&self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)
    }

    fn restore(&self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }
}

/// Look for a host; a terminal host exists only when stdout is a TTY
pub fn detect_host_bridge(title: &str) -> Option<TerminalHost> {
    if io::stdout().is_terminal() {
        Some(TerminalHost::new(format!("{} - Monitoring Dashboard", title)))
    } else {
        None
    }
}

/// Call `ready` then `expand` on the host, if there is one
///
/// Returns whether the host accepted both calls. A missing host is silent;
/// a failing host is logged and treated as absent.
pub fn init_host(bridge: Option<&dyn HostBridge>) -> bool {
    let Some(bridge) = bridge else {
        return false;
    };

    match bridge.ready().and_then(|()| bridge.expand()) {
        Ok(()) => {
            tracing::info!(host = bridge.name(), "Host bridge initialized");
            true
        }
        Err(e) => {
            tracing::warn!(host = bridge.name(), "Host bridge unavailable: {}", e);
            false
        }
    }
}

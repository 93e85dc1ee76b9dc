//! MoniPro - Terminal monitoring dashboard
//!
//! Shows CPU, memory, disk and network usage, uptime, server and alert
//! counts, and a five-row server list. Every value is simulated: a timer
//! draws a fresh random snapshot every few seconds and the view redraws.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use monipro::sim::Simulator;
//! use std::time::Duration;
//!
//! let mut handle = Simulator::new(Duration::from_secs(3)).start(|snapshot| {
//!     println!("cpu {}%", snapshot.cpu_percent);
//! })?;
//! // ...
//! handle.stop();
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `monipro`, or `monipro --json run --ticks 5` for scripts.

pub mod app;
pub mod cli;
pub mod config;
pub mod host;
pub mod sim;
pub mod state;
pub mod types;
pub mod ui;

// Re-export the main types
pub use app::{App, Message};
pub use config::Config;
pub use sim::{Simulator, SimulatorHandle};
pub use state::DashboardState;
pub use types::{MetricsSnapshot, ServerHealth, ServerStatus, Severity, Trend};

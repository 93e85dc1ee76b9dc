//! Simulated metric sources
//!
//! Nothing here reads the real system. Values come from a random source:
//! [`snapshot`] draws the seven dashboard metrics, [`roster`] draws the server
//! list, and [`scheduler`] repeats the snapshot draw on a timer.

pub mod roster;
pub mod scheduler;
pub mod snapshot;

use std::time::Duration;

use monipro_common::Result;

use crate::types::MetricsSnapshot;

pub use roster::{draw_roster, SERVER_COUNT};
pub use scheduler::{Simulator, SimulatorHandle, DEFAULT_INTERVAL};
pub use snapshot::generate;

/// Start an unseeded simulator ticking every `interval`
pub fn start<F>(interval: Duration, on_tick: F) -> Result<SimulatorHandle>
where
    F: FnMut(MetricsSnapshot) + Send + 'static,
{
    Simulator::new(interval).start(on_tick)
}

//! Interval-driven simulator task

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use monipro_common::{DashboardError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::snapshot::generate;
use crate::types::MetricsSnapshot;

/// Refresh cadence used when nothing else is configured
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

/// Produces a new [`MetricsSnapshot`] on a fixed interval
#[derive(Debug, Clone)]
pub struct Simulator {
    interval: Duration,
    seed: Option<u64>,
}

impl Simulator {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            seed: None,
        }
    }

    /// Use a seeded random source instead of OS entropy
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start ticking, calling `on_tick` with each new snapshot
    ///
    /// The first tick fires one full interval after this call. Must be called
    /// from inside a tokio runtime.
    pub fn start<F>(self, mut on_tick: F) -> Result<SimulatorHandle>
    where
        F: FnMut(MetricsSnapshot) + Send + 'static,
    {
        if self.interval.is_zero() {
            return Err(DashboardError::invalid_config(
                "refresh interval must be greater than zero",
            ));
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let stopped = Arc::new(Mutex::new(false));
        let flag = Arc::clone(&stopped);
        let period = self.interval;
        let first_tick = Instant::now() + period;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(first_tick, period);
            loop {
                ticker.tick().await;
                let snapshot = generate(&mut rng);

                // Held across the callback so `stop` waits for a tick in flight.
                {
                    let stopped = lock(&flag);
                    if *stopped {
                        break;
                    }
                    tracing::trace!(?snapshot, "simulator tick");
                    on_tick(snapshot);
                }
            }
        });

        tracing::debug!(interval_ms = period.as_millis() as u64, "simulator started");

        Ok(SimulatorHandle {
            stopped,
            task: Some(task),
        })
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

/// Handle to a running simulator
///
/// Dropping the handle stops the simulator.
#[derive(Debug)]
pub struct SimulatorHandle {
    stopped: Arc<Mutex<bool>>,
    task: Option<JoinHandle<()>>,
}

impl SimulatorHandle {
    /// Cancel future ticks
    ///
    /// Waits for a callback already running to finish; the callback is never
    /// invoked after this returns. Calling it again is a no-op.
    pub fn stop(&mut self) {
        *lock(&self.stopped) = true;
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("simulator stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

fn lock(flag: &Mutex<bool>) -> MutexGuard<'_, bool> {
    // Poisoned only by a panicking callback; the flag is still valid.
    flag.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Drop for SimulatorHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

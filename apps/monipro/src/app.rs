//! Main application state and logic

use chrono::Local;
use monipro_common::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::sim::{draw_roster, Simulator, SimulatorHandle};
use crate::state::DashboardState;
use crate::types::MetricsSnapshot;

/// Application messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// New snapshot from the simulator
    Tick(MetricsSnapshot),
    /// Leave the dashboard
    Quit,
}

/// Application state
///
/// Owns the view state and the running simulator. Mounting starts the
/// simulator; unmounting (or dropping the app) stops it.
pub struct App {
    /// Header title
    title: String,
    /// View state shown by renderers
    state: DashboardState,
    /// Random source for the server roster
    rng: StdRng,
    /// Simulator started on mount
    simulator: Option<SimulatorHandle>,
    /// Cleared by `Message::Quit`
    running: bool,
}

impl App {
    pub fn new(config: &Config, seed: Option<u64>) -> Self {
        // Offset the roster seed so it does not replay the simulator's draws.
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };
        let servers = draw_roster(&mut rng);

        Self {
            title: config.title.clone(),
            state: DashboardState::new(servers, Local::now()),
            rng,
            simulator: None,
            running: true,
        }
    }

    /// Start the simulator and return the stream of its ticks
    ///
    /// Must be called from inside a tokio runtime. Mounting again replaces
    /// the previous simulator.
    pub fn mount(&mut self, simulator: Simulator) -> Result<mpsc::UnboundedReceiver<Message>> {
        self.unmount();

        let (tx, rx) = mpsc::unbounded_channel();
        let interval = simulator.interval();
        let handle = simulator.start(move |snapshot| {
            // Receiver gone means the view is being torn down.
            let _ = tx.send(Message::Tick(snapshot));
        })?;

        tracing::info!(interval_ms = interval.as_millis() as u64, "Dashboard mounted");
        self.simulator = Some(handle);
        self.running = true;
        Ok(rx)
    }

    /// Stop the simulator; safe to call when not mounted
    pub fn unmount(&mut self) {
        if let Some(mut handle) = self.simulator.take() {
            handle.stop();
            tracing::info!("Dashboard unmounted");
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(snapshot) => {
                let servers = draw_roster(&mut self.rng);
                self.state.apply_tick(snapshot, servers, Local::now());
                tracing::debug!(tick = self.state.ticks, "Applied snapshot");
            }
            Message::Quit => {
                self.running = false;
            }
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// False once `Message::Quit` has been handled
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_mounted(&self) -> bool {
        self.simulator.as_ref().is_some_and(|h| h.is_running())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn snapshot(cpu: u8) -> MetricsSnapshot {
        MetricsSnapshot {
            cpu_percent: cpu,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_app_starts_zeroed_with_roster() {
        let app = App::new(&Config::default(), Some(1));
        assert_eq!(app.title(), "MoniPro");
        assert_eq!(app.state().metrics, MetricsSnapshot::default());
        assert_eq!(app.state().servers.len(), 5);
        assert!(app.is_running());
        assert!(!app.is_mounted());
    }

    #[test]
    fn test_tick_updates_state() {
        let mut app = App::new(&Config::default(), Some(1));
        app.update(Message::Tick(snapshot(64)));
        app.update(Message::Tick(snapshot(12)));

        assert_eq!(app.state().metrics.cpu_percent, 12);
        assert_eq!(app.state().ticks, 2);
        assert_eq!(app.state().servers.len(), 5);
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut app = App::new(&Config::default(), None);
        app.update(Message::Quit);
        assert!(!app.is_running());
    }

    #[tokio::test]
    async fn test_mount_and_unmount() {
        let mut app = App::new(&Config::default(), Some(2));
        let _rx = app
            .mount(Simulator::new(Duration::from_millis(50)).with_seed(2))
            .unwrap();
        assert!(app.is_mounted());

        app.unmount();
        assert!(!app.is_mounted());
        app.unmount();
    }

    #[tokio::test]
    async fn test_mount_rejects_zero_interval() {
        let mut app = App::new(&Config::default(), None);
        assert!(app.mount(Simulator::new(Duration::ZERO)).is_err());
        assert!(!app.is_mounted());
    }
}

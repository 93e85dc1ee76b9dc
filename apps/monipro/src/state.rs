//! Dashboard view state
//!
//! [`DashboardState`] is the single owner of everything the renderers show.
//! It is replaced field-by-field on each tick and handed to renderers by
//! shared reference.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::types::{MetricsSnapshot, ServerStatus, Severity, Trend};

/// Current view state
#[derive(Debug, Clone, Serialize)]
pub struct DashboardState {
    /// Clock captured at the last tick
    pub time: DateTime<Local>,
    /// Latest metrics snapshot
    pub metrics: MetricsSnapshot,
    /// Server list drawn at the last tick
    pub servers: Vec<ServerStatus>,
    /// Number of ticks applied since mount
    #[serde(skip)]
    pub ticks: u64,
}

/// A percentage card with a severity-colored bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub title: &'static str,
    pub percent: u8,
    pub severity: Severity,
}

impl MetricCard {
    fn new(title: &'static str, percent: u8) -> Self {
        Self {
            title,
            percent,
            severity: Severity::from(percent),
        }
    }

    pub fn value(&self) -> String {
        format!("{}%", self.percent)
    }
}

/// A headline number with a description and trend arrow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
    pub description: &'static str,
    pub trend: Trend,
}

impl DashboardState {
    /// State before the first tick: zeroed metrics
    pub fn new(servers: Vec<ServerStatus>, time: DateTime<Local>) -> Self {
        Self {
            time,
            metrics: MetricsSnapshot::default(),
            servers,
            ticks: 0,
        }
    }

    /// Replace the whole view with one tick's worth of data
    pub fn apply_tick(
        &mut self,
        metrics: MetricsSnapshot,
        servers: Vec<ServerStatus>,
        time: DateTime<Local>,
    ) {
        self.metrics = metrics;
        self.servers = servers;
        self.time = time;
        self.ticks += 1;
    }

    /// Clock text, e.g. "14:03:09"
    pub fn clock(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }

    pub fn metric_cards(&self) -> [MetricCard; 4] {
        let m = &self.metrics;
        [
            MetricCard::new("CPU Usage", m.cpu_percent),
            MetricCard::new("Memory Usage", m.memory_percent),
            MetricCard::new("Disk Usage", m.disk_percent),
            MetricCard::new("Network", m.network_percent),
        ]
    }

    pub fn summary_cards(&self) -> [SummaryCard; 3] {
        let m = &self.metrics;
        [
            SummaryCard {
                title: "System Uptime",
                value: format!("{}%", m.uptime_percent),
                description: "Last 30 days",
                trend: Trend::Up,
            },
            SummaryCard {
                title: "Active Servers",
                value: m.active_servers.to_string(),
                description: "Online and healthy",
                trend: Trend::Neutral,
            },
            SummaryCard {
                title: "Active Alerts",
                value: m.active_alerts.to_string(),
                description: "Requiring attention",
                trend: Trend::for_alerts(m.active_alerts),
            },
        ]
    }
}

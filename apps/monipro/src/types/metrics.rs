//! Metrics snapshot type

use serde::{Deserialize, Serialize};

/// One complete set of simulated metric values at one tick
///
/// The default value (all zeros) is what the dashboard shows before the
/// first tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// CPU usage percentage, 0..100
    pub cpu_percent: u8,
    /// Memory usage percentage, 0..100
    pub memory_percent: u8,
    /// Disk usage percentage, 0..100
    pub disk_percent: u8,
    /// Network utilization percentage, 0..100
    pub network_percent: u8,
    /// Uptime over the last 30 days, as a whole percentage
    pub uptime_percent: u8,
    /// Number of servers reported as active, 5..8
    pub active_servers: u8,
    /// Number of alerts requiring attention, 0..5
    pub active_alerts: u8,
}

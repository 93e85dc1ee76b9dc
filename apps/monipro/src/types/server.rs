//! Server roster types

use serde::{Deserialize, Serialize};

/// Health of a single server row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerHealth {
    Online,
    Warning,
    /// Displayable, but never produced by the simulated draw
    Offline,
}

impl ServerHealth {
    pub fn label(&self) -> &'static str {
        match self {
            ServerHealth::Online => "online",
            ServerHealth::Warning => "warning",
            ServerHealth::Offline => "offline",
        }
    }

    /// Status glyph used in list rows
    pub fn icon(&self) -> &'static str {
        match self {
            ServerHealth::Online => "●",
            ServerHealth::Warning => "▲",
            ServerHealth::Offline => "✕",
        }
    }
}

/// One row of the server status list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    /// Display name, e.g. "Server 3"
    pub name: String,
    /// Current health
    pub health: ServerHealth,
    /// Minutes since the server was last checked, 1..=10
    pub last_checked_minutes: u8,
}

impl ServerStatus {
    /// Human-readable age, e.g. "4 min ago"
    pub fn last_checked(&self) -> String {
        format!("{} min ago", self.last_checked_minutes)
    }
}

//! Trend indicator for summary cards

use serde::{Deserialize, Serialize};

/// Alert count above which the alerts card trends down
pub const ALERT_TREND_LIMIT: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    /// Trend shown on the alerts card
    pub fn for_alerts(active_alerts: u8) -> Self {
        if active_alerts > ALERT_TREND_LIMIT {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Neutral => "→",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_trend() {
        assert_eq!(Trend::for_alerts(0), Trend::Neutral);
        assert_eq!(Trend::for_alerts(2), Trend::Neutral);
        assert_eq!(Trend::for_alerts(3), Trend::Down);
        assert_eq!(Trend::for_alerts(4), Trend::Down);
    }
}

//! Line-oriented renderers for non-interactive output

use monipro_common::{json_line, json_pretty, text_block, Result};

use crate::state::DashboardState;

/// Render the state as an aligned text block
pub fn render_text(title: &str, state: &DashboardState) -> String {
    let mut rows: Vec<(String, String)> = Vec::new();

    for card in state.metric_cards() {
        rows.push((
            card.title.to_string(),
            format!("{:>4}  [{}]", card.value(), card.severity.label()),
        ));
    }
    for card in state.summary_cards() {
        rows.push((
            card.title.to_string(),
            format!("{:>4}  {} {}", card.value, card.trend.arrow(), card.description),
        ));
    }
    for server in &state.servers {
        rows.push((
            server.name.clone(),
            format!(
                "{} {:<8} {}",
                server.health.icon(),
                server.health.label(),
                server.last_checked()
            ),
        ));
    }

    text_block(&format!("{} @ {}", title, state.clock()), &rows)
}

/// Render the state as a single JSON line
pub fn render_json(state: &DashboardState) -> Result<String> {
    json_line(state)
}

/// Render the state as indented JSON, for one-off snapshots
pub fn render_json_pretty(state: &DashboardState) -> Result<String> {
    json_pretty(state)
}

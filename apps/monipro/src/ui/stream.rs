//! Non-interactive loop writing one record per tick

use std::io::Write;

use monipro_common::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use super::plain::{render_json, render_text};
use crate::app::{App, Message};

/// Record format for streamed output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamFormat {
    Text,
    Json,
}

/// Write the state after every tick until the channel closes, Ctrl+C is
/// pressed, or `limit` ticks have been written
pub async fn run<W: Write>(
    app: &mut App,
    mut ticks: UnboundedReceiver<Message>,
    format: StreamFormat,
    limit: Option<u64>,
    out: &mut W,
) -> Result<()> {
    let mut written = 0u64;
    let interrupted = tokio::signal::ctrl_c();
    tokio::pin!(interrupted);

    while app.is_running() && limit.map_or(true, |limit| written < limit) {
        tokio::select! {
            message = ticks.recv() => match message {
                Some(message) => {
                    app.update(message);
                    write_record(app, format, out)?;
                    written += 1;
                }
                None => app.update(Message::Quit),
            },
            _ = &mut interrupted => {
                tracing::info!("Interrupted");
                app.update(Message::Quit);
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Write the current state as a single record
pub fn write_record<W: Write>(app: &App, format: StreamFormat, out: &mut W) -> Result<()> {
    match format {
        StreamFormat::Text => writeln!(out, "{}\n", render_text(app.title(), app.state()))?,
        StreamFormat::Json => writeln!(out, "{}", render_json(app.state())?)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::types::MetricsSnapshot;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_drains_queued_ticks_until_channel_closes() {
        let mut app = App::new(&Config::default(), Some(1));
        let (tx, rx) = mpsc::unbounded_channel();
        for cpu in [10, 55, 90] {
            let snapshot = MetricsSnapshot {
                cpu_percent: cpu,
                ..Default::default()
            };
            tx.send(Message::Tick(snapshot)).unwrap();
        }
        drop(tx);

        let mut out = Vec::new();
        run(&mut app, rx, StreamFormat::Json, None, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert_eq!(app.state().ticks, 3);
        assert_eq!(app.state().metrics.cpu_percent, 90);
        assert!(!app.is_running());
    }

    #[tokio::test]
    async fn test_limit_stops_before_channel_is_drained() {
        let mut app = App::new(&Config::default(), Some(1));
        let (tx, rx) = mpsc::unbounded_channel();
        for _ in 0..4 {
            tx.send(Message::Tick(MetricsSnapshot::default())).unwrap();
        }

        let mut out = Vec::new();
        run(&mut app, rx, StreamFormat::Text, Some(2), &mut out)
            .await
            .unwrap();

        assert_eq!(app.state().ticks, 2);
        assert_eq!(String::from_utf8(out).unwrap().matches("MoniPro @ ").count(), 2);
    }
}

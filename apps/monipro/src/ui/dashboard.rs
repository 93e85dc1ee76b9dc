//! Full-screen dashboard widgets

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use super::theme::CatppuccinTheme;
use crate::state::{DashboardState, MetricCard, SummaryCard};
use crate::types::ServerStatus;

/// Draw the whole dashboard into the frame
pub fn draw(f: &mut Frame, title: &str, state: &DashboardState, theme: &CatppuccinTheme) {
    f.render_widget(
        Block::default().style(Style::default().bg(theme.base)),
        f.size(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Metric cards
            Constraint::Length(5), // Summary cards
            Constraint::Min(7),    // Server list
            Constraint::Length(1), // Footer
        ])
        .split(f.size());

    render_header(f, chunks[0], title, state, theme);
    render_metric_cards(f, chunks[1], state, theme);
    render_summary_cards(f, chunks[2], state, theme);
    render_servers(f, chunks[3], &state.servers, theme);
    render_footer(f, chunks[4], theme);
}

fn card_block<'a>(title: &'a str, theme: &CatppuccinTheme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.surface1))
        .title(Span::styled(title, Style::default().fg(theme.subtext0)))
        .style(Style::default().bg(theme.mantle))
}

fn header_rule(theme: &CatppuccinTheme) -> Block<'static> {
    Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.surface0))
}

fn render_header(
    f: &mut Frame,
    area: Rect,
    title: &str,
    state: &DashboardState,
    theme: &CatppuccinTheme,
) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let name = Paragraph::new(Line::from(vec![
        Span::styled("◆ ", Style::default().fg(theme.blue)),
        Span::styled(
            title,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(header_rule(theme));
    f.render_widget(name, halves[0]);

    let clock = Paragraph::new(Line::from(vec![
        Span::styled("◷ ", Style::default().fg(theme.subtext0)),
        Span::styled(state.clock(), Style::default().fg(theme.subtext0)),
    ]))
    .alignment(Alignment::Right)
    .block(header_rule(theme));
    f.render_widget(clock, halves[1]);
}

fn render_metric_cards(f: &mut Frame, area: Rect, state: &DashboardState, theme: &CatppuccinTheme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (card, column) in state.metric_cards().iter().zip(columns.iter()) {
        render_metric_card(f, *column, card, theme);
    }
}

fn render_metric_card(f: &mut Frame, area: Rect, card: &MetricCard, theme: &CatppuccinTheme) {
    let gauge = Gauge::default()
        .block(card_block(card.title, theme))
        .gauge_style(
            Style::default()
                .fg(theme.severity(card.severity))
                .bg(theme.surface0),
        )
        .percent(u16::from(card.percent.min(100)))
        .label(Span::styled(
            card.value(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ));
    f.render_widget(gauge, area);
}

fn render_summary_cards(f: &mut Frame, area: Rect, state: &DashboardState, theme: &CatppuccinTheme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (card, column) in state.summary_cards().iter().zip(columns.iter()) {
        render_summary_card(f, *column, card, theme);
    }
}

fn render_summary_card(f: &mut Frame, area: Rect, card: &SummaryCard, theme: &CatppuccinTheme) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                card.value.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(card.trend.arrow(), Style::default().fg(theme.trend(card.trend))),
        ]),
        Line::from(Span::styled(
            card.description,
            Style::default().fg(theme.subtext0),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(card_block(card.title, theme));
    f.render_widget(paragraph, area);
}

fn render_servers(f: &mut Frame, area: Rect, servers: &[ServerStatus], theme: &CatppuccinTheme) {
    // Borders take two columns; the age is right-aligned in what remains.
    let inner_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = servers
        .iter()
        .map(|server| {
            let color = theme.health(server.health);
            let left = format!("{}  {:<10}", server.name, server.health.label());
            let age = server.last_checked();
            let gap = inner_width.saturating_sub(left.chars().count() + age.chars().count() + 2);

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", server.health.icon()), Style::default().fg(color)),
                Span::styled(server.name.clone(), Style::default().fg(theme.text)),
                Span::raw("  "),
                Span::styled(
                    format!("{:<10}", server.health.label()),
                    Style::default().fg(color),
                ),
                Span::raw(" ".repeat(gap)),
                Span::styled(age, Style::default().fg(theme.subtext0)),
            ]))
        })
        .collect();

    let list = List::new(items).block(card_block("System Status", theme));
    f.render_widget(list, area);
}

fn render_footer(f: &mut Frame, area: Rect, theme: &CatppuccinTheme) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            "[q]",
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" quit", Style::default().fg(theme.subtext0)),
    ]));
    f.render_widget(footer, area);
}

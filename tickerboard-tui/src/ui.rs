//! Top-level UI layout — ticker table with status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, StatusLevel};
use crate::ticker_table::TickerTablePanel;

/// Draw the entire UI and remember the table layout for mouse input.
pub fn draw(f: &mut Frame, app: &mut App) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let panel = TickerTablePanel::new(&app.view, app.selected, &app.theme);
    let layout = panel.layout(chunks[0]);
    f.render_widget(panel, chunks[0]);
    app.layout = layout;

    render_status_bar(f, chunks[1], app);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let muted = Style::default().fg(app.theme.muted);
    let mut spans = vec![
        Span::styled(" ←/→ filter  ↑/↓ select  Enter trade  q quit", muted),
        Span::raw(" | "),
    ];

    if let Some((msg, level)) = &app.status_message {
        let color = match level {
            StatusLevel::Info => app.theme.accent,
            StatusLevel::Warning => app.theme.warning,
        };
        spans.push(Span::styled(msg.as_str(), Style::default().fg(color)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

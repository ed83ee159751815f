/*
[INPUT]:  LogBufferHandle snapshots and the active tracing filter
[OUTPUT]: Logs tab with level-coloured lines
[POS]:    TUI UI logs panel rendering
[UPDATE]: When log panel layout or the log line format changes
*/

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::LogBufferHandle;
use crate::tui::runtime::{border_style, error_style};

pub(in crate::tui) fn draw_logs(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    buffer: &LogBufferHandle,
    filter: &str,
) {
    let lines = match buffer.lock() {
        Ok(guard) => guard.snapshot(),
        Err(_) => vec!["ERROR log buffer unavailable".to_string()],
    };
    // newest lines stay visible
    let available = area.height.saturating_sub(2) as usize;
    let start = lines.len().saturating_sub(available);

    let text = lines[start..]
        .iter()
        .map(|line| Line::from(Span::styled(line.clone(), level_style(line))))
        .collect::<Vec<_>>();
    let title = format!("Logs [{filter}] {} line(s)", lines.len());
    let widget = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(title),
    );
    frame.render_widget(widget, area);
}

/// Colour for a formatted tracing line, keyed on its level token
fn level_style(line: &str) -> Style {
    let level = line
        .split_whitespace()
        .find(|word| matches!(*word, "ERROR" | "WARN" | "INFO" | "DEBUG" | "TRACE"));
    match level {
        Some("ERROR") => error_style(),
        Some("WARN") => Style::default().fg(Color::Yellow),
        Some("DEBUG") | Some("TRACE") => Style::default().fg(Color::DarkGray),
        _ => Style::default(),
    }
}

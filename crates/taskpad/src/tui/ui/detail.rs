/*
[INPUT]:  Selected task block and its raw view
[OUTPUT]: Detail panel rendered into Ratatui frame
[POS]:    TUI UI task detail rendering
[UPDATE]: When task fields shown in detail change
*/

use chrono::{DateTime, NaiveDateTime};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::app::AppState;
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_task_detail(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &AppState,
) {
    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let lines = match app.selected_task() {
        Some((block, view)) => {
            let mut lines = vec![
                Line::from(Span::styled(block.title.clone(), Style::default().add_modifier(Modifier::BOLD))),
                Line::from(""),
            ];
            if !block.description.is_empty() {
                lines.push(Line::from(block.description.clone()));
                lines.push(Line::from(""));
            }
            lines.push(Line::from(block.priority_line.clone()));
            lines.push(Line::from(block.status_line.clone()));
            lines.push(Line::from(block.due_line.clone()));

            if let Some(view) = view {
                lines.push(Line::from(""));
                let extra = [
                    ("ID", view.id.clone()),
                    ("Created", view.created_at.as_deref().map(format_timestamp)),
                    ("Updated", view.updated_at.as_deref().map(format_timestamp)),
                ];
                for (name, value) in extra {
                    if let Some(value) = value {
                        lines.push(Line::from(vec![
                            Span::styled(format!("{name}: "), label),
                            Span::raw(value),
                        ]));
                    }
                }
            }
            lines
        }
        None => vec![Line::from("No task selected")],
    };

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Detail"),
    );
    frame.render_widget(widget, area);
}

/// Shorten ISO-8601 timestamps to minutes; anything else is shown as-is
fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

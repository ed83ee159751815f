/*
[INPUT]:  Notice message
[OUTPUT]: Blocking notice popup
[POS]:    TUI UI overlay drawn above everything else
[UPDATE]: When notice presentation changes
*/

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::runtime::error_style;

pub(in crate::tui) fn draw_notice(frame: &mut ratatui::Frame, area: Rect, message: &str) {
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", Style::default().add_modifier(Modifier::BOLD))),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(error_style())
                .title("Notice"),
        );
    frame.render_widget(widget, area);
}

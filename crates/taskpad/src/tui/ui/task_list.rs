/*
[INPUT]:  Board display model and list selection
[OUTPUT]: Task list rendered into Ratatui frame
[POS]:    TUI UI task list rendering
[UPDATE]: When list item layout changes
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use taskpad_client::DisplayModel;
use taskpad_client::render::{EMPTY_TEXT, LOADING_TEXT};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::app::AppState;
use crate::tui::runtime::{border_style, error_style};

pub(in crate::tui) fn draw_task_list(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &mut AppState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Tasks");
    // borders plus the highlight symbol
    let width = area.width.saturating_sub(4) as usize;

    let items = match app.board.display() {
        DisplayModel::Loading => vec![ListItem::new(LOADING_TEXT)],
        DisplayModel::Empty => vec![ListItem::new(EMPTY_TEXT)],
        DisplayModel::Error(_) => {
            let text = app.board.display().to_text();
            let widget = Paragraph::new(Span::styled(text, error_style()))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(widget, area);
            return;
        }
        DisplayModel::Tasks(blocks) => blocks
            .iter()
            .map(|task| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        fit_width(&task.title, width),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        fit_width(&task.meta_line(), width),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect(),
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Cut `text` to at most `width` terminal columns, ending in an ellipsis when cut
pub(in crate::tui) fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/*
[INPUT]:  Current tab and base URL
[OUTPUT]: Header and tab bar widgets
[POS]:    TUI UI layout helpers
[UPDATE]: When tabs or header content change
*/

use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use taskpad_client::ClientConfig;

use crate::tui::app::Tab;
use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_header(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, base_url: &str) {
    let endpoint = ClientConfig::new(base_url).tasks_url();
    let line = Line::from(vec![Span::styled(" API ", header_style()), Span::raw(format!(" {endpoint}"))]);
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Taskpad"),
    );
    frame.render_widget(widget, area);
}

pub(in crate::tui) fn draw_tabs(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    current_tab: Tab,
) {
    let titles = vec![Line::from("Tasks"), Line::from("Logs")];
    let selected = match current_tab {
        Tab::Tasks => 0,
        Tab::Logs => 1,
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Tabs"),
        )
        .highlight_style(header_style())
        .select(selected);

    frame.render_widget(tabs, area);
}

/*
[INPUT]:  App configuration, task client, log buffer, crossterm input
[OUTPUT]: Ratatui-based TUI run loop, rendering, and log buffer utilities
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::fmt::MakeWriter;

use taskpad::{AppConfig, ReloadTicket, TaskBoard};
use taskpad_client::{TaskClient, TaskError, TaskList};

use super::app::{ActiveModal, AppState, Tab};
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::modal::draw_modal;
use super::ui::*;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub const LOG_BUFFER_CAPACITY: usize = 2000;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: String,
}

impl LogWriter {
    fn push(&self, line: String) -> io::Result<()> {
        let mut guard = self
            .buffer
            .lock()
            .map_err(|_| io::Error::other("log buffer lock poisoned"))?;
        guard.push_line(line);
        Ok(())
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let chunk = String::from_utf8_lossy(buf);
        self.partial.push_str(&chunk);
        while let Some(pos) = self.partial.find('\n') {
            let line = self.partial[..pos].trim_end_matches('\r').to_string();
            self.partial = self.partial[pos + 1..].to_string();
            self.push(line)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            self.push(line)?;
        }
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: String::new(),
        }
    }
}

/// Everything the run loop reacts to
pub(super) enum UiEvent {
    Input(CrosstermEvent),
    TasksLoaded {
        ticket: ReloadTicket,
        result: Result<TaskList, TaskError>,
    },
    TaskCreated(Result<Option<String>, TaskError>),
}

pub(super) type UiEventSender = mpsc::UnboundedSender<UiEvent>;

pub async fn run_tui_with_log(
    config: &AppConfig,
    client: TaskClient,
    log_buffer: LogBufferHandle,
) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();
    let input_tx = event_tx.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = input_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    let board = TaskBoard::new(config.base_url.clone()).with_form(config.initial_form());
    let mut app = AppState::new(board, client, log_buffer, config.log_level.clone(), event_tx);
    info!(base_url = %app.board.base_url(), "starting taskpad tui");
    app.trigger_reload();

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        should_quit = handle_key_event(&mut app, key.code);
                    }
                    Some(UiEvent::TasksLoaded { ticket, result }) => app.on_tasks_loaded(&ticket, result),
                    Some(UiEvent::TaskCreated(result)) => app.on_task_created(result),
                    Some(UiEvent::Input(_)) => {}
                    None => should_quit = true,
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &mut app))?;
    }

    input_shutdown.cancel();
    info!("taskpad tui closed");
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(area);

    draw_header(frame, layout[0], app.board.base_url());

    match app.current_tab {
        Tab::Tasks => {
            let middle = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(layout[1]);
            draw_task_list(frame, middle[0], app);
            draw_task_detail(frame, middle[1], app);
        }
        Tab::Logs => {
            draw_logs(frame, layout[1], &app.log_buffer, &app.log_filter);
        }
    }

    draw_tabs(frame, layout[2], app.current_tab);
    draw_footer(frame, layout[3], app);

    if let Some(active_modal) = app.active_modal.as_ref() {
        let (modal, modal_area) = match active_modal {
            ActiveModal::CreateTask(modal) => {
                (modal.to_modal(app.board.form()), centered_rect(area, 60, 50))
            }
            ActiveModal::BaseUrl(modal) => (modal.to_modal(), centered_rect(area, 60, 25)),
        };
        draw_modal(frame, modal_area, &modal);
    }

    if let Some(notice) = app.board.notice() {
        draw_notice(frame, centered_rect(area, 50, 25), &notice.message());
    }
}

pub(super) fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line1 = Line::from(vec![
        Span::styled("[Up/Down]", key_style),
        Span::raw(" Select  "),
        Span::styled("[Tab/l]", key_style),
        Span::raw(" Switch  "),
        Span::styled("[1/2]", key_style),
        Span::raw(" Tabs  "),
        Span::styled("[n]", key_style),
        Span::raw(" New task  "),
        Span::styled("[b]", key_style),
        Span::raw(" Base URL"),
    ]);
    let line2 = Line::from(vec![
        Span::styled("[r]", key_style),
        Span::raw(" Reload  "),
        Span::styled("[q]", key_style),
        Span::raw(" Quit  "),
        Span::raw(format!("Status: {}", app.status_message)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![line1, line2]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn error_style() -> Style {
    Style::default()
        .fg(Color::LightRed)
        .add_modifier(Modifier::BOLD)
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/*
[INPUT]:  Task board, task client, log buffer, UI event sender
[OUTPUT]: AppState helpers for TUI rendering and background list/create calls
[POS]:    TUI app state
[UPDATE]: When adding tabs, modals, or background operations
*/

use ratatui::widgets::ListState;
use tracing::warn;

use taskpad::{ReloadTicket, TaskBoard};
use taskpad_client::{DisplayModel, TaskBlock, TaskClient, TaskError, TaskList, TaskView};

use super::runtime::{LogBufferHandle, UiEvent, UiEventSender};
use super::ui::modal::{BaseUrlModal, CreateTaskModal};

pub(super) enum ActiveModal {
    CreateTask(CreateTaskModal),
    BaseUrl(BaseUrlModal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tab {
    Tasks,
    Logs,
}

pub(super) struct AppState {
    pub(super) board: TaskBoard,
    pub(super) log_buffer: LogBufferHandle,
    /// Tracing filter the log buffer was set up with
    pub(super) log_filter: String,
    pub(super) list_state: ListState,
    pub(super) current_tab: Tab,
    pub(super) active_modal: Option<ActiveModal>,
    pub(super) status_message: String,
    client: TaskClient,
    events: UiEventSender,
}

impl AppState {
    pub(super) fn new(
        board: TaskBoard,
        client: TaskClient,
        log_buffer: LogBufferHandle,
        log_filter: String,
        events: UiEventSender,
    ) -> Self {
        Self {
            board,
            log_buffer,
            log_filter,
            list_state: ListState::default(),
            current_tab: Tab::Tasks,
            active_modal: None,
            status_message: "Ready".to_string(),
            client,
            events,
        }
    }

    /// Issue a list fetch in the background
    pub(super) fn trigger_reload(&mut self) {
        let ticket = self.board.begin_reload();
        self.status_message = "loading tasks".to_string();
        self.spawn_reload(ticket);
    }

    fn spawn_reload(&self, ticket: ReloadTicket) {
        let client = self.client.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = client.list_tasks(&ticket.config).await;
            if events.send(UiEvent::TasksLoaded { ticket, result }).is_err() {
                warn!("ui closed before task list arrived");
            }
        });
    }

    /// Validate the form and send the create request in the background.
    ///
    /// Every valid submit gets its own request, even while earlier ones are
    /// still pending.
    pub(super) fn submit_create(&mut self) {
        let Some(ticket) = self.board.begin_create() else {
            return;
        };

        self.status_message = format!("creating task: {}", ticket.request.title);
        let client = self.client.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = client.create_task(&ticket.config, &ticket.request).await;
            if events.send(UiEvent::TaskCreated(result)).is_err() {
                warn!("ui closed before create finished");
            }
        });
    }

    pub(super) fn on_tasks_loaded(&mut self, ticket: &ReloadTicket, result: Result<TaskList, TaskError>) {
        if !self.board.finish_reload(ticket, result) {
            return;
        }
        self.sync_selection();
        self.status_message = status_label(self.board.display());
    }

    pub(super) fn on_task_created(&mut self, result: Result<Option<String>, TaskError>) {
        let id = match &result {
            Ok(id) => id.clone().unwrap_or_else(|| "-".to_string()),
            Err(_) => String::new(),
        };

        match self.board.finish_create(result) {
            Some(ticket) => {
                self.spawn_reload(ticket);
                if matches!(self.active_modal, Some(ActiveModal::CreateTask(_))) {
                    self.active_modal = None;
                }
                self.status_message = format!("task created: {id}");
            }
            None => {
                self.status_message = "create failed".to_string();
            }
        }
    }

    pub(super) fn open_create_task(&mut self) {
        self.active_modal = Some(ActiveModal::CreateTask(CreateTaskModal::new(self.board.form())));
    }

    pub(super) fn open_base_url(&mut self) {
        self.active_modal = Some(ActiveModal::BaseUrl(BaseUrlModal::new(self.board.base_url())));
    }

    /// The next list or create call uses the new value; nothing is fetched now
    pub(super) fn apply_base_url(&mut self, base_url: String) {
        self.status_message = format!("base URL set to {base_url}; press r to reload");
        self.board.set_base_url(base_url);
    }

    pub(super) fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub(super) fn next_tab(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Tasks => Tab::Logs,
            Tab::Logs => Tab::Tasks,
        };
    }

    pub(super) fn set_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    pub(super) fn selected_task(&self) -> Option<(&TaskBlock, Option<&TaskView>)> {
        let idx = self.list_state.selected()?;
        let block = self.board.display().blocks().get(idx)?;
        Some((block, self.board.tasks().get(idx)))
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let len = self.board.display().blocks().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (len - 1) as isize) as usize;
        self.list_state.select(Some(next));
    }

    fn sync_selection(&mut self) {
        let len = self.board.display().blocks().len();
        if len == 0 {
            self.list_state.select(None);
        } else if let Some(selected) = self.list_state.selected() {
            if selected >= len {
                self.list_state.select(Some(len - 1));
            }
        } else {
            self.list_state.select(Some(0));
        }
    }
}

fn status_label(display: &DisplayModel) -> String {
    match display {
        DisplayModel::Loading => "loading tasks".to_string(),
        DisplayModel::Empty => "no tasks".to_string(),
        DisplayModel::Tasks(blocks) => format!("{} task(s) loaded", blocks.len()),
        DisplayModel::Error(_) => "load failed".to_string(),
    }
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use serde_json::json;
    use taskpad_client::TaskForm;
    use tokio::sync::mpsc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::tui::runtime::LogBuffer;

    pub(in crate::tui) fn test_app() -> (AppState, mpsc::UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let board = TaskBoard::new("http://127.0.0.1:9");
        let client = TaskClient::new().expect("client init");
        let buffer = Arc::new(Mutex::new(LogBuffer::new(16)));
        (AppState::new(board, client, buffer, "info".to_string(), tx), rx)
    }

    fn list(value: serde_json::Value) -> Result<TaskList, TaskError> {
        Ok(TaskList::from_json(value))
    }

    #[test]
    fn test_selection_follows_loaded_list() {
        let (mut app, _rx) = test_app();
        let ticket = app.board.begin_reload();
        app.on_tasks_loaded(&ticket, list(json!([{"title": "a"}, {"title": "b"}])));
        assert_eq!(app.list_state.selected(), Some(0));

        app.move_selection(5);
        assert_eq!(app.list_state.selected(), Some(1));
        assert_eq!(app.selected_task().map(|(block, _)| block.title.as_str()), Some("b"));

        let ticket = app.board.begin_reload();
        app.on_tasks_loaded(&ticket, list(json!([{"title": "only"}])));
        assert_eq!(app.list_state.selected(), Some(0));

        let ticket = app.board.begin_reload();
        app.on_tasks_loaded(&ticket, list(json!([])));
        assert_eq!(app.list_state.selected(), None);
        assert_eq!(app.board.display(), &DisplayModel::Empty);
    }

    #[test]
    fn test_blank_create_spawns_nothing() {
        let (mut app, mut rx) = test_app();
        app.submit_create();
        assert!(app.board.notice().is_some());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_create_success_closes_modal_and_reloads() {
        let (mut app, mut rx) = test_app();
        *app.board.form_mut() = TaskForm {
            title: "x".to_string(),
            ..TaskForm::default()
        };
        app.open_create_task();

        let before = app.board.latest_generation();
        app.on_task_created(Ok(Some("42".to_string())));

        assert!(app.active_modal.is_none());
        assert_eq!(app.status_message, "task created: 42");
        assert_eq!(app.board.latest_generation(), before + 1);

        match rx.recv().await {
            Some(UiEvent::TasksLoaded { ticket, result }) => {
                app.on_tasks_loaded(&ticket, result);
                assert!(app.board.form().title.is_empty());
            }
            _ => panic!("Expected reload result"),
        }
    }

    #[tokio::test]
    async fn test_repeated_save_sends_every_create() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "n"})))
            .expect(2)
            .mount(&server)
            .await;

        let (mut app, mut rx) = test_app();
        app.board.set_base_url(server.uri());
        *app.board.form_mut() = TaskForm {
            title: "x".to_string(),
            ..TaskForm::default()
        };

        app.submit_create();
        app.submit_create();
        assert!(app.board.notice().is_none());

        let mut created = 0;
        while created < 2 {
            match rx.recv().await {
                Some(UiEvent::TaskCreated(result)) => {
                    assert_eq!(result.expect("create accepted").as_deref(), Some("n"));
                    created += 1;
                }
                Some(_) => {}
                None => panic!("Event channel closed"),
            }
        }
    }

    #[test]
    fn test_create_failure_keeps_modal_open() {
        let (mut app, _rx) = test_app();
        app.open_create_task();
        app.on_task_created(Err(TaskError::CreateFailed {
            status: reqwest::StatusCode::BAD_REQUEST,
        }));

        assert!(matches!(app.active_modal, Some(ActiveModal::CreateTask(_))));
        assert!(app.board.notice().is_some());
        assert_eq!(app.status_message, "create failed");
    }

    #[test]
    fn test_base_url_change_does_not_fetch() {
        let (mut app, mut rx) = test_app();
        let generation = app.board.latest_generation();
        app.apply_base_url("http://elsewhere".to_string());
        assert_eq!(app.board.base_url(), "http://elsewhere");
        assert_eq!(app.board.latest_generation(), generation);
        assert!(rx.try_recv().is_err());
    }
}

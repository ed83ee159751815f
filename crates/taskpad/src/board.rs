/*
[INPUT]:  Base URL field, create form values, list/create results
[OUTPUT]: Display model, blocking notices, reload/create tickets
[POS]:    Controller layer - board state shared by the CLI and the TUI
[UPDATE]: When list/create flow or the stale-result policy changes
*/

use taskpad_client::render::render_task_list;
use taskpad_client::{
    ClientConfig, DisplayModel, NewTaskRequest, TaskApi, TaskError, TaskForm, TaskList, TaskView,
    ValidationError,
};
use tracing::{debug, info, warn};

/// Blocking message the user has to dismiss
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Validation(ValidationError),
    CreateFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Validation(err) => err.to_string(),
            Notice::CreateFailed(reason) => DisplayModel::error_text(reason),
        }
    }
}

/// Handle for one list fetch; the config is captured when it is issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadTicket {
    pub generation: u64,
    pub config: ClientConfig,
}

/// Handle for one create request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTicket {
    pub request: NewTaskRequest,
    pub config: ClientConfig,
}

/// What happened to a create attempt driven by [`TaskBoard::create`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Invalid(ValidationError),
    Failed(String),
    Created { id: Option<String> },
}

/// State behind the task display and the create form.
///
/// List fetches are stamped with a generation number. Only the newest
/// generation may write the display, so a slow fetch that was superseded
/// by a later reload is dropped instead of overwriting newer data.
#[derive(Debug)]
pub struct TaskBoard {
    base_url: String,
    form: TaskForm,
    display: DisplayModel,
    tasks: Vec<TaskView>,
    notice: Option<Notice>,
    latest_generation: u64,
    clear_form_after: Option<u64>,
}

impl TaskBoard {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            form: TaskForm::default(),
            display: DisplayModel::Loading,
            tasks: Vec::new(),
            notice: None,
            latest_generation: 0,
            clear_form_after: None,
        }
    }

    pub fn with_form(mut self, form: TaskForm) -> Self {
        self.form = form;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Snapshot of the base URL as it is right now
    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url.clone())
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    pub fn display(&self) -> &DisplayModel {
        &self.display
    }

    /// Raw views behind the current display, same order as its blocks
    pub fn tasks(&self) -> &[TaskView] {
        &self.tasks
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest_generation
    }

    /// Start a list fetch: show the loading indicator and hand out a ticket
    pub fn begin_reload(&mut self) -> ReloadTicket {
        self.latest_generation += 1;
        self.display = DisplayModel::Loading;
        ReloadTicket {
            generation: self.latest_generation,
            config: self.config(),
        }
    }

    /// Apply a finished list fetch.
    ///
    /// Returns `false` when a newer fetch was issued in the meantime and the
    /// result was discarded.
    pub fn finish_reload(&mut self, ticket: &ReloadTicket, result: Result<TaskList, TaskError>) -> bool {
        if self.clear_form_after == Some(ticket.generation) {
            self.form.clear_text_fields();
            self.clear_form_after = None;
        }

        if ticket.generation != self.latest_generation {
            debug!(
                generation = ticket.generation,
                latest = self.latest_generation,
                "discarding superseded task list"
            );
            return false;
        }

        match result {
            Ok(list) => {
                self.display = render_task_list(&list);
                self.tasks = match list {
                    TaskList::Tasks(tasks) => tasks,
                    TaskList::NotAList => Vec::new(),
                };
            }
            Err(err) => {
                warn!(status = ?err.status(), error = %err, "task list failed");
                self.display = DisplayModel::error(&err);
                self.tasks.clear();
            }
        }
        true
    }

    /// Validate the form and build the create request.
    ///
    /// A blank title raises a validation notice and yields `None`; nothing
    /// should be sent in that case.
    pub fn begin_create(&mut self) -> Option<CreateTicket> {
        match self.form.to_request() {
            Ok(request) => Some(CreateTicket {
                request,
                config: self.config(),
            }),
            Err(err) => {
                debug!(error = %err, "create blocked by validation");
                self.notice = Some(Notice::Validation(err));
                None
            }
        }
    }

    /// Apply a finished create.
    ///
    /// On success returns the ticket of the one dependent reload the caller
    /// must run; the text fields are cleared once that reload finishes. On
    /// failure the form is left as typed and a notice is raised.
    pub fn finish_create(&mut self, result: Result<Option<String>, TaskError>) -> Option<ReloadTicket> {
        match result {
            Ok(id) => {
                info!(id = id.as_deref().unwrap_or("-"), "create accepted; reloading");
                let ticket = self.begin_reload();
                self.clear_form_after = Some(ticket.generation);
                Some(ticket)
            }
            Err(err) => {
                warn!(status = ?err.status(), error = %err, "create failed");
                self.notice = Some(Notice::CreateFailed(err.to_string()));
                None
            }
        }
    }

    /// Run one list fetch to completion
    pub async fn reload<A: TaskApi + ?Sized>(&mut self, api: &A) -> bool {
        let ticket = self.begin_reload();
        let result = api.list_tasks(&ticket.config).await;
        self.finish_reload(&ticket, result)
    }

    /// Run one create to completion, including its dependent reload
    pub async fn create<A: TaskApi + ?Sized>(&mut self, api: &A) -> CreateOutcome {
        let Some(ticket) = self.begin_create() else {
            return CreateOutcome::Invalid(ValidationError::EmptyTitle);
        };

        let result = api.create_task(&ticket.config, &ticket.request).await;
        let outcome = match &result {
            Ok(id) => CreateOutcome::Created { id: id.clone() },
            Err(err) => CreateOutcome::Failed(err.to_string()),
        };

        if let Some(reload) = self.finish_create(result) {
            let list = api.list_tasks(&reload.config).await;
            self.finish_reload(&reload, list);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use taskpad_client::{TaskClient, TaskForm};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ok_list(value: serde_json::Value) -> Result<TaskList, TaskError> {
        Ok(TaskList::from_json(value))
    }

    fn filled_form() -> TaskForm {
        TaskForm {
            title: " Pay rent ".to_string(),
            description: " by transfer ".to_string(),
            priority: "1".to_string(),
            status: "IN_PROGRESS".to_string(),
            due_date: "2025-02-01".to_string(),
        }
    }

    #[test]
    fn test_newest_reload_wins() {
        let mut board = TaskBoard::new("http://x");
        let first = board.begin_reload();
        let second = board.begin_reload();
        assert_eq!(board.display(), &DisplayModel::Loading);

        assert!(board.finish_reload(&second, ok_list(json!([{"title": "new"}]))));
        assert!(!board.finish_reload(&first, ok_list(json!([{"title": "old"}]))));

        assert_eq!(board.display().blocks()[0].title, "new");
        assert_eq!(board.tasks()[0].title.as_deref(), Some("new"));
    }

    #[test]
    fn test_reload_ticket_snapshots_base_url() {
        let mut board = TaskBoard::new("http://one");
        let ticket = board.begin_reload();
        board.set_base_url("http://two");
        assert_eq!(ticket.config.base_url, "http://one");
        assert_eq!(board.begin_reload().config.base_url, "http://two");
    }

    #[test]
    fn test_failed_reload_replaces_list_with_error() {
        let mut board = TaskBoard::new("http://x");
        let ticket = board.begin_reload();
        board.finish_reload(&ticket, ok_list(json!([{"title": "A"}])));

        let ticket = board.begin_reload();
        let err = TaskError::LoadFailed {
            status: reqwest::StatusCode::BAD_GATEWAY,
        };
        board.finish_reload(&ticket, Err(err));

        assert_eq!(
            board.display(),
            &DisplayModel::Error("Failed to load tasks (HTTP 502 Bad Gateway)".to_string())
        );
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn test_blank_title_raises_notice() {
        let mut board = TaskBoard::new("http://x").with_form(TaskForm {
            title: "   ".to_string(),
            ..filled_form()
        });

        assert!(board.begin_create().is_none());
        assert_eq!(
            board.notice().map(Notice::message).as_deref(),
            Some("Please enter a task title.")
        );
        board.dismiss_notice();
        assert!(board.notice().is_none());
    }

    #[test]
    fn test_create_failure_keeps_form() {
        let mut board = TaskBoard::new("http://x").with_form(filled_form());
        let _ticket = board.begin_create().expect("valid form");
        let generation = board.latest_generation();

        let err = TaskError::CreateFailed {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert!(board.finish_create(Err(err)).is_none());

        assert_eq!(board.form(), &filled_form());
        assert_eq!(board.latest_generation(), generation);
        assert_eq!(
            board.notice().map(Notice::message).as_deref(),
            Some("Error: Failed to create task (HTTP 500 Internal Server Error)")
        );
    }

    #[test]
    fn test_form_cleared_after_dependent_reload_even_if_superseded() {
        let mut board = TaskBoard::new("http://x").with_form(filled_form());
        let _ticket = board.begin_create().expect("valid form");
        let reload = board.finish_create(Ok(None)).expect("dependent reload");

        // fields stay until the reload lands
        assert_eq!(board.form().title, " Pay rent ");

        let newer = board.begin_reload();
        assert!(!board.finish_reload(&reload, ok_list(json!([]))));
        assert!(board.form().title.is_empty());
        assert!(board.form().description.is_empty());
        assert!(board.form().due_date.is_empty());
        assert_eq!(board.form().priority, "1");
        assert_eq!(board.form().status, "IN_PROGRESS");

        assert!(board.finish_reload(&newer, ok_list(json!([]))));
        assert_eq!(board.display(), &DisplayModel::Empty);
    }

    #[tokio::test]
    async fn test_create_success_reloads_once_and_clears() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "t-1"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "t-1", "title": "Pay rent", "priority": 1, "status": "IN_PROGRESS"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = TaskClient::new().expect("client init");
        let mut board = TaskBoard::new(server.uri()).with_form(filled_form());
        let outcome = board.create(&client).await;

        assert_eq!(outcome, CreateOutcome::Created { id: Some("t-1".to_string()) });
        assert_eq!(board.display().blocks().len(), 1);
        assert!(board.form().title.is_empty());
        assert!(board.notice().is_none());
        server.verify().await;
    }

    #[tokio::test]
    async fn test_create_failure_sends_no_reload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(400))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let client = TaskClient::new().expect("client init");
        let mut board = TaskBoard::new(server.uri()).with_form(filled_form());
        let outcome = board.create(&client).await;

        assert!(matches!(outcome, CreateOutcome::Failed(_)));
        assert_eq!(board.form(), &filled_form());
        assert!(board.notice().is_some());
        server.verify().await;
    }

    #[tokio::test]
    async fn test_blank_title_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = TaskClient::new().expect("client init");
        let mut board = TaskBoard::new(server.uri());
        let outcome = board.create(&client).await;

        assert_eq!(outcome, CreateOutcome::Invalid(ValidationError::EmptyTitle));
        server.verify().await;
    }

    #[tokio::test]
    async fn test_reload_from_network_failure_shows_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let uri = format!("http://{}", listener.local_addr().expect("addr"));
        drop(listener);

        let client = TaskClient::new().expect("client init");
        let mut board = TaskBoard::new(uri);
        assert!(board.reload(&client).await);

        match board.display() {
            DisplayModel::Error(reason) => assert!(reason.starts_with("HTTP request failed")),
            other => panic!("Expected error display, got {other:?}"),
        }
    }
}

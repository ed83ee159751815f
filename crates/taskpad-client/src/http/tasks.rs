/*
[INPUT]:  Base URL configuration and create request bodies
[OUTPUT]: Task list and create results
[POS]:    HTTP layer - task collection endpoints
[UPDATE]: When adding endpoints or changing how responses are interpreted
*/

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::http::{ClientConfig, Result, TaskClient, TaskError};
use crate::types::{NewTaskRequest, TaskList};

impl TaskClient {
    /// Fetch the whole task collection
    ///
    /// GET {base}/tasks
    pub async fn list_tasks(&self, config: &ClientConfig) -> Result<TaskList> {
        let url = config.tasks_url();
        debug!(%url, "loading tasks");

        let response = self
            .tasks_request(Method::GET, config)
            .send()
            .await
            .inspect_err(|err| warn!(%url, error = %err, "list request failed"))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "list request rejected");
            return Err(TaskError::LoadFailed { status });
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;
        let list = TaskList::from_json(value);
        info!(count = list.len(), "tasks loaded");
        Ok(list)
    }

    /// Submit one new task
    ///
    /// POST {base}/tasks
    pub async fn create_task(
        &self,
        config: &ClientConfig,
        request: &NewTaskRequest,
    ) -> Result<Option<String>> {
        let url = config.tasks_url();
        debug!(%url, title = %request.title, "creating task");

        let response = self
            .tasks_request(Method::POST, config)
            .json(request)
            .send()
            .await
            .inspect_err(|err| warn!(%url, error = %err, "create request failed"))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "create request rejected");
            return Err(TaskError::CreateFailed { status });
        }

        // Any 2xx counts; the body is only mined for the new id.
        let id = match response.text().await {
            Ok(body) => created_task_id(&body),
            Err(err) => {
                debug!(error = %err, "create response body unreadable");
                None
            }
        };
        info!(id = id.as_deref().unwrap_or("-"), "task created");
        Ok(id)
    }
}

fn created_task_id(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

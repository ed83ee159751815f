/*
[INPUT]:  Base URL configuration and create requests
[OUTPUT]: Async trait over the two task operations
[POS]:    HTTP layer - seam between the board controller and the transport
[UPDATE]: When adding operations callers need to swap out in tests
*/

use async_trait::async_trait;

use crate::http::{ClientConfig, Result, TaskClient};
use crate::types::{NewTaskRequest, TaskList};

/// The task API as seen by callers
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// `GET <base>/tasks`
    async fn list_tasks(&self, config: &ClientConfig) -> Result<TaskList>;

    /// `POST <base>/tasks`; returns the server-assigned id when one comes back
    async fn create_task(
        &self,
        config: &ClientConfig,
        request: &NewTaskRequest,
    ) -> Result<Option<String>>;
}

#[async_trait]
impl TaskApi for TaskClient {
    async fn list_tasks(&self, config: &ClientConfig) -> Result<TaskList> {
        TaskClient::list_tasks(self, config).await
    }

    async fn create_task(
        &self,
        config: &ClientConfig,
        request: &NewTaskRequest,
    ) -> Result<Option<String>> {
        TaskClient::create_task(self, config, request).await
    }
}

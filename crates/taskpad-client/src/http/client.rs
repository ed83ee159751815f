/*
[INPUT]:  Base URL configuration and transport options (timeouts)
[OUTPUT]: Configured reqwest client ready for task API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder};
use std::time::Duration;

use crate::http::Result;

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const TASKS_PATH: &str = "/tasks";

/// Where the task API lives.
///
/// Passed into every operation instead of being read from shared state, so
/// each request uses whatever base URL the caller holds at trigger time.
/// The value is free text and is not validated here; a malformed URL only
/// fails once the request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `<base>/tasks`, concatenated literally
    pub fn tasks_url(&self) -> String {
        format!("{}{}", self.base_url, TASKS_PATH)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Transport options for the underlying HTTP client.
///
/// Both timeouts are off by default: a request runs until it completes or
/// the transport gives up on its own.
#[derive(Debug, Clone, Default)]
pub struct HttpOptions {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

/// HTTP client for the task API
#[derive(Debug, Clone)]
pub struct TaskClient {
    http_client: Client,
}

impl TaskClient {
    /// Create a new client with default options
    pub fn new() -> Result<Self> {
        Self::with_options(HttpOptions::default())
    }

    /// Create a new client with custom transport options
    pub fn with_options(options: HttpOptions) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = options.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
        })
    }

    /// Build request builder for the tasks collection
    pub(crate) fn tasks_request(&self, method: Method, config: &ClientConfig) -> RequestBuilder {
        self.http_client.request(method, config.tasks_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasks_url_is_literal_concatenation() {
        let config = ClientConfig::new("http://x/api");
        assert_eq!(config.tasks_url(), "http://x/api/tasks");

        // no normalisation of trailing slashes or whitespace
        let config = ClientConfig::new("http://x/api/");
        assert_eq!(config.tasks_url(), "http://x/api//tasks");
        let config = ClientConfig::new("");
        assert_eq!(config.tasks_url(), "/tasks");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(ClientConfig::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_with_timeouts() {
        let options = HttpOptions {
            timeout: Some(Duration::from_secs(5)),
            connect_timeout: Some(Duration::from_secs(1)),
        };
        assert!(TaskClient::with_options(options).is_ok());
    }
}

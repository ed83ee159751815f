/*
[INPUT]:  Defaults, YAML config file, TASKPAD_* environment variables
[OUTPUT]: Effective application configuration
[POS]:    Configuration layer - startup settings
[UPDATE]: When adding new configuration options
*/

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use taskpad_client::form::DEFAULT_STATUS;
use taskpad_client::{DEFAULT_BASE_URL, HttpOptions, TaskForm};

pub const ENV_PREFIX: &str = "TASKPAD";

/// Top-level configuration for taskpad
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Prefix every request URL is built from
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Tracing filter directive (e.g. "info", "taskpad=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Whole-request timeout in seconds; unset means no limit
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Status preselected in a fresh create form
    #[serde(default = "default_status")]
    pub default_status: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            log_level: default_log_level(),
            timeout_secs: None,
            connect_timeout_secs: None,
            default_status: default_status(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// `<config_dir>/taskpad/config.yaml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taskpad").join("config.yaml"))
}

impl AppConfig {
    /// Load defaults, then the config file, then `TASKPAD_*` variables.
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`AppConfig::load`] but reads variables from `env` instead of
    /// the process environment when given.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path).format(FileFormat::Yaml).required(true));
            }
            None => {
                if let Some(path) = default_config_path() {
                    builder = builder
                        .add_source(File::from(path.as_path()).format(FileFormat::Yaml).required(false));
                }
            }
        }

        let mut environment = Environment::with_prefix(ENV_PREFIX).try_parsing(true);
        if let Some(vars) = env {
            environment = environment.source(Some(vars.into_iter().collect()));
        }
        builder = builder.add_source(environment);

        let config = builder.build().context("Failed to read configuration")?;
        config
            .try_deserialize()
            .context("Failed to parse configuration")
    }

    pub fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the configuration as YAML, creating parent directories
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, self.to_yaml()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            timeout: self.timeout_secs.map(Duration::from_secs),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
        }
    }

    /// Fresh create form with the configured status preselected
    pub fn initial_form(&self) -> TaskForm {
        TaskForm {
            status: self.default_status.clone(),
            ..TaskForm::default()
        }
    }
}

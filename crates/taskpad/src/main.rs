/*
[INPUT]:  CLI arguments, YAML configuration file, TASKPAD_* environment
[OUTPUT]: Task list/create commands or the interactive board
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

mod cli;
mod tui;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskpad::AppConfig;
use taskpad::config::default_config_path;
use taskpad_client::{TaskClient, TaskForm};

use crate::cli::commands::{OutputFormat, run_create, run_list};
use crate::tui::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory};

#[derive(Parser, Debug)]
#[command(name = "taskpad", version, about = "List and create tasks on a task API")]
struct Cli {
    /// YAML config file (default: <config dir>/taskpad/config.yaml)
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    /// API base URL; requests go to <URL>/tasks
    #[arg(long = "base-url", value_name = "URL", global = true)]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and print every task
    List {
        /// Print the HTML fragment instead of plain text
        #[arg(long)]
        html: bool,
    },
    /// Create a task, then print the reloaded list
    Create(CreateArgs),
    /// Interactive board (default)
    Tui,
    /// Print the effective configuration as YAML
    Config,
    /// Write a configuration file interactively
    Init {
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct CreateArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long, default_value = "")]
    description: String,
    /// 1-5; blank, non-numeric or zero becomes 3
    #[arg(long)]
    priority: Option<String>,
    #[arg(long)]
    status: Option<String>,
    /// Sent as-is; empty means no due date
    #[arg(long = "due-date", default_value = "")]
    due_date: String,
    /// Prompt for every field
    #[arg(long, short = 'i')]
    interactive: bool,
    #[arg(long)]
    html: bool,
}

impl CreateArgs {
    fn into_form(self, config: &AppConfig) -> TaskForm {
        let initial = config.initial_form();
        TaskForm {
            title: self.title.unwrap_or_default(),
            description: self.description,
            priority: self.priority.unwrap_or(initial.priority),
            status: self.status.unwrap_or(initial.status),
            due_date: self.due_date,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    let mut config = AppConfig::load(args.config_path.as_deref()).context("load config")?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(log_level) = args.log_level {
        config.log_level = log_level;
    }

    let command = args.command.unwrap_or(Command::Tui);
    let log_buffer: Option<LogBufferHandle> = match command {
        Command::Tui => Some(Arc::new(Mutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)))),
        _ => None,
    };
    init_tracing(&config.log_level, log_buffer.clone())?;
    info!(base_url = %config.base_url, "configuration loaded");

    let client = TaskClient::with_options(config.http_options()).context("create http client")?;

    match command {
        Command::List { html } => run_list(&client, &config, output_format(html)).await,
        Command::Create(create) => {
            let format = output_format(create.html);
            let interactive = create.interactive;
            let mut form = create.into_form(&config);
            if interactive {
                form = cli::init::prompt_task_form(form)?;
            }
            run_create(&client, &config, form, format).await
        }
        Command::Tui => {
            let buffer = log_buffer.ok_or_else(|| anyhow!("log buffer missing"))?;
            tui::run_tui_with_log(&config, client, buffer).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Config => {
            print!("{}", config.to_yaml()?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Init { output } => {
            let output = output
                .or_else(default_config_path)
                .context("no config directory on this platform; pass --output")?;
            cli::init::run_init(&output, &config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn output_format(html: bool) -> OutputFormat {
    if html { OutputFormat::Html } else { OutputFormat::Text }
}

/// Logs go to stderr, or into the in-app buffer while the TUI owns the screen
fn init_tracing(log_level: &str, buffer: Option<LogBufferHandle>) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match buffer {
        Some(buffer) => builder
            .with_ansi(false)
            .with_writer(LogWriterFactory::new(buffer))
            .try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    result
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

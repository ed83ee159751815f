/*
[INPUT]:  Task client, effective configuration, create form values
[OUTPUT]: Rendered task list on stdout and a process exit code
[POS]:    CLI one-shot commands
[UPDATE]: When list/create output or exit codes change
*/

use std::process::ExitCode;

use anyhow::Result;
use console::style;
use taskpad::{AppConfig, CreateOutcome, TaskBoard};
use taskpad_client::{DisplayModel, TaskApi, TaskForm};
use tracing::debug;

/// Exit code for a create rejected before any request was sent
pub const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
}

pub fn render(display: &DisplayModel, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => display.to_text(),
        OutputFormat::Html => display.to_html(),
    }
}

/// Fetch and print the list once; a failed fetch prints the error line and exits 1
pub async fn run_list<A: TaskApi + ?Sized>(
    api: &A,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<ExitCode> {
    let mut board = TaskBoard::new(config.base_url.clone());
    board.reload(api).await;

    println!("{}", render(board.display(), format));
    Ok(match board.display() {
        DisplayModel::Error(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

/// Create one task and, on success, print the reloaded list
pub async fn run_create<A: TaskApi + ?Sized>(
    api: &A,
    config: &AppConfig,
    form: TaskForm,
    format: OutputFormat,
) -> Result<ExitCode> {
    let mut board = TaskBoard::new(config.base_url.clone()).with_form(form);
    let outcome = board.create(api).await;
    debug!(?outcome, "create finished");

    match outcome {
        CreateOutcome::Created { id } => {
            println!(
                "{} Created task {}",
                style("✓").green().bold(),
                style(id.as_deref().unwrap_or("-")).cyan()
            );
            println!("{}", render(board.display(), format));
            Ok(ExitCode::SUCCESS)
        }
        CreateOutcome::Invalid(_) | CreateOutcome::Failed(_) => {
            let message = board
                .notice()
                .map(|notice| notice.message())
                .unwrap_or_default();
            eprintln!("{} {}", style("✗").red().bold(), message);
            Ok(match outcome {
                CreateOutcome::Invalid(_) => ExitCode::from(EXIT_INVALID_INPUT),
                _ => ExitCode::FAILURE,
            })
        }
    }
}

/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML configuration file, or a filled create form
[POS]:    CLI interactive prompts
[UPDATE]: When AppConfig or TaskForm fields change
*/

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use taskpad::AppConfig;
use taskpad_client::TaskForm;
use taskpad_client::form::{PRIORITY_OPTIONS, STATUS_OPTIONS};

pub fn run_init(output: &Path, current: &AppConfig) -> Result<()> {
    println!("{}", style("Welcome to taskpad init").bold().cyan());
    println!(
        "{}",
        style("This will write a configuration file for the task API.").dim()
    );

    let theme = ColorfulTheme::default();

    let base_url: String = Input::with_theme(&theme)
        .with_prompt("API base URL (requests go to <base>/tasks)")
        .default(current.base_url.clone())
        .interact_text()?;

    let log_level: String = Input::with_theme(&theme)
        .with_prompt("Log level")
        .default(current.log_level.clone())
        .interact_text()?;

    let timeout: String = Input::with_theme(&theme)
        .with_prompt("Request timeout in seconds (empty for none)")
        .default(current.timeout_secs.map(|secs| secs.to_string()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    let timeout_secs = match timeout.trim() {
        "" => None,
        raw => Some(raw.parse::<u64>().context("timeout must be a whole number of seconds")?),
    };

    println!("\n{}", style("--- New task defaults ---").bold());
    let statuses: Vec<&str> = STATUS_OPTIONS.to_vec();
    let status_selection = Select::with_theme(&theme)
        .with_prompt("Default status")
        .items(&statuses)
        .default(
            statuses
                .iter()
                .position(|status| *status == current.default_status)
                .unwrap_or(0),
        )
        .interact()?;

    let config = AppConfig {
        base_url,
        log_level,
        timeout_secs,
        connect_timeout_secs: current.connect_timeout_secs,
        default_status: statuses[status_selection].to_string(),
    };
    config.save(output)?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!("Configuration written to: {}", style(output.display()).cyan());

    Ok(())
}

/// Ask for every create field, starting from `initial`
pub fn prompt_task_form(initial: TaskForm) -> Result<TaskForm> {
    let theme = ColorfulTheme::default();
    println!("{}", style("New task").bold().cyan());

    let title: String = Input::with_theme(&theme)
        .with_prompt("Title")
        .with_initial_text(initial.title)
        .allow_empty(true)
        .interact_text()?;

    let description: String = Input::with_theme(&theme)
        .with_prompt("Description")
        .with_initial_text(initial.description)
        .allow_empty(true)
        .interact_text()?;

    let priorities: Vec<String> = PRIORITY_OPTIONS.iter().map(i64::to_string).collect();
    let priority_selection = Select::with_theme(&theme)
        .with_prompt("Priority")
        .items(&priorities)
        .default(priorities.iter().position(|p| *p == initial.priority).unwrap_or(2))
        .interact()?;

    let statuses: Vec<&str> = STATUS_OPTIONS.to_vec();
    let status_selection = Select::with_theme(&theme)
        .with_prompt("Status")
        .items(&statuses)
        .default(statuses.iter().position(|s| *s == initial.status).unwrap_or(0))
        .interact()?;

    let due_date: String = Input::with_theme(&theme)
        .with_prompt("Due date (YYYY-MM-DD, empty for none)")
        .with_initial_text(initial.due_date)
        .allow_empty(true)
        .interact_text()?;

    Ok(TaskForm {
        title,
        description,
        priority: priorities[priority_selection].clone(),
        status: statuses[status_selection].to_string(),
        due_date,
    })
}

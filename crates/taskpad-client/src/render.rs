/*
[INPUT]:  TaskList from a successful fetch, or a failure reason
[OUTPUT]: DisplayModel plus HTML and plain-text projections
[POS]:    Presentation layer - pure render step, no I/O
[UPDATE]: When the list layout or placeholder texts change
*/

use std::fmt::Write as _;

use crate::types::{TaskList, TaskView};

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No tasks yet ✨";
pub const DUE_PLACEHOLDER: &str = "—";

/// One rendered task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBlock {
    pub title: String,
    pub description: String,
    pub priority_line: String,
    pub status_line: String,
    pub due_line: String,
}

impl TaskBlock {
    pub fn from_view(task: &TaskView) -> Self {
        let due = task
            .due_date
            .as_deref()
            .filter(|due| !due.is_empty())
            .unwrap_or(DUE_PLACEHOLDER);

        Self {
            title: task.title.clone().unwrap_or_default(),
            description: task.description.clone().unwrap_or_default(),
            priority_line: format!("Priority: {}", task.priority.as_deref().unwrap_or_default()),
            status_line: format!("Status: {}", task.status.as_deref().unwrap_or_default()),
            due_line: format!("Due: {due}"),
        }
    }

    /// `Priority: 1 | Status: open | Due: —`
    pub fn meta_line(&self) -> String {
        format!("{} | {} | {}", self.priority_line, self.status_line, self.due_line)
    }
}

/// What the task display area currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayModel {
    Loading,
    Empty,
    Tasks(Vec<TaskBlock>),
    Error(String),
}

impl DisplayModel {
    pub fn error(reason: impl std::fmt::Display) -> Self {
        DisplayModel::Error(reason.to_string())
    }

    /// Header line used for error display, e.g. `Error: Failed to load tasks`
    pub fn error_text(reason: &str) -> String {
        format!("Error: {reason}")
    }

    pub fn blocks(&self) -> &[TaskBlock] {
        match self {
            DisplayModel::Tasks(blocks) => blocks,
            _ => &[],
        }
    }

    /// Markup for a web page. Every server-supplied value is escaped.
    pub fn to_html(&self) -> String {
        match self {
            DisplayModel::Loading => LOADING_TEXT.to_string(),
            DisplayModel::Empty => format!("<p>{EMPTY_TEXT}</p>"),
            DisplayModel::Error(reason) => format!(
                r#"<p style="color:red">{}</p>"#,
                escape_html(&Self::error_text(reason))
            ),
            DisplayModel::Tasks(blocks) => {
                let mut html = String::new();
                for block in blocks {
                    let _ = write!(
                        html,
                        concat!(
                            r#"<div class="task">"#,
                            "<h3>{}</h3>",
                            "<p>{}</p>",
                            r#"<div class="meta">"#,
                            "<span>{}</span> | <span>{}</span> | <span>{}</span>",
                            "</div></div>"
                        ),
                        escape_html(&block.title),
                        escape_html(&block.description),
                        escape_html(&block.priority_line),
                        escape_html(&block.status_line),
                        escape_html(&block.due_line),
                    );
                }
                html
            }
        }
    }

    /// Plain text for terminals and pipes
    pub fn to_text(&self) -> String {
        match self {
            DisplayModel::Loading => LOADING_TEXT.to_string(),
            DisplayModel::Empty => EMPTY_TEXT.to_string(),
            DisplayModel::Error(reason) => Self::error_text(reason),
            DisplayModel::Tasks(blocks) => blocks
                .iter()
                .map(|block| {
                    let mut text = block.title.clone();
                    if !block.description.is_empty() {
                        text.push('\n');
                        text.push_str(&block.description);
                    }
                    text.push('\n');
                    text.push_str(&block.meta_line());
                    text
                })
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }
}

/// Render a fetched list; non-lists and empty lists collapse to [`DisplayModel::Empty`]
pub fn render_task_list(list: &TaskList) -> DisplayModel {
    if list.is_empty() {
        return DisplayModel::Empty;
    }
    DisplayModel::Tasks(list.tasks().iter().map(TaskBlock::from_view).collect())
}

/// Escape text for HTML element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

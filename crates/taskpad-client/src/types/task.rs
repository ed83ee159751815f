/*
[INPUT]:  Arbitrary JSON returned by the list endpoint
[OUTPUT]: Loosely-read task views ready for rendering
[POS]:    Data layer - list response model
[UPDATE]: When the server adds fields worth displaying
*/

use serde_json::{Map, Value};

/// One task as returned by `GET /tasks`.
///
/// Fields are read without schema validation: strings are kept as-is,
/// numbers and booleans are stringified, `null` or a missing key is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskView {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<String>,
    pub id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl TaskView {
    /// Read a task from one element of the list response.
    ///
    /// Non-object elements produce a view with every field absent.
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        Self {
            title: display_field(object, "title"),
            description: display_field(object, "description"),
            priority: display_field(object, "priority"),
            status: display_field(object, "status"),
            due_date: display_field(object, "due_date"),
            id: display_field(object, "id"),
            created_at: display_field(object, "created_at"),
            updated_at: display_field(object, "updated_at"),
        }
    }
}

fn display_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        nested => Some(nested.to_string()),
    }
}

/// Outcome of a successful list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskList {
    /// The body was a JSON array; elements in server order
    Tasks(Vec<TaskView>),
    /// The body was valid JSON but not an array
    NotAList,
}

impl TaskList {
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Array(items) => TaskList::Tasks(items.iter().map(TaskView::from_json).collect()),
            _ => TaskList::NotAList,
        }
    }

    pub fn tasks(&self) -> &[TaskView] {
        match self {
            TaskList::Tasks(tasks) => tasks,
            TaskList::NotAList => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.tasks().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks().is_empty()
    }
}

/*
[INPUT]:  Raw text of the create form fields
[OUTPUT]: Validated NewTaskRequest or a local validation error
[POS]:    Input collection - rules applied before any request is sent
[UPDATE]: When form fields or their defaults change
*/

use thiserror::Error;

use crate::types::NewTaskRequest;

/// Priority sent when the field is blank, non-numeric or zero
pub const DEFAULT_PRIORITY: i64 = 3;

/// Values offered by the priority selector
pub const PRIORITY_OPTIONS: [i64; 5] = [1, 2, 3, 4, 5];

/// Values offered by the status selector; the server does not restrict them
pub const STATUS_OPTIONS: [&str; 3] = ["PENDING", "IN_PROGRESS", "COMPLETED"];

pub const DEFAULT_STATUS: &str = "PENDING";

/// Local failure that stops a create before it reaches the network
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a task title.")]
    EmptyTitle,
}

/// Raw values of the create form, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub due_date: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: DEFAULT_PRIORITY.to_string(),
            status: DEFAULT_STATUS.to_string(),
            due_date: String::new(),
        }
    }
}

impl TaskForm {
    /// Build the create body.
    ///
    /// Title and description are trimmed, status is passed through raw and
    /// an empty due date becomes `None`.
    pub fn to_request(&self) -> Result<NewTaskRequest, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        Ok(NewTaskRequest {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            priority: parse_priority(&self.priority),
            status: self.status.clone(),
            due_date: if self.due_date.is_empty() {
                None
            } else {
                Some(self.due_date.clone())
            },
        })
    }

    /// Empty the free-text fields after a successful create.
    ///
    /// Priority and status are selections and keep their last value.
    pub fn clear_text_fields(&mut self) {
        self.title.clear();
        self.description.clear();
        self.due_date.clear();
    }
}

/// Leading-integer parse of the priority field.
///
/// Skips leading whitespace, accepts one sign and an optional `0x`/`0X`
/// prefix, then reads digits in that radix up to the first other character,
/// so `"4 (high)"` is 4 and `"0x5"` is 5. No digits or a zero result falls
/// back to [`DEFAULT_PRIORITY`].
pub fn parse_priority(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return DEFAULT_PRIORITY;
    }

    let magnitude = i64::from_str_radix(digits, radix).unwrap_or(i64::MAX);
    let value = if negative { -magnitude } else { magnitude };
    if value == 0 { DEFAULT_PRIORITY } else { value }
}

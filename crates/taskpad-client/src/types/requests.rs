/*
[INPUT]:  Validated form values
[OUTPUT]: JSON body for POST /tasks
[POS]:    Data layer - request body definitions
[UPDATE]: When the create payload changes
*/

use serde::{Deserialize, Serialize};

/// Body of `POST /tasks`.
///
/// `due_date` is always present on the wire and is `null` when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaskRequest {
    pub title: String,
    pub description: String,
    pub priority: i64,
    pub status: String,
    pub due_date: Option<String>,
}

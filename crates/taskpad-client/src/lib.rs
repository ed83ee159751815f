/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public task client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod form;
pub mod http;
pub mod render;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    DEFAULT_BASE_URL,
    HttpOptions,
    Result,
    TaskApi,
    TaskClient,
    TaskError,
};

pub use form::{TaskForm, ValidationError};
pub use render::{DisplayModel, TaskBlock, render_task_list};

// Re-export all types
pub use types::*;

/*
[INPUT]:  Task API schema and serde requirements
[OUTPUT]: Typed Rust structs for list responses and create requests
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod requests;
pub mod task;

pub use requests::*;
pub use task::*;

/*
[INPUT]:  Public API exports for the taskpad crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod board;
pub mod config;

// Re-export main types for convenience
pub use board::{CreateOutcome, CreateTicket, Notice, ReloadTicket, TaskBoard};
pub use config::AppConfig;

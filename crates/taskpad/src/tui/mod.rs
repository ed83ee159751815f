/*
[INPUT]:  App configuration, task client, and log buffer
[OUTPUT]: Ratatui-based TUI for browsing and creating tasks
[POS]:    TUI module for the taskpad binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui_with_log};

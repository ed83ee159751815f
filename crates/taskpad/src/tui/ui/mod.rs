/*
[INPUT]:  TUI app state for UI components
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: When adding panels or overlays
*/

mod detail;
mod layout;
mod logs;
mod notice;
mod task_list;

pub mod modal;

pub(in crate::tui) use detail::draw_task_detail;
pub(in crate::tui) use layout::{draw_header, draw_tabs};
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use notice::draw_notice;
pub(in crate::tui) use task_list::draw_task_list;

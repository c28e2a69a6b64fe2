//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, ResultLine, run_tui};

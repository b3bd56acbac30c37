//! 终端前端（crossterm + ratatui）
//!
//! 与 `kernel` 分离，内核本身不依赖任何终端 crate。

pub mod app;
pub mod terminal_guard;
pub mod view;

pub use app::App;
pub use terminal_guard::{TerminalGuard, TerminationSignal};

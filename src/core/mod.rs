//! 核心抽象：语义命令 + 输入事件

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{typed_char, InputEvent, Key};

//! zpad - 带查找功能的终端文本编辑器库
//!
//! 模块结构：
//! - core: 命令与输入事件
//! - kernel: 无界面的状态机（Store/Action/Effect）、搜索会话与服务
//! - tui: 终端前端（crossterm + ratatui）

pub mod core;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;

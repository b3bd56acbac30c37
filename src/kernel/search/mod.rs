//! 编辑器内搜索：会话 + 搜索栏状态

pub mod bar;
pub mod session;

pub use bar::SearchBarState;
pub use session::SearchSession;

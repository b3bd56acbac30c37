//! 单文档编辑器：文本（Rope）+ 光标/选区 + 视口

mod edit;
mod state;

pub use state::EditorState;

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/mod.rs"]
mod tests;

use crate::kernel::editor::EditorState;
use crate::kernel::search::SearchBarState;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::services::ports::Settings;
use crate::kernel::text_field::TextField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Editor,
    SearchBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Open,
    SaveAs,
}

impl PromptKind {
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::Open => "Open file",
            PromptKind::SaveAs => "Save as",
        }
    }
}

/// 路径输入框（替代文件选择对话框）
#[derive(Debug, Clone)]
pub struct PromptState {
    pub kind: PromptKind,
    pub field: TextField,
}

#[derive(Debug)]
pub struct AppState {
    pub editor: EditorState,
    pub search: SearchBarState,
    pub prompt: Option<PromptState>,
    pub focus: FocusTarget,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            editor: EditorState::new(settings.editor.tab_size),
            search: SearchBarState::new(settings.search.use_regex),
            prompt: None,
            focus: FocusTarget::Editor,
            status: None,
            should_quit: false,
        }
    }

    pub fn keybinding_context(&self) -> KeybindingContext {
        if self.prompt.is_some() {
            return KeybindingContext::Prompt;
        }
        match self.focus {
            FocusTarget::Editor => KeybindingContext::Editor,
            FocusTarget::SearchBar => KeybindingContext::SearchBar,
        }
    }

    /// 当前接收文本输入的单行输入框
    pub fn active_field_mut(&mut self) -> Option<&mut TextField> {
        if let Some(prompt) = self.prompt.as_mut() {
            return Some(&mut prompt.field);
        }
        match self.focus {
            FocusTarget::SearchBar => Some(&mut self.search.field),
            FocusTarget::Editor => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

//! 命令系统：语义命令定义（不关心具体按键）

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== 光标移动 ====================
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    CursorFileStart,
    CursorFileEnd,

    // ==================== 编辑操作 ====================
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,

    // ==================== 文件操作 ====================
    OpenFile,
    Save,
    SaveAs,

    // ==================== 查找 ====================
    StartSearch,
    NextMatch,
    PreviousMatch,
    ToggleRegex,

    // ==================== 焦点 / 系统 ====================
    FocusSearch,
    FocusEditor,
    Confirm,
    Escape,
    Quit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::CursorFileStart => "cursorFileStart",
            Command::CursorFileEnd => "cursorFileEnd",
            Command::InsertNewline => "insertNewline",
            Command::InsertTab => "insertTab",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::OpenFile => "openFile",
            Command::Save => "save",
            Command::SaveAs => "saveAs",
            Command::StartSearch => "startSearch",
            Command::NextMatch => "nextMatch",
            Command::PreviousMatch => "previousMatch",
            Command::ToggleRegex => "toggleRegex",
            Command::FocusSearch => "focusSearch",
            Command::FocusEditor => "focusEditor",
            Command::Confirm => "confirm",
            Command::Escape => "escape",
            Command::Quit => "quit",
        }
    }

    pub fn from_name(name: &str) -> Option<Command> {
        let cmd = match name.trim() {
            "cursorLeft" => Command::CursorLeft,
            "cursorRight" => Command::CursorRight,
            "cursorUp" => Command::CursorUp,
            "cursorDown" => Command::CursorDown,
            "cursorLineStart" => Command::CursorLineStart,
            "cursorLineEnd" => Command::CursorLineEnd,
            "cursorFileStart" => Command::CursorFileStart,
            "cursorFileEnd" => Command::CursorFileEnd,
            "insertNewline" => Command::InsertNewline,
            "insertTab" => Command::InsertTab,
            "deleteBackward" => Command::DeleteBackward,
            "deleteForward" => Command::DeleteForward,
            "openFile" => Command::OpenFile,
            "save" => Command::Save,
            "saveAs" => Command::SaveAs,
            "startSearch" => Command::StartSearch,
            "nextMatch" | "findNext" => Command::NextMatch,
            "previousMatch" | "findPrev" => Command::PreviousMatch,
            "toggleRegex" => Command::ToggleRegex,
            "focusSearch" | "find" => Command::FocusSearch,
            "focusEditor" => Command::FocusEditor,
            "confirm" => Command::Confirm,
            "escape" => Command::Escape,
            "quit" => Command::Quit,
            _ => return None,
        };
        Some(cmd)
    }
}

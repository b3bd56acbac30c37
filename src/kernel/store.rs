use std::path::PathBuf;

use crate::core::Command;
use crate::kernel::search::bar::{SearchOutcome, SearchStart};
use crate::kernel::services::ports::SearchMessage;

use super::state::{FocusTarget, PromptKind, PromptState};
use super::text_field::TextField;
use super::{Action, AppState, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn with_effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
            state_changed: true,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let result = match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::InsertChar(ch) => self.insert_text(&ch.to_string()),
            Action::Paste(text) => self.insert_text(&text),
            Action::Search(msg) => self.apply_search_message(msg),
            Action::FileLoaded { path, content } => {
                self.state.editor.load(&content, Some(path.clone()));
                self.set_status(format!("Opened {}", path.display()));
                DispatchResult::changed(true)
            }
            Action::FileSaved { path } => {
                self.state.editor.set_path(path.clone());
                self.state.editor.mark_saved();
                self.set_status(format!("Saved {}", path.display()));
                DispatchResult::changed(true)
            }
            Action::FileFailed { path, message } => {
                tracing::warn!(path = %path.display(), error = %message, "file operation failed");
                self.set_status(format!("{}: {}", path.display(), message));
                DispatchResult::changed(true)
            }
            Action::SetViewHeight(height) => {
                DispatchResult::changed(self.state.editor.set_view_height(height))
            }
        };

        if result.state_changed {
            self.state.editor.scroll_to_caret();
        }
        result
    }

    fn dispatch_command(&mut self, cmd: Command) -> DispatchResult {
        match cmd {
            Command::Quit => {
                self.state.should_quit = true;
                DispatchResult::changed(true)
            }
            Command::Escape => {
                if self.state.prompt.take().is_some() {
                    return DispatchResult::changed(true);
                }
                if self.state.focus == FocusTarget::SearchBar {
                    self.state.focus = FocusTarget::Editor;
                    return DispatchResult::changed(true);
                }
                DispatchResult::changed(self.state.editor.clear_selection())
            }
            Command::FocusSearch => {
                let changed =
                    self.state.prompt.take().is_some() || self.state.focus != FocusTarget::SearchBar;
                self.state.focus = FocusTarget::SearchBar;
                DispatchResult::changed(changed)
            }
            Command::FocusEditor => {
                let changed =
                    self.state.prompt.take().is_some() || self.state.focus != FocusTarget::Editor;
                self.state.focus = FocusTarget::Editor;
                DispatchResult::changed(changed)
            }
            Command::OpenFile => self.open_prompt(PromptKind::Open),
            Command::SaveAs => self.open_prompt(PromptKind::SaveAs),
            Command::Save => match self.state.editor.path().cloned() {
                Some(path) => DispatchResult::with_effect(Effect::WriteFile {
                    path,
                    content: self.state.editor.text(),
                }),
                None => self.open_prompt(PromptKind::SaveAs),
            },
            Command::Confirm => self.confirm_prompt(),
            Command::StartSearch => self.start_search(),
            Command::NextMatch => self.navigate(true),
            Command::PreviousMatch => self.navigate(false),
            Command::ToggleRegex => {
                self.state.search.toggle_regex();
                let label = if self.state.search.use_regex {
                    "Regex on"
                } else {
                    "Regex off"
                };
                self.set_status(label.to_string());
                DispatchResult::changed(true)
            }
            Command::CursorLeft => self.edit_target(TextField::cursor_left, |e| e.move_left()),
            Command::CursorRight => self.edit_target(TextField::cursor_right, |e| e.move_right()),
            Command::CursorLineStart => {
                self.edit_target(TextField::cursor_home, |e| e.move_line_start())
            }
            Command::CursorLineEnd => self.edit_target(TextField::cursor_end, |e| e.move_line_end()),
            Command::DeleteBackward => {
                self.edit_target(TextField::delete_backward, |e| e.delete_backward())
            }
            Command::DeleteForward => {
                self.edit_target(TextField::delete_forward, |e| e.delete_forward())
            }
            Command::CursorUp => self.edit_editor(|e| e.move_up()),
            Command::CursorDown => self.edit_editor(|e| e.move_down()),
            Command::CursorFileStart => self.edit_editor(|e| e.move_file_start()),
            Command::CursorFileEnd => self.edit_editor(|e| e.move_file_end()),
            Command::InsertNewline => self.edit_editor(|e| e.insert_newline()),
            Command::InsertTab => self.edit_editor(|e| e.insert_tab()),
        }
    }

    fn edit_target(
        &mut self,
        on_field: impl FnOnce(&mut TextField) -> bool,
        on_editor: impl FnOnce(&mut crate::kernel::EditorState) -> bool,
    ) -> DispatchResult {
        let changed = match self.state.active_field_mut() {
            Some(field) => on_field(field),
            None => on_editor(&mut self.state.editor),
        };
        DispatchResult::changed(changed)
    }

    fn edit_editor(
        &mut self,
        on_editor: impl FnOnce(&mut crate::kernel::EditorState) -> bool,
    ) -> DispatchResult {
        if self.state.active_field_mut().is_some() {
            return DispatchResult::changed(false);
        }
        DispatchResult::changed(on_editor(&mut self.state.editor))
    }

    fn insert_text(&mut self, text: &str) -> DispatchResult {
        let changed = match self.state.active_field_mut() {
            Some(field) => field.insert_str(text),
            None => self.state.editor.insert_text(text),
        };
        DispatchResult::changed(changed)
    }

    fn open_prompt(&mut self, kind: PromptKind) -> DispatchResult {
        let initial = self
            .state
            .editor
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.state.prompt = Some(PromptState {
            kind,
            field: TextField::new(initial),
        });
        DispatchResult::changed(true)
    }

    fn confirm_prompt(&mut self) -> DispatchResult {
        let Some(prompt) = self.state.prompt.as_ref() else {
            return DispatchResult::changed(false);
        };
        let input = prompt.field.text().trim();
        if input.is_empty() {
            self.set_status("Path is empty".to_string());
            return DispatchResult::changed(true);
        }

        let path = PathBuf::from(input);
        let kind = prompt.kind;
        self.state.prompt = None;

        let effect = match kind {
            PromptKind::Open => Effect::LoadFile(path),
            PromptKind::SaveAs => Effect::WriteFile {
                path,
                content: self.state.editor.text(),
            },
        };
        DispatchResult::with_effect(effect)
    }

    fn start_search(&mut self) -> DispatchResult {
        let text = self.state.editor.text();
        self.start_search_on(&text)
    }

    fn start_search_on(&mut self, text: &str) -> DispatchResult {
        match self.state.search.begin_search(text) {
            SearchStart::Reset => {
                self.state.editor.reset_caret();
                self.state.status = None;
                DispatchResult::changed(true)
            }
            SearchStart::Request(request) => {
                self.state.status = None;
                DispatchResult::with_effect(Effect::StartSearch(request))
            }
        }
    }

    /// 会话过期时先重建（结果到达后选中第一个匹配），否则循环移动。
    /// 搜索进行中：输入未变则等待结果，输入已变则以新请求取代旧请求
    fn navigate(&mut self, forward: bool) -> DispatchResult {
        let text = self.state.editor.text();
        if self.state.search.searching {
            if self.state.search.in_flight_matches(&text) {
                return DispatchResult::changed(false);
            }
            return self.start_search_on(&text);
        }

        if self.state.search.needs_rebuild(&text) {
            return self.start_search_on(&text);
        }

        match self.state.search.navigate(forward) {
            Some(span) => self.state.editor.select(span.start, span.end),
            None => self.state.editor.reset_caret(),
        }
        DispatchResult::changed(true)
    }

    fn apply_search_message(&mut self, msg: SearchMessage) -> DispatchResult {
        match self.state.search.apply_message(msg) {
            SearchOutcome::Selected(span) => {
                self.state.editor.select(span.start, span.end);
                DispatchResult::changed(true)
            }
            SearchOutcome::NoMatches => {
                self.state.editor.reset_caret();
                DispatchResult::changed(true)
            }
            SearchOutcome::Failed(message) => {
                self.set_status(message);
                DispatchResult::changed(true)
            }
            SearchOutcome::Ignored => DispatchResult::changed(false),
        }
    }

    fn set_status(&mut self, message: String) {
        self.state.status = Some(message);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;

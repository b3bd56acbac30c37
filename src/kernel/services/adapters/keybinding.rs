//! 快捷键：按键 → 命令（支持上下文）

use crate::core::event::Key;
use crate::core::Command;
use crate::kernel::services::ports::settings::KeybindingRule;
use crossterm::event::KeyCode;
use rustc_hash::FxHashMap;

use super::settings::{parse_command, parse_keybinding};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Editor,
    SearchBar,
    Prompt,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "editor" => Some(Self::Editor),
            "searchbar" | "search_bar" | "search" => Some(Self::SearchBar),
            "prompt" => Some(Self::Prompt),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    editor: FxHashMap<Key, Command>,
    search_bar: FxHashMap<Key, Command>,
    prompt: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            editor: default_editor_keybindings(),
            search_bar: default_search_bar_keybindings(),
            prompt: default_prompt_keybindings(),
        }
    }

    /// 上下文专属绑定优先，其次回落到全局绑定
    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Editor => self.editor.get(key).or_else(|| self.global.get(key)),
            KeybindingContext::SearchBar => {
                self.search_bar.get(key).or_else(|| self.global.get(key))
            }
            KeybindingContext::Prompt => self.prompt.get(key).or_else(|| self.global.get(key)),
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// 应用 settings 中的覆盖规则，返回成功应用的条数
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> usize {
        let mut applied = 0usize;
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "unrecognized keybinding");
                continue;
            };
            let context = match rule.context.as_deref() {
                None => KeybindingContext::Global,
                Some(ctx) => match KeybindingContext::parse(ctx) {
                    Some(ctx) => ctx,
                    None => {
                        tracing::warn!(context = %ctx, "unrecognized keybinding context");
                        continue;
                    }
                },
            };

            let command = rule.command.trim();
            if command.is_empty() || command == "-" {
                self.unbind(context, &key);
                applied += 1;
                continue;
            }
            match parse_command(command) {
                Some(cmd) => {
                    self.bind(context, key, cmd);
                    applied += 1;
                }
                None => tracing::warn!(command = %command, "unrecognized command"),
            }
        }
        applied
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Editor => &mut self.editor,
            KeybindingContext::SearchBar => &mut self.search_bar,
            KeybindingContext::Prompt => &mut self.prompt,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::simple(KeyCode::Esc), Command::Escape);
    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('o')), Command::OpenFile);
    bindings.insert(Key::ctrl(KeyCode::Char('s')), Command::Save);
    bindings.insert(Key::ctrl_shift(KeyCode::Char('s')), Command::SaveAs);

    bindings.insert(Key::ctrl(KeyCode::Char('f')), Command::FocusSearch);
    bindings.insert(Key::simple(KeyCode::F(3)), Command::NextMatch);
    bindings.insert(Key::shift(KeyCode::F(3)), Command::PreviousMatch);
    bindings.insert(Key::ctrl(KeyCode::Char('n')), Command::NextMatch);
    bindings.insert(Key::ctrl(KeyCode::Char('p')), Command::PreviousMatch);
    bindings.insert(Key::ctrl(KeyCode::Char('r')), Command::ToggleRegex);
    bindings.insert(Key::alt(KeyCode::Char('r')), Command::ToggleRegex);

    bindings
}

fn default_editor_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Up), Command::CursorUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::CursorDown);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);
    bindings.insert(Key::ctrl(KeyCode::Home), Command::CursorFileStart);
    bindings.insert(Key::ctrl(KeyCode::End), Command::CursorFileEnd);

    bindings.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
    bindings.insert(Key::simple(KeyCode::Tab), Command::InsertTab);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);

    bindings
}

fn default_search_bar_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(12);

    bindings.insert(Key::simple(KeyCode::Enter), Command::StartSearch);
    bindings.insert(Key::shift(KeyCode::Enter), Command::PreviousMatch);
    bindings.insert(Key::simple(KeyCode::Down), Command::NextMatch);
    bindings.insert(Key::simple(KeyCode::Up), Command::PreviousMatch);
    bindings.insert(Key::simple(KeyCode::Tab), Command::FocusEditor);
    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);

    bindings
}

fn default_prompt_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::simple(KeyCode::Enter), Command::Confirm);
    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;

//! 编辑与光标移动

use super::state::EditorState;

impl EditorState {
    /// 插入文本；有选区时先删除选区
    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.delete_selection();
        self.rope.insert(self.caret, text);
        self.caret += text.chars().count();
        self.goal_col = None;
        self.mark_dirty();
        true
    }

    pub fn insert_newline(&mut self) -> bool {
        self.insert_text("\n")
    }

    pub fn insert_tab(&mut self) -> bool {
        let spaces = " ".repeat(self.tab_size as usize);
        self.insert_text(&spaces)
    }

    pub fn delete_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.caret == 0 {
            return false;
        }
        let mut start = self.caret - 1;
        // \r\n 视为一个整体
        if start > 0 && self.rope.char(start) == '\n' && self.rope.char(start - 1) == '\r' {
            start -= 1;
        }
        self.rope.remove(start..self.caret);
        self.caret = start;
        self.goal_col = None;
        self.mark_dirty();
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let len = self.rope.len_chars();
        if self.caret >= len {
            return false;
        }
        let mut end = self.caret + 1;
        if end < len && self.rope.char(self.caret) == '\r' && self.rope.char(end) == '\n' {
            end += 1;
        }
        self.rope.remove(self.caret..end);
        self.goal_col = None;
        self.mark_dirty();
        true
    }

    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection() else {
            self.anchor = None;
            return false;
        };
        self.rope.remove(start..end);
        self.caret = start;
        self.anchor = None;
        self.goal_col = None;
        self.mark_dirty();
        true
    }

    pub fn move_left(&mut self) -> bool {
        if let Some((start, _)) = self.selection() {
            return self.move_to(start);
        }
        if self.caret == 0 {
            return self.clear_selection();
        }
        self.move_to(self.caret - 1)
    }

    pub fn move_right(&mut self) -> bool {
        if let Some((_, end)) = self.selection() {
            return self.move_to(end);
        }
        if self.caret >= self.rope.len_chars() {
            return self.clear_selection();
        }
        self.move_to(self.caret + 1)
    }

    pub fn move_up(&mut self) -> bool {
        self.move_vertical(false)
    }

    pub fn move_down(&mut self) -> bool {
        self.move_vertical(true)
    }

    pub fn move_line_start(&mut self) -> bool {
        let (line, _) = self.caret_line_col();
        self.move_to(self.rope.line_to_char(line))
    }

    pub fn move_line_end(&mut self) -> bool {
        let (line, _) = self.caret_line_col();
        self.move_to(self.rope.line_to_char(line) + self.line_len(line))
    }

    pub fn move_file_start(&mut self) -> bool {
        self.move_to(0)
    }

    pub fn move_file_end(&mut self) -> bool {
        self.move_to(self.rope.len_chars())
    }

    fn move_vertical(&mut self, down: bool) -> bool {
        let (line, col) = self.caret_line_col();
        let target = if down {
            if line + 1 >= self.line_count() {
                return self.clear_selection();
            }
            line + 1
        } else {
            if line == 0 {
                return self.clear_selection();
            }
            line - 1
        };

        let goal = self.goal_col.unwrap_or(col);
        let col = goal.min(self.line_len(target));
        let changed = self.move_to(self.rope.line_to_char(target) + col);
        self.goal_col = Some(goal);
        changed
    }

    fn move_to(&mut self, caret: usize) -> bool {
        let caret = caret.min(self.rope.len_chars());
        let had_selection = self.anchor.take().is_some();
        let moved = caret != self.caret;
        self.caret = caret;
        self.goal_col = None;
        moved || had_selection
    }
}

//! 单行输入框（搜索框、路径输入）；光标为字节偏移，始终落在字符边界

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    cursor_pos: usize,
}

impl TextField {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor_pos = text.len();
        Self { text, cursor_pos }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor_pos = self.text.len();
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        if c == '\n' || c == '\r' {
            return false;
        }
        if self.cursor_pos >= self.text.len() {
            self.text.push(c);
        } else {
            self.text.insert(self.cursor_pos, c);
        }
        self.cursor_pos += c.len_utf8();
        true
    }

    pub fn insert_str(&mut self, s: &str) -> bool {
        let mut changed = false;
        for c in s.chars() {
            changed |= self.insert_char(c);
        }
        changed
    }

    pub fn delete_backward(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.text.drain(prev..self.cursor_pos);
        self.cursor_pos = prev;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.cursor_pos >= self.text.len() {
            return false;
        }
        let next = self.next_boundary();
        self.text.drain(self.cursor_pos..next);
        true
    }

    pub fn cursor_left(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        self.cursor_pos = self.prev_boundary();
        true
    }

    pub fn cursor_right(&mut self) -> bool {
        if self.cursor_pos >= self.text.len() {
            return false;
        }
        self.cursor_pos = self.next_boundary();
        true
    }

    pub fn cursor_home(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        self.cursor_pos = 0;
        true
    }

    pub fn cursor_end(&mut self) -> bool {
        let end = self.text.len();
        if self.cursor_pos == end {
            return false;
        }
        self.cursor_pos = end;
        true
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor_pos..]
            .chars()
            .next()
            .map(|c| self.cursor_pos + c.len_utf8())
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/text_field.rs"]
mod tests;

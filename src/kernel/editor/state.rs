use ropey::Rope;
use std::path::PathBuf;

/// 单文档编辑器状态；光标与选区均为字符偏移
#[derive(Debug, Clone)]
pub struct EditorState {
    pub(super) rope: Rope,
    pub(super) caret: usize,
    pub(super) anchor: Option<usize>,
    pub(super) goal_col: Option<usize>,
    pub(super) tab_size: u8,
    path: Option<PathBuf>,
    dirty: bool,
    scroll_top: usize,
    view_height: usize,
}

impl EditorState {
    pub fn new(tab_size: u8) -> Self {
        Self {
            rope: Rope::new(),
            caret: 0,
            anchor: None,
            goal_col: None,
            tab_size: tab_size.max(1),
            path: None,
            dirty: false,
            scroll_top: 0,
            view_height: 1,
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    pub fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    pub(super) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// 替换整个文档（打开文件）
    pub fn load(&mut self, content: &str, path: Option<PathBuf>) {
        self.rope = Rope::from_str(content);
        self.path = path;
        self.dirty = false;
        self.scroll_top = 0;
        self.reset_caret();
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// 选中 `[start, end)`，光标落在 `end`
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.rope.len_chars();
        let start = start.min(len);
        let end = end.min(len);
        self.anchor = if start == end { None } else { Some(start) };
        self.caret = end;
        self.goal_col = None;
    }

    pub fn reset_caret(&mut self) {
        self.caret = 0;
        self.anchor = None;
        self.goal_col = None;
    }

    pub fn clear_selection(&mut self) -> bool {
        self.anchor.take().is_some()
    }

    /// 规范化后的非空选区 `[start, end)`
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?;
        if anchor == self.caret {
            return None;
        }
        Some((anchor.min(self.caret), anchor.max(self.caret)))
    }

    /// 0-based (行, 列)
    pub fn caret_line_col(&self) -> (usize, usize) {
        let line = self.rope.char_to_line(self.caret);
        let col = self.caret - self.rope.line_to_char(line);
        (line, col)
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// 行内可见字符数（不含换行符）
    pub fn line_len(&self, line: usize) -> usize {
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && is_line_break(slice.char(len - 1)) {
            let last = slice.char(len - 1);
            len -= 1;
            if last == '\n' && len > 0 && slice.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn view_height(&self) -> usize {
        self.view_height
    }

    pub fn tab_size(&self) -> u8 {
        self.tab_size
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        let height = height.max(1);
        if self.view_height == height {
            return false;
        }
        self.view_height = height;
        self.scroll_to_caret();
        true
    }

    /// 保证光标所在行可见
    pub fn scroll_to_caret(&mut self) -> bool {
        let (line, _) = self.caret_line_col();
        let prev = self.scroll_top;
        if line < self.scroll_top {
            self.scroll_top = line;
        } else if line >= self.scroll_top + self.view_height {
            self.scroll_top = line + 1 - self.view_height;
        }
        prev != self.scroll_top
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(4)
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

//! 界面绘制：搜索栏 / 编辑区 / 路径输入框 / 状态栏

use crate::kernel::editor::EditorState;
use crate::kernel::text_field::TextField;
use crate::kernel::{AppState, FocusTarget};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

const SEARCH_LABEL: &str = " Find: ";

/// 绘制整个界面，返回编辑区高度（行数）
pub fn render(frame: &mut Frame, state: &AppState) -> usize {
    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ];
    if state.prompt.is_some() {
        constraints.push(Constraint::Length(1));
    }
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    render_search_bar(frame, areas[0], state);
    render_editor(frame, areas[1], state);
    render_status(frame, areas[2], state);
    if areas.len() > 3 {
        render_prompt(frame, areas[3], state);
    }

    areas[1].height as usize
}

fn render_search_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let search = &state.search;
    let focused = state.prompt.is_none() && state.focus == FocusTarget::SearchBar;
    let label_style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    let regex_mark = if search.use_regex { "[x]" } else { "[ ]" };

    let mut spans = vec![
        Span::styled(SEARCH_LABEL, label_style),
        Span::raw(search.query().to_string()),
        Span::raw("  "),
        Span::styled(format!("{} Regex", regex_mark), Style::default().add_modifier(Modifier::DIM)),
    ];
    if let Some(summary) = search.summary() {
        spans.push(Span::raw("  "));
        spans.push(Span::raw(summary));
    }
    let line = Line::from(spans);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().add_modifier(Modifier::REVERSED)),
        area,
    );

    if focused {
        place_field_cursor(frame, area, SEARCH_LABEL, &search.field);
    }
}

fn render_editor(frame: &mut Frame, area: Rect, state: &AppState) {
    let editor = &state.editor;
    let selection = editor.selection();
    let tab_size = editor.tab_size() as usize;
    let height = area.height as usize;
    let first = editor.scroll_top();
    let last = (first + height).min(editor.line_count());

    let lines: Vec<Line> = (first..last)
        .map(|line| {
            let start = editor.rope().line_to_char(line);
            let len = editor.line_len(line);
            let text: String = editor.rope().slice(start..start + len).chars().collect();
            styled_line(&text, start, selection, tab_size)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);

    if state.prompt.is_none() && state.focus == FocusTarget::Editor {
        let (line, col) = editor.caret_line_col();
        if line >= first && line < last {
            let x = caret_display_col(editor, line, col, tab_size);
            let x = area.x + (x as u16).min(area.width.saturating_sub(1));
            let y = area.y + (line - first) as u16;
            frame.set_cursor_position((x, y));
        }
    }
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let editor = &state.editor;
    let (line, col) = editor.caret_line_col();
    let name = editor
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "[untitled]".to_string());
    let dirty = if editor.is_dirty() { " *" } else { "" };

    let mut text = format!(" {}{}  Ln {}, Col {}", name, dirty, line + 1, col + 1);
    if let Some(status) = &state.status {
        text.push_str("  ");
        text.push_str(status);
    }
    frame.render_widget(
        Paragraph::new(text).style(Style::default().add_modifier(Modifier::REVERSED)),
        area,
    );
}

fn render_prompt(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(prompt) = state.prompt.as_ref() else {
        return;
    };
    let label = format!(" {}: ", prompt.kind.label());
    let line = Line::from(vec![
        Span::styled(label.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(prompt.field.text().to_string()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
    place_field_cursor(frame, area, &label, &prompt.field);
}

fn place_field_cursor(frame: &mut Frame, area: Rect, label: &str, field: &TextField) {
    let before = &field.text()[..field.cursor_pos()];
    let x = text_width(label, 1) + text_width(before, 1);
    let x = area.x + (x as u16).min(area.width.saturating_sub(1));
    frame.set_cursor_position((x, area.y));
}

/// 把一行文本切成普通/选中两种样式；`line_start` 为该行首字符的文档偏移
pub fn styled_line(
    text: &str,
    line_start: usize,
    selection: Option<(usize, usize)>,
    tab_size: usize,
) -> Line<'static> {
    let len = text.chars().count();
    let (sel_start, sel_end) = match selection {
        Some((start, end)) => (
            start.saturating_sub(line_start).min(len),
            end.saturating_sub(line_start).min(len),
        ),
        None => (0, 0),
    };

    let expand = |from: usize, to: usize| -> String {
        let mut out = String::new();
        for ch in text.chars().skip(from).take(to - from) {
            if ch == '\t' {
                out.extend(std::iter::repeat(' ').take(tab_size));
            } else {
                out.push(ch);
            }
        }
        out
    };

    let mut spans = Vec::with_capacity(3);
    if sel_start < sel_end {
        spans.push(Span::raw(expand(0, sel_start)));
        spans.push(Span::styled(
            expand(sel_start, sel_end),
            Style::default().add_modifier(Modifier::REVERSED),
        ));
        spans.push(Span::raw(expand(sel_end, len)));
    } else {
        spans.push(Span::raw(expand(0, len)));
    }
    Line::from(spans)
}

/// 显示宽度（制表符按 `tab_size` 计）
pub fn text_width(text: &str, tab_size: usize) -> usize {
    text.chars()
        .map(|ch| match ch {
            '\t' => tab_size,
            _ => ch.width().unwrap_or(0),
        })
        .sum()
}

fn caret_display_col(editor: &EditorState, line: usize, col: usize, tab_size: usize) -> usize {
    let start = editor.rope().line_to_char(line);
    let prefix: String = editor.rope().slice(start..start + col).chars().collect();
    text_width(&prefix, tab_size)
}

#[cfg(test)]
#[path = "../../tests/unit/tui/view.rs"]
mod tests;

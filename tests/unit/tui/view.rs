use super::*;
use crate::kernel::AppState;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

fn draw(state: &AppState, width: u16, height: u16) -> (Buffer, usize) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut editor_height = 0;
    terminal
        .draw(|frame| editor_height = render(frame, state))
        .unwrap();
    (terminal.backend().buffer().clone(), editor_height)
}

fn row(buffer: &Buffer, y: u16) -> String {
    let width = buffer.area.width as usize;
    let start = y as usize * width;
    buffer.content[start..start + width]
        .iter()
        .map(|cell| cell.symbol())
        .collect::<String>()
}

#[test]
fn layout_reserves_search_and_status_rows() {
    let mut state = AppState::default();
    state.editor.load("first\nsecond", None);

    let (buffer, editor_height) = draw(&state, 40, 8);
    assert_eq!(editor_height, 6);
    assert!(row(&buffer, 0).starts_with(" Find: "));
    assert!(row(&buffer, 0).contains("[ ] Regex"));
    assert!(row(&buffer, 1).starts_with("first"));
    assert!(row(&buffer, 2).starts_with("second"));
    assert!(row(&buffer, 7).contains("Ln 1, Col 1"));
}

#[test]
fn prompt_row_takes_space_from_editor() {
    let mut state = AppState::default();
    state.prompt = Some(crate::kernel::PromptState {
        kind: crate::kernel::PromptKind::Open,
        field: crate::kernel::TextField::new("a.txt"),
    });

    let (buffer, editor_height) = draw(&state, 40, 8);
    assert_eq!(editor_height, 5);
    assert!(row(&buffer, 7).starts_with(" Open file: a.txt"));
}

#[test]
fn regex_indicator_and_summary_are_shown() {
    let mut state = AppState::default();
    state.search.use_regex = true;
    state.search.searching = true;

    let (buffer, _) = draw(&state, 60, 4);
    let bar = row(&buffer, 0);
    assert!(bar.contains("[x] Regex"));
    assert!(bar.contains("Searching..."));
}

#[test]
fn selection_is_split_into_reversed_span() {
    let line = styled_line("hello world", 10, Some((16, 21)), 4);
    let parts: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(parts, vec!["hello ", "world", ""]);
    assert!(line.spans[1].style.add_modifier.contains(Modifier::REVERSED));
}

#[test]
fn selection_outside_line_is_not_highlighted() {
    let line = styled_line("abc", 0, Some((10, 12)), 4);
    assert_eq!(line.spans.len(), 1);
    assert_eq!(line.spans[0].content.as_ref(), "abc");
}

#[test]
fn tabs_and_wide_chars_affect_width() {
    assert_eq!(text_width("\ta", 4), 5);
    assert_eq!(text_width("中文", 4), 4);
    let line = styled_line("\tx", 0, None, 2);
    assert_eq!(line.spans[0].content.as_ref(), "  x");
}

use super::*;
use crate::kernel::FocusTarget;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap()
}

fn app_with_text(rt: &tokio::runtime::Runtime, text: &str) -> App {
    let mut state = AppState::default();
    state.editor.load(text, None);
    App::new(state, KeybindingService::with_defaults(), rt.handle().clone())
}

fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    app.handle_input(InputEvent::Key(KeyEvent::new(code, modifiers)))
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch), KeyModifiers::NONE);
    }
}

#[test]
fn find_flow_selects_matches_through_keybindings() {
    let rt = runtime();
    let mut app = app_with_text(&rt, "Foo bar foo");

    press(&mut app, KeyCode::Char('f'), KeyModifiers::CONTROL);
    assert_eq!(app.store().state().focus, FocusTarget::SearchBar);

    type_str(&mut app, "foo");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    assert!(app.is_searching());

    app.wait_for_search(Duration::from_secs(5));
    assert!(!app.is_searching());
    assert_eq!(app.store().state().editor.selection(), Some((0, 3)));

    press(&mut app, KeyCode::F(3), KeyModifiers::NONE);
    assert_eq!(app.store().state().editor.selection(), Some((8, 11)));

    press(&mut app, KeyCode::F(3), KeyModifiers::SHIFT);
    assert_eq!(app.store().state().editor.selection(), Some((0, 3)));
}

#[test]
fn uppercase_input_keeps_case_in_editor() {
    let rt = runtime();
    let mut app = app_with_text(&rt, "");

    press(&mut app, KeyCode::Char('A'), KeyModifiers::SHIFT);
    press(&mut app, KeyCode::Char('b'), KeyModifiers::NONE);
    assert_eq!(app.store().state().editor.text(), "Ab");
}

#[test]
fn new_search_supersedes_running_one() {
    let rt = runtime();
    let mut app = app_with_text(&rt, "alpha beta");

    press(&mut app, KeyCode::Char('f'), KeyModifiers::CONTROL);
    type_str(&mut app, "alpha");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

    for _ in 0..5 {
        press(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
    }
    type_str(&mut app, "beta");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

    app.wait_for_search(Duration::from_secs(5));
    assert_eq!(app.store().state().editor.selection(), Some((6, 10)));
    assert_eq!(app.store().state().search.summary().as_deref(), Some("1/1"));
}

#[test]
fn save_and_reopen_through_prompt() {
    let rt = runtime();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");
    let mut app = app_with_text(&rt, "");

    type_str(&mut app, "hello");
    press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
    assert!(app.store().state().prompt.is_some());
    app.handle_input(InputEvent::Paste(path.display().to_string()));
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    assert!(!app.store().state().editor.is_dirty());

    std::fs::write(&path, "changed").unwrap();
    press(&mut app, KeyCode::Char('o'), KeyModifiers::CONTROL);
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(app.store().state().editor.text(), "changed");
}

#[test]
fn quit_binding_sets_quit_flag() {
    let rt = runtime();
    let mut app = app_with_text(&rt, "");
    press(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
    assert!(app.should_quit());
}

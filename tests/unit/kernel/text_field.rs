use super::*;

#[test]
fn insert_and_delete_multibyte() {
    let mut field = TextField::default();
    assert!(field.insert_char('é'));
    assert!(field.insert_char('x'));
    assert_eq!(field.text(), "éx");
    assert_eq!(field.cursor_pos(), "éx".len());

    assert!(field.cursor_left());
    assert!(field.delete_backward());
    assert_eq!(field.text(), "x");
    assert_eq!(field.cursor_pos(), 0);
    assert!(!field.delete_backward());
}

#[test]
fn delete_forward_at_cursor() {
    let mut field = TextField::new("añb");
    field.cursor_home();
    field.cursor_right();
    assert!(field.delete_forward());
    assert_eq!(field.text(), "ab");
    assert_eq!(field.cursor_pos(), 1);
}

#[test]
fn newlines_are_rejected() {
    let mut field = TextField::default();
    assert!(!field.insert_char('\n'));
    assert!(field.insert_str("a\nb"));
    assert_eq!(field.text(), "ab");
}

#[test]
fn cursor_bounds() {
    let mut field = TextField::new("ab");
    assert!(!field.cursor_right());
    assert!(!field.cursor_end());
    assert!(field.cursor_home());
    assert!(!field.cursor_left());
    field.insert_char('z');
    assert_eq!(field.text(), "zab");
}

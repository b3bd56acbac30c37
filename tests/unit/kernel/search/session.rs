use super::*;
use crate::kernel::services::ports::search::SearchError;

fn span(m: Option<&MatchSpan>) -> Option<(usize, usize)> {
    m.map(|m| (m.start, m.end))
}

#[test]
fn new_session_selects_first_match() {
    let session = SearchSession::new("one two one", "one", false).unwrap();
    assert_eq!(session.len(), 2);
    assert_eq!(session.current_index(), Some(0));
    assert_eq!(span(session.current()), Some((0, 3)));
}

#[test]
fn aaa_scenario() {
    let mut session = SearchSession::new("aaa", "a", false).unwrap();
    let all: Vec<_> = session.matches().iter().map(|m| (m.start, m.end)).collect();
    assert_eq!(all, vec![(0, 1), (1, 2), (2, 3)]);

    assert_eq!(span(session.next()), Some((1, 2)));
    assert_eq!(session.current_index(), Some(1));
    assert_eq!(span(session.previous()), Some((0, 1)));
    assert_eq!(session.current_index(), Some(0));
}

#[test]
fn next_wraps_after_n_steps() {
    let mut session = SearchSession::new("x1 x2 x3 x4", r"x\d", true).unwrap();
    let n = session.len();
    assert_eq!(n, 4);

    let first = span(session.current());
    let mut last = None;
    for _ in 0..n {
        last = span(session.next());
    }
    assert_eq!(last, first);
}

#[test]
fn previous_from_initial_wraps_to_last() {
    let mut session = SearchSession::new("ab ab ab", "ab", false).unwrap();
    assert_eq!(span(session.previous()), Some((6, 8)));
    assert_eq!(session.current_index(), Some(2));
}

#[test]
fn single_match_navigation_stays_put() {
    let mut session = SearchSession::new("only once", "once", false).unwrap();
    assert_eq!(span(session.next()), Some((5, 9)));
    assert_eq!(span(session.previous()), Some((5, 9)));
}

#[test]
fn empty_query_is_a_reset_not_a_search() {
    let mut session = SearchSession::new("anything (", "", true).unwrap();
    assert!(session.is_empty());
    assert_eq!(session.current_index(), None);
    assert!(session.next().is_none());
    assert!(session.previous().is_none());
    assert_eq!(session.current_index(), None);
}

#[test]
fn no_matches_navigation_is_noop() {
    let mut session = SearchSession::new("hello", "xyz", false).unwrap();
    assert!(session.is_empty());
    assert!(session.current().is_none());
    assert!(session.next().is_none());
    assert!(session.previous().is_none());
}

#[test]
fn invalid_pattern_fails_construction() {
    let result = SearchSession::new("some (text)", "(", true);
    assert!(matches!(result, Err(SearchError::InvalidPattern(_))));
}

#[test]
fn is_stale_compares_all_inputs() {
    let session = SearchSession::new("hello", "l", false).unwrap();
    assert!(!session.is_stale("hello", "l", false));
    assert!(session.is_stale("hello!", "l", false));
    assert!(session.is_stale("hello", "L", false));
    assert!(session.is_stale("hello", "l", true));
}

#[test]
fn is_stale_is_idempotent_and_read_only() {
    let mut session = SearchSession::new("abab", "b", false).unwrap();
    session.next();
    let before = session.current_index();

    for _ in 0..3 {
        assert!(session.is_stale("abab", "a", false));
        assert!(!session.is_stale("abab", "b", false));
    }
    assert_eq!(session.current_index(), before);
    assert_eq!(session.len(), 2);
}

#[test]
fn empty_session_is_not_inherently_stale() {
    let session = SearchSession::new("text", "zzz", false).unwrap();
    assert!(session.is_empty());
    assert!(!session.is_stale("text", "zzz", false));
}

#[test]
fn accessors_return_captured_inputs() {
    let session = SearchSession::new("Text", "t", true).unwrap();
    assert_eq!(session.source_text(), "Text");
    assert_eq!(session.query(), "t");
    assert!(session.use_regex());
}

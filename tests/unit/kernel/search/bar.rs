use super::*;
use crate::kernel::services::ports::search::SearchError;

fn bar_with_query(query: &str) -> SearchBarState {
    let mut bar = SearchBarState::default();
    bar.field.set_text(query);
    bar
}

fn finish(request: &SearchRequest) -> SearchMessage {
    SearchMessage::Finished {
        search_id: request.search_id,
        result: SearchSession::new(
            request.text.as_str(),
            request.query.as_str(),
            request.use_regex,
        ),
    }
}

fn expect_request(start: SearchStart) -> SearchRequest {
    match start {
        SearchStart::Request(req) => req,
        SearchStart::Reset => panic!("expected a search request"),
    }
}

#[test]
fn empty_query_resets_without_request() {
    let mut bar = SearchBarState::default();
    assert_eq!(bar.begin_search("some text"), SearchStart::Reset);
    assert!(!bar.searching);
    assert!(bar.session().is_some_and(|s| s.is_empty()));
    assert!(!bar.needs_rebuild("some text"));
    assert_eq!(bar.navigate(true), None);
    assert_eq!(bar.summary(), None);
}

#[test]
fn request_captures_inputs_by_value() {
    let mut bar = bar_with_query("Foo");
    bar.use_regex = true;
    let req = expect_request(bar.begin_search("foo bar"));
    assert_eq!(req.text, "foo bar");
    assert_eq!(req.query, "Foo");
    assert!(req.use_regex);
    assert!(bar.searching);
    assert_eq!(bar.active_search_id(), Some(req.search_id));
    assert_eq!(bar.summary().as_deref(), Some("Searching..."));
}

#[test]
fn search_ids_increase() {
    let mut bar = bar_with_query("a");
    let first = expect_request(bar.begin_search("a")).search_id;
    let second = expect_request(bar.begin_search("a")).search_id;
    assert!(second > first);
}

#[test]
fn finished_selects_first_match() {
    let mut bar = bar_with_query("b");
    let req = expect_request(bar.begin_search("abab"));
    let outcome = bar.apply_message(finish(&req));
    assert_eq!(outcome, SearchOutcome::Selected(MatchSpan::new(1, 2, "b")));
    assert!(!bar.searching);
    assert_eq!(bar.summary().as_deref(), Some("1/2"));

    assert_eq!(bar.navigate(true), Some(MatchSpan::new(3, 4, "b")));
    assert_eq!(bar.summary().as_deref(), Some("2/2"));
    assert_eq!(bar.navigate(true), Some(MatchSpan::new(1, 2, "b")));
    assert_eq!(bar.navigate(false), Some(MatchSpan::new(3, 4, "b")));
}

#[test]
fn finished_without_matches() {
    let mut bar = bar_with_query("zzz");
    let req = expect_request(bar.begin_search("abc"));
    assert_eq!(bar.apply_message(finish(&req)), SearchOutcome::NoMatches);
    assert_eq!(bar.summary().as_deref(), Some("No results"));
    assert!(!bar.needs_rebuild("abc"));
}

#[test]
fn superseded_results_are_ignored() {
    let mut bar = bar_with_query("a");
    let old = expect_request(bar.begin_search("aaa"));
    let new = expect_request(bar.begin_search("aaa"));

    assert_eq!(bar.apply_message(finish(&old)), SearchOutcome::Ignored);
    assert!(bar.searching);
    assert!(bar.session().is_none());

    assert!(matches!(
        bar.apply_message(finish(&new)),
        SearchOutcome::Selected(_)
    ));
    assert_eq!(bar.apply_message(finish(&new)), SearchOutcome::Ignored);
}

#[test]
fn invalid_pattern_is_reported() {
    let mut bar = bar_with_query("(");
    bar.use_regex = true;
    let req = expect_request(bar.begin_search("text"));
    let msg = finish(&req);
    assert!(matches!(
        &msg,
        SearchMessage::Finished {
            result: Err(SearchError::InvalidPattern(_)),
            ..
        }
    ));

    match bar.apply_message(msg) {
        SearchOutcome::Failed(message) => assert!(message.starts_with("Invalid pattern")),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(bar.session().is_none());
    assert!(bar.last_error.is_some());
    assert!(bar.needs_rebuild("text"));
}

#[test]
fn staleness_follows_live_inputs() {
    let mut bar = bar_with_query("a");
    let req = expect_request(bar.begin_search("aaa"));
    bar.apply_message(finish(&req));

    assert!(!bar.needs_rebuild("aaa"));
    assert!(bar.needs_rebuild("aaaa"));

    bar.toggle_regex();
    assert!(bar.needs_rebuild("aaa"));
    bar.toggle_regex();

    bar.field.insert_char('b');
    assert!(bar.needs_rebuild("aaa"));
}

#[test]
fn in_flight_request_tracks_live_inputs() {
    let mut bar = bar_with_query("a");
    assert!(!bar.in_flight_matches("aaa"));

    let request = expect_request(bar.begin_search("aaa"));
    assert!(bar.in_flight_matches("aaa"));
    assert!(!bar.in_flight_matches("aaab"));

    bar.field.set_text("b");
    assert!(!bar.in_flight_matches("aaa"));
    bar.field.set_text("a");
    bar.toggle_regex();
    assert!(!bar.in_flight_matches("aaa"));
    bar.toggle_regex();

    bar.apply_message(finish(&request));
    assert!(!bar.in_flight_matches("aaa"));
}

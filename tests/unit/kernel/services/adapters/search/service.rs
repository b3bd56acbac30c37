use super::*;
use crate::kernel::services::ports::search::SearchError;
use std::sync::mpsc;
use std::time::Duration;

fn create_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap()
}

fn request(search_id: u64, text: &str, query: &str, use_regex: bool) -> SearchRequest {
    SearchRequest {
        search_id,
        text: text.to_string(),
        query: query.to_string(),
        use_regex,
    }
}

#[test]
fn test_run_sync_literal() {
    let session = SearchService::run_sync(&request(1, "hello world hello", "HELLO", false)).unwrap();
    assert_eq!(session.len(), 2);
    assert_eq!(session.current().map(|m| m.start), Some(0));
}

#[test]
fn test_run_sync_invalid_regex() {
    let result = SearchService::run_sync(&request(1, "hello world", "[invalid", true));
    assert!(matches!(result, Err(SearchError::InvalidPattern(_))));
}

#[test]
fn test_async_search() {
    let rt = create_runtime();
    let service = SearchService::new(rt.handle().clone());
    let (tx, rx) = mpsc::sync_channel(8);

    let task = service.start(request(7, "hello world hello", "hello", false), tx);
    assert_eq!(task.id(), 7);

    match rx.recv_timeout(Duration::from_secs(5)) {
        Ok(SearchMessage::Finished { search_id, result }) => {
            assert_eq!(search_id, 7);
            let session = result.unwrap();
            assert_eq!(session.len(), 2);
            assert!(!session.is_stale("hello world hello", "hello", false));
        }
        Ok(other) => panic!("unexpected message: {:?}", other),
        Err(_) => panic!("Timeout waiting for search results"),
    }
}

#[test]
fn test_async_invalid_regex_is_reported() {
    let rt = create_runtime();
    let service = SearchService::new(rt.handle().clone());
    let (tx, rx) = mpsc::sync_channel(8);

    let _task = service.start(request(3, "text", "(", true), tx);

    match rx.recv_timeout(Duration::from_secs(5)) {
        Ok(SearchMessage::Finished { search_id, result }) => {
            assert_eq!(search_id, 3);
            assert!(matches!(result, Err(SearchError::InvalidPattern(_))));
        }
        Ok(other) => panic!("unexpected message: {:?}", other),
        Err(_) => panic!("Timeout waiting for search results"),
    }
}

#[test]
fn test_cancel_search() {
    let rt = create_runtime();
    let service = SearchService::new(rt.handle().clone());
    let (tx, rx) = mpsc::sync_channel(8);

    let text = "hello ".repeat(10000);
    let task = service.start(request(9, &text, "hello", false), tx);
    task.cancel();
    assert!(task.is_cancelled());

    match rx.recv_timeout(Duration::from_secs(5)) {
        Ok(msg) => {
            assert_eq!(msg.search_id(), 9);
            assert!(!matches!(msg, SearchMessage::Failed { .. }));
        }
        Err(_) => panic!("Timeout waiting for search results"),
    }
}

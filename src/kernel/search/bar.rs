use crate::kernel::services::ports::search::{MatchSpan, SearchMessage, SearchRequest};
use crate::kernel::text_field::TextField;

use super::SearchSession;

/// `begin_search` 的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStart {
    /// 查询为空：不搜索，只复位光标
    Reset,
    Request(SearchRequest),
}

/// 后台结果落地后，外壳需要做的显示更新
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Selected(MatchSpan),
    NoMatches,
    Failed(String),
    Ignored,
}

#[derive(Debug, Default)]
pub struct SearchBarState {
    pub field: TextField,
    pub use_regex: bool,
    pub searching: bool,
    pub last_error: Option<String>,
    session: Option<SearchSession>,
    in_flight: Option<SearchRequest>,
    active_search_id: Option<u64>,
    next_search_id: u64,
}

impl SearchBarState {
    pub fn new(use_regex: bool) -> Self {
        Self {
            use_regex,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        self.field.text()
    }

    pub fn session(&self) -> Option<&SearchSession> {
        self.session.as_ref()
    }

    pub fn active_search_id(&self) -> Option<u64> {
        self.active_search_id
    }

    pub fn toggle_regex(&mut self) -> bool {
        self.use_regex = !self.use_regex;
        true
    }

    pub fn begin_search(&mut self, text: &str) -> SearchStart {
        self.last_error = None;

        if self.field.is_empty() {
            self.searching = false;
            self.active_search_id = None;
            self.in_flight = None;
            self.session = SearchSession::new(text, "", self.use_regex).ok();
            return SearchStart::Reset;
        }

        let search_id = self.next_search_id;
        self.next_search_id += 1;
        self.active_search_id = Some(search_id);
        self.searching = true;
        self.session = None;

        let request = SearchRequest {
            search_id,
            text: text.to_string(),
            query: self.field.text().to_string(),
            use_regex: self.use_regex,
        };
        self.in_flight = Some(request.clone());
        SearchStart::Request(request)
    }

    /// 进行中的搜索是否仍对应当前输入（文本/查询/模式均未变）
    pub fn in_flight_matches(&self, live_text: &str) -> bool {
        self.in_flight.as_ref().is_some_and(|request| {
            request.use_regex == self.use_regex
                && request.query == self.field.text()
                && request.text == live_text
        })
    }

    /// 没有会话或会话已过期时需要重新搜索
    pub fn needs_rebuild(&self, live_text: &str) -> bool {
        match &self.session {
            None => true,
            Some(session) => session.is_stale(live_text, self.field.text(), self.use_regex),
        }
    }

    pub fn navigate(&mut self, forward: bool) -> Option<MatchSpan> {
        let session = self.session.as_mut()?;
        let span = if forward {
            session.next()
        } else {
            session.previous()
        };
        span.cloned()
    }

    pub fn apply_message(&mut self, msg: SearchMessage) -> SearchOutcome {
        let search_id = msg.search_id();
        if self.active_search_id != Some(search_id) {
            tracing::debug!(search_id, active = ?self.active_search_id, "stale search result dropped");
            return SearchOutcome::Ignored;
        }

        self.searching = false;
        self.active_search_id = None;
        self.in_flight = None;

        match msg {
            SearchMessage::Finished {
                result: Ok(session),
                ..
            } => {
                let outcome = match session.current() {
                    Some(span) => SearchOutcome::Selected(span.clone()),
                    None => SearchOutcome::NoMatches,
                };
                tracing::debug!(search_id, matches = session.len(), "search finished");
                self.session = Some(session);
                outcome
            }
            SearchMessage::Finished { result: Err(e), .. } => {
                let message = e.to_string();
                tracing::warn!(search_id, error = %message, "search failed");
                self.session = None;
                self.last_error = Some(message.clone());
                SearchOutcome::Failed(message)
            }
            SearchMessage::Failed { message, .. } => {
                self.session = None;
                self.last_error = Some(message.clone());
                SearchOutcome::Failed(message)
            }
            SearchMessage::Cancelled { .. } => SearchOutcome::Ignored,
        }
    }

    /// 状态栏上的搜索摘要
    pub fn summary(&self) -> Option<String> {
        if self.searching {
            return Some("Searching...".to_string());
        }
        if let Some(err) = &self.last_error {
            return Some(err.clone());
        }
        let session = self.session.as_ref()?;
        if session.query().is_empty() {
            return None;
        }
        match session.current_index() {
            Some(i) => Some(format!("{}/{}", i + 1, session.len())),
            None => Some("No results".to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/search/bar.rs"]
mod tests;

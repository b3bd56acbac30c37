//! 搜索会话：一次搜索的结果 + 当前匹配游标
//!
//! 结果在构造时计算一次，之后只移动游标。输入（文本/查询/模式）变化后
//! 会话即过期，由外壳丢弃并重建。

use crate::kernel::services::adapters::search::find_matches;
use crate::kernel::services::ports::search::{MatchSpan, Result};

#[derive(Debug, Clone)]
pub struct SearchSession {
    source_text: String,
    query: String,
    use_regex: bool,
    matches: Vec<MatchSpan>,
    current_index: Option<usize>,
}

impl SearchSession {
    /// 构造失败时不会留下任何部分初始化的会话
    pub fn new(
        source_text: impl Into<String>,
        query: impl Into<String>,
        use_regex: bool,
    ) -> Result<Self> {
        let source_text = source_text.into();
        let query = query.into();

        let matches = if query.is_empty() {
            Vec::new()
        } else {
            find_matches(&source_text, &query, use_regex)?
        };
        let current_index = if matches.is_empty() { None } else { Some(0) };

        Ok(Self {
            source_text,
            query,
            use_regex,
            matches,
            current_index,
        })
    }

    pub fn is_stale(&self, live_text: &str, live_query: &str, live_use_regex: bool) -> bool {
        self.use_regex != live_use_regex
            || self.query != live_query
            || self.source_text != live_text
    }

    pub fn current(&self) -> Option<&MatchSpan> {
        self.current_index.map(|i| &self.matches[i])
    }

    pub fn next(&mut self) -> Option<&MatchSpan> {
        let len = self.matches.len();
        let index = self.current_index?;
        let next = (index + 1) % len;
        self.current_index = Some(next);
        Some(&self.matches[next])
    }

    pub fn previous(&mut self) -> Option<&MatchSpan> {
        let len = self.matches.len();
        let index = self.current_index?;
        let prev = (index + len - 1) % len;
        self.current_index = Some(prev);
        Some(&self.matches[prev])
    }

    pub fn matches(&self) -> &[MatchSpan] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn use_regex(&self) -> bool {
        self.use_regex
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/search/session.rs"]
mod tests;

use crate::kernel::search::SearchSession;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Clone)]
pub enum SearchError {
    InvalidPattern(regex::Error),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::InvalidPattern(e) => write!(f, "Invalid pattern: {}", e),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::InvalidPattern(e) => Some(e),
        }
    }
}

impl From<regex::Error> for SearchError {
    fn from(e: regex::Error) -> Self {
        SearchError::InvalidPattern(e)
    }
}

/// 一次匹配：`[start, end)` 为字符偏移（非字节）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// 后台搜索请求；所有输入按值捕获
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub search_id: u64,
    pub text: String,
    pub query: String,
    pub use_regex: bool,
}

#[derive(Debug)]
pub enum SearchMessage {
    Finished {
        search_id: u64,
        result: Result<SearchSession>,
    },
    Cancelled {
        search_id: u64,
    },
    Failed {
        search_id: u64,
        message: String,
    },
}

impl SearchMessage {
    pub fn search_id(&self) -> u64 {
        match self {
            SearchMessage::Finished { search_id, .. }
            | SearchMessage::Cancelled { search_id }
            | SearchMessage::Failed { search_id, .. } => *search_id,
        }
    }
}

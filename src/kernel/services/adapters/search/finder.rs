//! 匹配查找器
//!
//! - 所有模式均大小写不敏感
//! - Literal 模式：转义后交给 regex 引擎，元字符按字面匹配
//! - 结果偏移为字符偏移，按扫描顺序严格递增

use crate::kernel::services::ports::search::{MatchSpan, Result};
use regex::{Regex, RegexBuilder};

/// 编译好的查询
#[derive(Debug, Clone)]
pub struct SearchConfig {
    regex: Regex,
}

impl SearchConfig {
    pub fn new(query: &str, use_regex: bool) -> Result<Self> {
        if use_regex {
            Self::regex(query)
        } else {
            Self::literal(query)
        }
    }

    pub fn literal(query: &str) -> Result<Self> {
        let regex = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()?;
        Ok(Self { regex })
    }

    pub fn regex(query: &str) -> Result<Self> {
        let regex = RegexBuilder::new(query).case_insensitive(true).build()?;
        Ok(Self { regex })
    }

    /// 从左到右扫描，不重叠；空匹配后引擎自动前进一个字符
    pub fn find_in(&self, text: &str) -> Vec<MatchSpan> {
        let mut matches = Vec::new();
        let mut last_byte = 0usize;
        let mut last_char = 0usize;

        for mat in self.regex.find_iter(text) {
            let start = last_char + text[last_byte..mat.start()].chars().count();
            let end = start + mat.as_str().chars().count();
            matches.push(MatchSpan::new(start, end, mat.as_str()));

            last_byte = mat.end();
            last_char = end;
        }

        matches
    }
}

/// 在 `source_text` 中查找 `query` 的全部匹配
pub fn find_matches(source_text: &str, query: &str, use_regex: bool) -> Result<Vec<MatchSpan>> {
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let config = SearchConfig::new(query, use_regex)?;
    Ok(config.find_in(source_text))
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/finder.rs"]
mod tests;

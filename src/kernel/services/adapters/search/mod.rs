//! 搜索服务模块
//!
//! - finder: 匹配查找（Literal / Regex，大小写不敏感）
//! - SearchService: 后台构建搜索会话

mod finder;
mod service;

pub use finder::{find_matches, SearchConfig};
pub use service::{SearchService, SearchTask};

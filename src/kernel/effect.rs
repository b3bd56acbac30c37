use crate::kernel::services::ports::SearchRequest;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartSearch(SearchRequest),
    LoadFile(PathBuf),
    WriteFile { path: PathBuf, content: String },
}

use std::path::PathBuf;

use crate::core::Command;
use crate::kernel::services::ports::SearchMessage;

#[derive(Debug)]
pub enum Action {
    RunCommand(Command),
    InsertChar(char),
    Paste(String),
    Search(SearchMessage),
    FileLoaded { path: PathBuf, content: String },
    FileSaved { path: PathBuf },
    FileFailed { path: PathBuf, message: String },
    SetViewHeight(usize),
}

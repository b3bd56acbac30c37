//! Service ports: traits + data contracts.

pub mod file;
pub mod search;
pub mod settings;

pub use file::{FileError, FileProvider, Result as FileResult};
pub use search::{MatchSpan, SearchError, SearchMessage, SearchRequest};
pub use settings::{EditorSettings, KeybindingRule, SearchSettings, Settings};

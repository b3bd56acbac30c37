//! Headless application core (state/action/effect).

pub mod action;
pub mod editor;
pub mod effect;
pub mod search;
pub mod services;
pub mod state;
pub mod store;
pub mod text_field;

pub use action::Action;
pub use editor::EditorState;
pub use effect::Effect;
pub use search::{SearchBarState, SearchSession};
pub use state::{AppState, FocusTarget, PromptKind, PromptState};
pub use store::{DispatchResult, Store};
pub use text_field::TextField;

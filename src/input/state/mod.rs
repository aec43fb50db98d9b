mod actions;
mod core;
mod dialog;
mod mouse;

pub use core::InputState;
pub use dialog::{Notice, NoticeKind, PromptKind, TextPrompt};

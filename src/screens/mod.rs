//! Framework independent screens.
//!
//! Each screen is a view-state value with an action enum and a pure `reduce`.
//! Calls against the collaborators live in async effect functions that return
//! the action to apply; the convenience methods chain the two.

use strum::{AsRefStr, Display};

mod create_event;
mod event_detail;
mod event_history;
mod event_list;
mod login;
mod main_scaffold;
mod profile;
mod register;

pub use create_event::*;
pub use event_detail::*;
pub use event_history::*;
pub use event_list::*;
pub use login::*;
pub use main_scaffold::*;
pub use profile::*;
pub use register::*;

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// The single message a screen shows after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

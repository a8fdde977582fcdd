//! Business logic for each user command.
//!
//! Handlers are pure functions over the [`AddressBook`]: they take parsed
//! arguments, mutate or query the book, and return a [`CmdResult`] carrying
//! leveled messages. Handlers never print or touch storage; the binary owns
//! all I/O.
//!
//! [`AddressBook`]: crate::book::AddressBook

pub mod add;
pub mod all;
pub mod birthday;
pub mod change;
pub mod goodbye;
pub mod hello;
pub mod helpers;
pub mod phone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn info(content: impl Into<String>) -> Self {
        CmdMessage::info(content).into()
    }

    pub fn success(content: impl Into<String>) -> Self {
        CmdMessage::success(content).into()
    }

    pub fn warning(content: impl Into<String>) -> Self {
        CmdMessage::warning(content).into()
    }

    pub fn error(content: impl Into<String>) -> Self {
        CmdMessage::error(content).into()
    }
}

impl From<CmdMessage> for CmdResult {
    fn from(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
        }
    }
}

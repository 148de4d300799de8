//! Outbound reply model
//!
//! What the service layer hands back to the transport glue: the text to
//! send plus what to do with the reply keyboard.

/// Keyboard directive attached to an outbound reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyboard {
    /// Leave whatever keyboard is currently shown
    Keep,
    /// Remove any visible reply keyboard
    Remove,
    /// Show a one-time reply keyboard with the given button rows
    Show(Vec<Vec<String>>),
}

/// A message for the chat, independent of the transport types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Keyboard,
}

impl Reply {
    /// Plain text, keyboard untouched
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Keyboard::Keep,
        }
    }

    /// Text plus a keyboard of suggested answers
    pub fn with_choices(text: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            text: text.into(),
            keyboard: Keyboard::Show(rows),
        }
    }

    /// Text that also clears any visible keyboard
    pub fn without_keyboard(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Keyboard::Remove,
        }
    }
}

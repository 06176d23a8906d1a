//! Intents for the summarization form.

use crate::api::SummarizeResponse;
use crate::ui::mvi::Intent;

/// Cursor movements inside a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// Intents that can be dispatched to the form.
#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Type a character into the focused field.
    Insert(char),

    /// Paste text into the focused field.
    Paste(String),

    /// Line break in the focused field.
    Newline,

    Backspace,

    Delete,

    MoveCursor(CursorMove),

    FocusNext,

    FocusPrev,

    /// Submit the form.
    Submit,

    /// Spinner tick.
    AnimationTick,

    /// The request finished with a response.
    Completed {
        request_id: u64,
        response: SummarizeResponse,
    },

    /// The request failed.
    Failed {
        request_id: u64,
        /// Message shown to the user.
        message: String,
    },

    /// Clear the error line.
    DismissError,
}

impl Intent for FormIntent {}

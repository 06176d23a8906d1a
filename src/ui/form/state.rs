//! State for the summarization form.

use crate::api::{ScoreSet, SummarizeRequest};
use crate::ui::mvi::UiState;

use super::field::TextField;

/// Message shown when submitting without a passage.
pub const PASSAGE_REQUIRED: &str = "Passage is required";

/// Which part of the form receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Passage,
    Reference,
    Submit,
}

impl FormFocus {
    pub fn next(self) -> Self {
        match self {
            Self::Passage => Self::Reference,
            Self::Reference => Self::Submit,
            Self::Submit => Self::Passage,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Passage => Self::Submit,
            Self::Reference => Self::Passage,
            Self::Submit => Self::Reference,
        }
    }
}

/// Lifecycle of the request behind the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,

    /// A request is in flight.
    InFlight {
        /// Id the completion must carry to be applied.
        request_id: u64,
        /// Animation tick for the spinner.
        animation_tick: u8,
    },
}

/// Everything the form view renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub(super) passage: TextField,
    pub(super) reference: TextField,
    pub(super) focus: FormFocus,
    pub(super) summary: String,
    pub(super) scores: Option<ScoreSet>,
    pub(super) error: Option<String>,
    pub(super) request: RequestStatus,
    /// Id handed to the most recent request. Ids start at 1.
    pub(super) last_request_id: u64,
}

impl UiState for FormState {}

impl FormState {
    pub fn passage(&self) -> &TextField {
        &self.passage
    }

    pub fn reference(&self) -> &TextField {
        &self.reference
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn scores(&self) -> Option<&ScoreSet> {
        self.scores.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while a request is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self.request, RequestStatus::InFlight { .. })
    }

    /// Id of the in-flight request, if any.
    pub fn in_flight_request_id(&self) -> Option<u64> {
        match self.request {
            RequestStatus::InFlight { request_id, .. } => Some(request_id),
            RequestStatus::Idle => None,
        }
    }

    pub fn animation_tick(&self) -> u8 {
        match self.request {
            RequestStatus::InFlight { animation_tick, .. } => animation_tick,
            RequestStatus::Idle => 0,
        }
    }

    /// Results are hidden while busy and until a summary exists.
    pub fn shows_results(&self) -> bool {
        !self.is_busy() && !self.summary.is_empty()
    }

    /// Request body built from the current field contents.
    pub fn request_payload(&self) -> SummarizeRequest {
        SummarizeRequest {
            passage: self.passage.text().to_string(),
            reference: self.reference.text().to_string(),
        }
    }
}

//! Reducer for the summarization form.

use crate::ui::mvi::Reducer;

use super::field::TextField;
use super::intent::{CursorMove, FormIntent};
use super::state::{FormFocus, FormState, RequestStatus, PASSAGE_REQUIRED};

/// Reducer for form state transitions.
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Insert(ch) => {
                if let Some(field) = focused_field(&mut state) {
                    field.insert_char(ch);
                }
                state
            }

            FormIntent::Paste(text) => {
                if let Some(field) = focused_field(&mut state) {
                    field.insert_str(&text);
                }
                state
            }

            FormIntent::Newline => {
                if let Some(field) = focused_field(&mut state) {
                    field.insert_char('\n');
                }
                state
            }

            FormIntent::Backspace => {
                if let Some(field) = focused_field(&mut state) {
                    field.backspace();
                }
                state
            }

            FormIntent::Delete => {
                if let Some(field) = focused_field(&mut state) {
                    field.delete();
                }
                state
            }

            FormIntent::MoveCursor(movement) => {
                if let Some(field) = focused_field(&mut state) {
                    match movement {
                        CursorMove::Left => field.move_left(),
                        CursorMove::Right => field.move_right(),
                        CursorMove::Up => field.move_up(),
                        CursorMove::Down => field.move_down(),
                        CursorMove::Home => field.move_home(),
                        CursorMove::End => field.move_end(),
                    }
                }
                state
            }

            FormIntent::FocusNext => {
                state.focus = state.focus.next();
                state
            }

            FormIntent::FocusPrev => {
                state.focus = state.focus.prev();
                state
            }

            FormIntent::Submit => {
                // One request at a time
                if state.is_busy() {
                    return state;
                }

                if state.passage.text().trim().is_empty() {
                    state.error = Some(PASSAGE_REQUIRED.to_string());
                    state.focus = FormFocus::Passage;
                    return state;
                }

                state.last_request_id += 1;
                state.request = RequestStatus::InFlight {
                    request_id: state.last_request_id,
                    animation_tick: 0,
                };
                state.error = None;
                state
            }

            FormIntent::AnimationTick => {
                if let RequestStatus::InFlight {
                    request_id,
                    animation_tick,
                } = state.request
                {
                    state.request = RequestStatus::InFlight {
                        request_id,
                        animation_tick: animation_tick.wrapping_add(1),
                    };
                }
                state
            }

            FormIntent::Completed {
                request_id,
                response,
            } => {
                if state.in_flight_request_id() != Some(request_id) {
                    return state;
                }
                state.summary = response.summary;
                state.scores = response.rouge_scores;
                state.request = RequestStatus::Idle;
                state
            }

            FormIntent::Failed {
                request_id,
                message,
            } => {
                if state.in_flight_request_id() != Some(request_id) {
                    return state;
                }
                // Previous summary and scores stay as they were
                state.error = Some(message);
                state.request = RequestStatus::Idle;
                state
            }

            FormIntent::DismissError => {
                state.error = None;
                state
            }
        }
    }
}

fn focused_field(state: &mut FormState) -> Option<&mut TextField> {
    match state.focus {
        FormFocus::Passage => Some(&mut state.passage),
        FormFocus::Reference => Some(&mut state.reference),
        FormFocus::Submit => None,
    }
}

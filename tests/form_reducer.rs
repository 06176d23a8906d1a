mod common;

use common::sample_scores;
use summariser::api::SummarizeResponse;
use summariser::ui::form::{
    CursorMove, FormFocus, FormIntent, FormReducer, FormState, PASSAGE_REQUIRED,
};
use summariser::ui::mvi::Reducer;

fn reduce_all(state: FormState, intents: impl IntoIterator<Item = FormIntent>) -> FormState {
    intents.into_iter().fold(state, FormReducer::reduce)
}

fn typed(text: &str) -> Vec<FormIntent> {
    text.chars().map(FormIntent::Insert).collect()
}

fn submitted(passage: &str) -> FormState {
    let mut intents = typed(passage);
    intents.push(FormIntent::Submit);
    reduce_all(FormState::default(), intents)
}

fn completed(request_id: u64, summary: &str, with_scores: bool) -> FormIntent {
    FormIntent::Completed {
        request_id,
        response: SummarizeResponse {
            summary: summary.to_string(),
            rouge_scores: with_scores.then(sample_scores),
        },
    }
}

#[test]
fn passage_only_payload_has_empty_reference() {
    let state = reduce_all(FormState::default(), typed("Just a passage."));
    let payload = state.request_payload();
    assert_eq!(payload.passage, "Just a passage.");
    assert_eq!(payload.reference, "");
}

#[test]
fn submit_sets_busy_and_hides_results() {
    let state = reduce_all(
        FormState::default(),
        typed("text")
            .into_iter()
            .chain([FormIntent::Submit, completed(1, "S", true), FormIntent::Submit]),
    );
    assert!(state.is_busy());
    assert!(!state.shows_results());
    assert_eq!(state.summary(), "S");
}

#[test]
fn success_stores_summary_and_scores() {
    let state = FormReducer::reduce(submitted("text"), completed(1, "S", true));
    assert!(!state.is_busy());
    assert!(state.shows_results());
    assert_eq!(state.summary(), "S");
    assert_eq!(state.scores(), Some(&sample_scores()));
}

#[test]
fn success_without_scores_clears_previous_scores() {
    let state = reduce_all(
        submitted("text"),
        [completed(1, "first", true), FormIntent::Submit, completed(2, "second", false)],
    );
    assert_eq!(state.summary(), "second");
    assert!(state.scores().is_none());
}

#[test]
fn failure_resets_busy_and_keeps_results() {
    let state = reduce_all(
        submitted("text"),
        [
            completed(1, "kept", true),
            FormIntent::Submit,
            FormIntent::Failed {
                request_id: 2,
                message: "Could not reach the summarization service".into(),
            },
        ],
    );
    assert!(!state.is_busy());
    assert_eq!(state.summary(), "kept");
    assert_eq!(state.scores(), Some(&sample_scores()));
    assert_eq!(
        state.error(),
        Some("Could not reach the summarization service")
    );
}

#[test]
fn failure_before_any_success_leaves_results_empty() {
    let state = FormReducer::reduce(
        submitted("text"),
        FormIntent::Failed {
            request_id: 1,
            message: "boom".into(),
        },
    );
    assert!(!state.is_busy());
    assert_eq!(state.summary(), "");
    assert!(!state.shows_results());
}

#[test]
fn completion_for_other_request_is_ignored() {
    let state = FormReducer::reduce(submitted("text"), completed(99, "stale", true));
    assert!(state.is_busy());
    assert_eq!(state.summary(), "");
}

#[test]
fn request_ids_increase_per_submit() {
    let state = reduce_all(submitted("text"), [completed(1, "S", false), FormIntent::Submit]);
    assert_eq!(state.in_flight_request_id(), Some(2));
}

#[test]
fn empty_passage_is_rejected() {
    let state = FormReducer::reduce(FormState::default(), FormIntent::Submit);
    assert!(!state.is_busy());
    assert_eq!(state.error(), Some(PASSAGE_REQUIRED));
}

#[test]
fn paste_and_edit_in_reference() {
    let state = reduce_all(
        FormState::default(),
        [
            FormIntent::FocusNext,
            FormIntent::Paste("line one\r\nline two".into()),
            FormIntent::MoveCursor(CursorMove::Up),
            FormIntent::MoveCursor(CursorMove::End),
            FormIntent::Backspace,
        ],
    );
    assert_eq!(state.focus(), FormFocus::Reference);
    assert_eq!(state.reference().text(), "line on\nline two");
    assert!(state.passage().is_empty());
}

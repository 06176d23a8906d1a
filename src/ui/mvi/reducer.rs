use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// `reduce` must stay pure: (State, Intent) -> State, no I/O.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

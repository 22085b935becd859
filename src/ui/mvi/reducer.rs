//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// Every breathing and rotation transition goes through a reducer:
/// (State, Intent) -> State, with no clock or timer access.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Consume the current state and return the next one.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

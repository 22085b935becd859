use crate::ui::mvi::Reducer;

use super::intent::QuoteIntent;
use super::state::QuoteState;

pub struct QuoteReducer;

impl Reducer for QuoteReducer {
    type State = QuoteState;
    type Intent = QuoteIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QuoteIntent::Advance { count } => {
                assert!(count > 0, "message list must not be empty");
                QuoteState {
                    index: (state.index + 1) % count,
                }
            }
        }
    }
}

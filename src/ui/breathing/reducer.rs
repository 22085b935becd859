//! Reducer for the breathing cycler.

use crate::catalog::{self, PHASE_COUNT};
use crate::ui::mvi::Reducer;

use super::intent::BreathingIntent;
use super::state::BreathingState;

/// Pure transitions of the breathing cycler.
///
/// A `Tick` advances exactly one phase. Skipping zero-duration phases and
/// timing are the caller's job (see `Session`).
pub struct BreathingReducer;

impl Reducer for BreathingReducer {
    type State = BreathingState;
    type Intent = BreathingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BreathingIntent::Start => match state {
                BreathingState::Idle { selected, .. } => BreathingState::Active {
                    selected,
                    pattern: *catalog::pattern(selected),
                    phase: 0,
                    completed_breaths: 0,
                },
                active => active,
            },

            BreathingIntent::Stop => match state {
                BreathingState::Active {
                    selected,
                    completed_breaths,
                    ..
                } => BreathingState::Idle {
                    selected,
                    completed_breaths,
                },
                idle => idle,
            },

            BreathingIntent::SelectPattern { index } => match state {
                BreathingState::Idle {
                    completed_breaths, ..
                } => {
                    catalog::assert_pattern(index);
                    BreathingState::Idle {
                        selected: index,
                        completed_breaths,
                    }
                }
                active => active,
            },

            BreathingIntent::Tick => match state {
                BreathingState::Active {
                    selected,
                    pattern,
                    phase,
                    completed_breaths,
                } => {
                    let next = (phase + 1) % PHASE_COUNT;
                    let completed_breaths = if next == 0 {
                        completed_breaths + 1
                    } else {
                        completed_breaths
                    };
                    BreathingState::Active {
                        selected,
                        pattern,
                        phase: next,
                        completed_breaths,
                    }
                }
                idle => idle,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(state: BreathingState, intents: &[BreathingIntent]) -> BreathingState {
        intents
            .iter()
            .fold(state, |s, i| BreathingReducer::reduce(s, *i))
    }

    #[test]
    fn start_enters_first_phase_with_zero_count() {
        let state = BreathingReducer::reduce(
            BreathingState::Idle {
                selected: 0,
                completed_breaths: 9,
            },
            BreathingIntent::Start,
        );
        assert!(state.is_active());
        assert_eq!(state.phase(), 0);
        assert_eq!(state.completed_breaths(), 0);
    }

    #[test]
    fn tick_on_last_phase_wraps_and_counts() {
        let state = reduce_all(
            BreathingState::default(),
            &[BreathingIntent::Start, BreathingIntent::Tick, BreathingIntent::Tick, BreathingIntent::Tick],
        );
        assert_eq!(state.phase(), 3);
        assert_eq!(state.completed_breaths(), 0);

        let state = BreathingReducer::reduce(state, BreathingIntent::Tick);
        assert_eq!(state.phase(), 0);
        assert_eq!(state.completed_breaths(), 1);
    }

    #[test]
    fn tick_while_idle_is_noop() {
        let state = BreathingReducer::reduce(BreathingState::default(), BreathingIntent::Tick);
        assert_eq!(state, BreathingState::default());
    }

    #[test]
    fn start_while_active_keeps_progress() {
        let state = reduce_all(
            BreathingState::default(),
            &[BreathingIntent::Start, BreathingIntent::Tick, BreathingIntent::Start],
        );
        assert_eq!(state.phase(), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn select_outside_catalog_panics_while_idle() {
        BreathingReducer::reduce(
            BreathingState::default(),
            BreathingIntent::SelectPattern { index: 3 },
        );
    }
}

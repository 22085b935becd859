//! State for the breathing cycler.

use crate::catalog::{self, BreathingPattern};
use crate::ui::mvi::UiState;

/// Breathing cycler state machine.
///
/// `Idle` remembers the selection and the last session's breath count;
/// `Active` owns a copy of the pattern taken at start, so the catalog is
/// never consulted mid-session.
#[derive(Debug, Clone, PartialEq)]
pub enum BreathingState {
    Idle {
        selected: usize,
        completed_breaths: u64,
    },
    Active {
        selected: usize,
        pattern: BreathingPattern,
        phase: usize,
        completed_breaths: u64,
    },
}

impl Default for BreathingState {
    fn default() -> Self {
        BreathingState::Idle {
            selected: 0,
            completed_breaths: 0,
        }
    }
}

impl UiState for BreathingState {}

impl BreathingState {
    /// Idle state with `selected` chosen. Panics outside the catalog.
    pub fn idle_with(selected: usize) -> Self {
        catalog::assert_pattern(selected);
        BreathingState::Idle {
            selected,
            completed_breaths: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub fn selected(&self) -> usize {
        match self {
            Self::Idle { selected, .. } | Self::Active { selected, .. } => *selected,
        }
    }

    /// Current phase; always 0 while idle.
    pub fn phase(&self) -> usize {
        match self {
            Self::Idle { .. } => 0,
            Self::Active { phase, .. } => *phase,
        }
    }

    pub fn completed_breaths(&self) -> u64 {
        match self {
            Self::Idle {
                completed_breaths, ..
            }
            | Self::Active {
                completed_breaths, ..
            } => *completed_breaths,
        }
    }

    /// The pattern captured at start, if a session is running.
    pub fn active_pattern(&self) -> Option<&BreathingPattern> {
        match self {
            Self::Idle { .. } => None,
            Self::Active { pattern, .. } => Some(pattern),
        }
    }

    /// Duration in seconds of the running phase.
    pub fn phase_duration(&self) -> Option<u32> {
        match self {
            Self::Idle { .. } => None,
            Self::Active { pattern, phase, .. } => Some(pattern.duration(*phase)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_on_first_pattern() {
        let state = BreathingState::default();
        assert!(!state.is_active());
        assert_eq!(state.selected(), 0);
        assert_eq!(state.phase(), 0);
        assert_eq!(state.completed_breaths(), 0);
        assert!(state.active_pattern().is_none());
    }

    #[test]
    fn phase_duration_reads_captured_pattern() {
        let state = BreathingState::Active {
            selected: 1,
            pattern: catalog::PATTERNS[1],
            phase: 2,
            completed_breaths: 0,
        };
        assert_eq!(state.phase_duration(), Some(8));
    }

    #[test]
    #[should_panic]
    fn idle_with_rejects_unknown_pattern() {
        BreathingState::idle_with(7);
    }
}

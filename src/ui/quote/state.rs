use crate::ui::mvi::UiState;

/// Index of the message currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuoteState {
    pub index: usize,
}

impl UiState for QuoteState {}

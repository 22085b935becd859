use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteIntent {
    /// The rotation period elapsed; `count` is the length of the message list.
    Advance { count: usize },
}

impl Intent for QuoteIntent {}

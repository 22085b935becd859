//! Intents for the breathing cycler.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathingIntent {
    /// Begin a session with the selected pattern. No-op while active.
    Start,
    /// End the session. The completed count survives until the next start.
    Stop,
    /// Choose a catalog pattern. Ignored while active.
    SelectPattern { index: usize },
    /// The current phase has elapsed.
    Tick,
}

impl Intent for BreathingIntent {}

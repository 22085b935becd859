use std::time::Duration;

use crate::catalog::PATTERNS;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Toggle,
    Select(usize),
    SelectPrevious,
    SelectNext,
}

pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Toggle),
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            (index < PATTERNS.len()).then_some(Command::Select(index))
        }
        KeyCode::Left | KeyCode::Char('h') => Some(Command::SelectPrevious),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::SelectNext),
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent, now: Duration) {
    if let Some(command) = command_for(&key) {
        app.apply(command, now);
    }
}

use std::time::Duration;

use crate::catalog::PATTERNS;
use crate::session::Session;
use crate::ui::input::Command;

/// The mounted widget: one session plus UI-only flags.
pub struct App {
    session: Session,
    should_quit: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Apply due timers.
    pub fn on_tick(&mut self, now: Duration) {
        self.session.advance(now);
    }

    pub fn apply(&mut self, command: Command, now: Duration) {
        // Timers due before the key press land first.
        self.session.advance(now);
        match command {
            Command::Quit => self.request_quit(),
            Command::Toggle => self.session.toggle(now),
            Command::Select(index) => self.session.select_pattern(index),
            Command::SelectPrevious => {
                let current = self.session.breathing().selected();
                let previous = (current + PATTERNS.len() - 1) % PATTERNS.len();
                self.session.select_pattern(previous);
            }
            Command::SelectNext => {
                let current = self.session.breathing().selected();
                self.session.select_pattern((current + 1) % PATTERNS.len());
            }
        }
    }

    /// How long the event loop may sleep before a timer is due.
    pub fn wait_budget(&self, now: Duration, tick_rate: Duration) -> Duration {
        self.session
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(now).min(tick_rate))
            .unwrap_or(tick_rate)
    }

    pub fn teardown(&mut self) {
        self.session.teardown();
    }
}

//! One mounted widget: message rotation plus the breathing cycler.
//!
//! The session owns both reducers' states and the timers that drive them.
//! Every method takes the current clock reading (`now`, time since the
//! session was created) instead of reading a clock itself.

use std::time::Duration;

use crate::catalog::{MessageList, PHASE_COUNT};
use crate::scheduler::{Scheduler, TimerId};
use crate::ui::breathing::{BreathingIntent, BreathingReducer, BreathingState};
use crate::ui::mvi::Reducer;
use crate::ui::quote::{QuoteIntent, QuoteReducer, QuoteState};

pub const DEFAULT_MESSAGE_INTERVAL: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerEvent {
    RotateMessage,
    PhaseElapsed,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct Session {
    messages: MessageList,
    quote: QuoteState,
    breathing: BreathingState,
    scheduler: Scheduler<TimerEvent>,
    message_timer: Option<TimerId>,
    /// Pending one-shot for the running phase. At most one exists.
    phase_timer: Option<TimerId>,
}

impl Session {
    pub fn new(
        messages: MessageList,
        message_interval: Duration,
        selected_pattern: usize,
        now: Duration,
    ) -> Self {
        let mut scheduler = Scheduler::new();
        let message_timer =
            scheduler.schedule_every(now, message_interval, TimerEvent::RotateMessage);
        tracing::debug!(
            interval_ms = message_interval.as_millis() as u64,
            messages = messages.len(),
            "message rotation scheduled"
        );

        Self {
            messages,
            quote: QuoteState::default(),
            breathing: BreathingState::idle_with(selected_pattern),
            scheduler,
            message_timer: Some(message_timer),
            phase_timer: None,
        }
    }

    pub fn breathing(&self) -> &BreathingState {
        &self.breathing
    }

    pub fn message_index(&self) -> usize {
        self.quote.index
    }

    pub fn message(&self) -> &str {
        self.messages.get(self.quote.index)
    }

    /// Start a breathing session. No-op if one is already running.
    pub fn start(&mut self, now: Duration) {
        if self.breathing.is_active() {
            return;
        }
        dispatch_mvi!(self, breathing, BreathingReducer, BreathingIntent::Start);
        if let Some(pattern) = self.breathing.active_pattern() {
            tracing::info!(pattern = pattern.name, "breathing session started");
        }
        self.enter_phase(now);
    }

    /// Stop the running session. The breath count is kept until the next start.
    pub fn stop(&mut self) {
        if !self.breathing.is_active() {
            return;
        }
        self.cancel_phase_timer();
        dispatch_mvi!(self, breathing, BreathingReducer, BreathingIntent::Stop);
        tracing::info!(
            completed_breaths = self.breathing.completed_breaths(),
            "breathing session stopped"
        );
    }

    pub fn toggle(&mut self, now: Duration) {
        if self.breathing.is_active() {
            self.stop();
        } else {
            self.start(now);
        }
    }

    /// Select a catalog pattern. Ignored while a session is running.
    ///
    /// Panics if `index` is outside the catalog.
    pub fn select_pattern(&mut self, index: usize) {
        if self.breathing.is_active() {
            tracing::debug!(index, "pattern selection ignored while active");
            return;
        }
        dispatch_mvi!(
            self,
            breathing,
            BreathingReducer,
            BreathingIntent::SelectPattern { index }
        );
        tracing::info!(index, "pattern selected");
    }

    /// End the current phase now, as if its timer had fired at `now`.
    pub fn tick(&mut self, now: Duration) {
        if !self.breathing.is_active() {
            return;
        }
        self.cancel_phase_timer();
        self.advance_phase(now);
    }

    /// Apply every timer due at or before `now`, oldest first.
    ///
    /// Returns the number of timer events applied.
    pub fn advance(&mut self, now: Duration) -> usize {
        let mut applied = 0;
        while let Some(fired) = self.scheduler.pop_due(now) {
            applied += 1;
            match fired.event {
                TimerEvent::RotateMessage => {
                    dispatch_mvi!(
                        self,
                        quote,
                        QuoteReducer,
                        QuoteIntent::Advance {
                            count: self.messages.len()
                        }
                    );
                    tracing::trace!(index = self.quote.index, "message rotated");
                }
                TimerEvent::PhaseElapsed => {
                    if self.phase_timer != Some(fired.id) {
                        continue;
                    }
                    self.phase_timer = None;
                    self.advance_phase(fired.deadline);
                }
            }
        }
        applied
    }

    /// Time left in the running phase, if it is timed.
    pub fn phase_remaining(&self, now: Duration) -> Option<Duration> {
        self.phase_timer
            .and_then(|id| self.scheduler.deadline(id))
            .map(|deadline| deadline.saturating_sub(now))
    }

    /// When the next timer is due, for sizing the event loop's wait.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Whether the periodic message timer is still live.
    pub fn is_rotating(&self) -> bool {
        self.message_timer
            .is_some_and(|id| self.scheduler.is_pending(id))
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Cancel all timers. The session keeps its last state but never moves again.
    pub fn teardown(&mut self) {
        self.scheduler.cancel_all();
        self.message_timer = None;
        self.phase_timer = None;
        tracing::debug!("session timers cancelled");
    }

    fn advance_phase(&mut self, at: Duration) {
        dispatch_mvi!(self, breathing, BreathingReducer, BreathingIntent::Tick);
        tracing::debug!(
            phase = self.breathing.phase(),
            completed_breaths = self.breathing.completed_breaths(),
            "phase advanced"
        );
        self.enter_phase(at);
    }

    /// Schedule the running phase's timer from `at`, passing through
    /// zero-duration phases without waiting.
    fn enter_phase(&mut self, at: Duration) {
        self.cancel_phase_timer();
        for _ in 0..PHASE_COUNT {
            let Some(seconds) = self.breathing.phase_duration() else {
                return;
            };
            if seconds > 0 {
                let id = self.scheduler.schedule_once(
                    at,
                    Duration::from_secs(u64::from(seconds)),
                    TimerEvent::PhaseElapsed,
                );
                self.phase_timer = Some(id);
                return;
            }
            dispatch_mvi!(self, breathing, BreathingReducer, BreathingIntent::Tick);
            tracing::debug!(
                phase = self.breathing.phase(),
                completed_breaths = self.breathing.completed_breaths(),
                "zero-length phase skipped"
            );
        }
        tracing::error!("pattern has no timed phase; breathing cycle halted");
    }

    fn cancel_phase_timer(&mut self) {
        if let Some(id) = self.phase_timer.take() {
            self.scheduler.cancel(id);
        }
    }
}

//! Cancelable one-shot and periodic timers driven by an explicit clock.
//!
//! Time is a `Duration` measured from an arbitrary origin (the runtime uses
//! the moment the session was created). Nothing fires on its own: the owner
//! calls [`Scheduler::pop_due`] with the current reading and applies each
//! returned event before asking for the next one, so callbacks are strictly
//! serialized.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Timer<E> {
    id: TimerId,
    deadline: Duration,
    period: Option<Duration>,
    event: E,
}

/// A fired timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<E> {
    pub id: TimerId,
    /// The deadline the timer was due at, not the time it was observed.
    pub deadline: Duration,
    pub event: E,
}

#[derive(Debug)]
pub struct Scheduler<E> {
    timers: Vec<Timer<E>>,
    next_id: u64,
}

impl<E: Clone> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `event` to fire once at `now + delay`.
    pub fn schedule_once(&mut self, now: Duration, delay: Duration, event: E) -> TimerId {
        self.insert(now + delay, None, event)
    }

    /// Schedule `event` to fire every `period`, first at `now + period`.
    ///
    /// Panics on a zero period, which would fire forever within one reading.
    pub fn schedule_every(&mut self, now: Duration, period: Duration, event: E) -> TimerId {
        assert!(!period.is_zero(), "periodic timer needs a non-zero period");
        self.insert(now + period, Some(period), event)
    }

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn deadline(&self, id: TimerId) -> Option<Duration> {
        self.timers.iter().find(|t| t.id == id).map(|t| t.deadline)
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.iter().map(|t| t.deadline).min()
    }

    /// Remove and return the earliest timer due at or before `now`.
    ///
    /// Ties are broken by scheduling order. Periodic timers stay pending with
    /// their deadline moved forward by one period.
    pub fn pop_due(&mut self, now: Duration) -> Option<Fired<E>> {
        let position = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= now)
            .min_by_key(|(_, t)| (t.deadline, t.id))
            .map(|(idx, _)| idx)?;

        let timer = &mut self.timers[position];
        match timer.period {
            Some(period) => {
                let fired = Fired {
                    id: timer.id,
                    deadline: timer.deadline,
                    event: timer.event.clone(),
                };
                timer.deadline += period;
                Some(fired)
            }
            None => {
                let timer = self.timers.remove(position);
                Some(Fired {
                    id: timer.id,
                    deadline: timer.deadline,
                    event: timer.event,
                })
            }
        }
    }

    fn insert(&mut self, deadline: Duration, period: Option<Duration>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            deadline,
            period,
            event,
        });
        id
    }
}

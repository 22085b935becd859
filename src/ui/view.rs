//! Render-ready snapshot of the breathing panel.

use std::time::Duration;

use crate::session::Session;

pub const READY: &str = "Ready";
pub const START_ACTION: &str = "Start Breathing Exercise";
pub const STOP_ACTION: &str = "Stop";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreathingView {
    /// A breathing session is running.
    pub active: bool,
    /// Phase label while active (may be empty), `Ready` while idle.
    pub headline: &'static str,
    /// Whole seconds left in a timed phase, counting down to 1.
    pub seconds: Option<u64>,
    /// Shown only while active.
    pub completed_breaths: Option<u64>,
    pub phase: Option<usize>,
    pub expanded: bool,
    /// Highlighted catalog entry; the selector is hidden while active.
    pub selector: Option<usize>,
    pub action: &'static str,
}

impl BreathingView {
    pub fn from_session(session: &Session, now: Duration) -> Self {
        let state = session.breathing();
        match state.active_pattern() {
            None => Self {
                active: false,
                headline: READY,
                seconds: None,
                completed_breaths: None,
                phase: None,
                expanded: false,
                selector: Some(state.selected()),
                action: START_ACTION,
            },
            Some(pattern) => {
                let phase = state.phase();
                let seconds = if pattern.duration(phase) > 0 {
                    session
                        .phase_remaining(now)
                        .map(|left| whole_seconds(left).max(1))
                } else {
                    None
                };
                Self {
                    active: true,
                    headline: pattern.label(phase),
                    seconds,
                    completed_breaths: Some(state.completed_breaths()),
                    phase: Some(phase),
                    expanded: phase < 2,
                    selector: None,
                    action: STOP_ACTION,
                }
            }
        }
    }
}

fn whole_seconds(left: Duration) -> u64 {
    let millis = left.as_millis() as u64;
    millis.div_ceil(1000)
}

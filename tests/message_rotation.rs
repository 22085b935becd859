mod common;

use common::{secs, session_with_messages, session_with_pattern};

#[test]
fn index_after_n_periods_is_n_mod_count() {
    let mut session = session_with_messages(&["one", "two", "three"], secs(8));
    for n in 0..10u64 {
        session.advance(secs(8 * n));
        assert_eq!(session.message_index(), (n % 3) as usize);
    }
}

#[test]
fn message_holds_until_period_elapses() {
    let mut session = session_with_messages(&["one", "two"], secs(8));
    session.advance(secs(7));
    assert_eq!(session.message(), "one");
    session.advance(secs(8));
    assert_eq!(session.message(), "two");
}

#[test]
fn one_late_reading_applies_every_missed_period() {
    let mut session = session_with_pattern(0);
    let applied = session.advance(secs(8 * 16));
    assert_eq!(applied, 16);
    assert_eq!(session.message_index(), 1);
}

#[test]
fn rotation_is_independent_of_breathing() {
    let mut session = session_with_messages(&["a", "b", "c", "d"], secs(8));
    session.start(secs(0));
    session.advance(secs(16));
    session.stop();
    session.advance(secs(24));
    assert_eq!(session.message_index(), 3);
}

#[test]
fn teardown_stops_rotation() {
    let mut session = session_with_messages(&["a", "b"], secs(8));
    assert!(session.is_rotating());
    session.teardown();
    session.advance(secs(80));
    assert_eq!(session.message_index(), 0);
}

mod common;

use calm::ui::app::App;
use calm::ui::input::{handle_key, Command};
use calm::ui::render::draw;
use common::{secs, session_with_pattern};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Duration;

fn render(app: &App, now: Duration) -> String {
    render_sized(app, now, 100, 40)
}

fn render_sized(app: &App, now: Duration, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal
        .draw(|frame| draw(frame, app, now))
        .expect("draw succeeds");
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, code: KeyCode, now: Duration) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), now);
}

#[test]
fn idle_screen_shows_ready_selector_and_first_message() {
    let app = App::new(session_with_pattern(0));
    let screen = render(&app, Duration::ZERO);

    assert!(screen.contains("Find Your Calm"));
    assert!(screen.contains("Take a deep breath. You've got this."));
    assert!(screen.contains("Ready"));
    assert!(screen.contains("Box Breathing"));
    assert!(screen.contains("Simple Breathing"));
    assert!(screen.contains("Start Breathing Exercise"));
    assert!(!screen.contains("Breaths completed"));
    assert!(screen.contains("Practice Gratitude"));
}

#[test]
fn active_screen_shows_phase_countdown_and_count() {
    let mut app = App::new(session_with_pattern(0));
    press(&mut app, KeyCode::Enter, Duration::ZERO);

    let screen = render(&app, Duration::ZERO);
    assert!(screen.contains("Breathe In"));
    assert!(screen.contains("Breaths completed: 0"));
    assert!(screen.contains("Stop"));
    assert!(!screen.contains("Ready"));
    // Selector is hidden while active.
    assert!(!screen.contains("Simple Breathing"));
}

#[test]
fn keys_select_then_start_chosen_pattern() {
    let mut app = App::new(session_with_pattern(0));
    press(&mut app, KeyCode::Char('2'), Duration::ZERO);
    press(&mut app, KeyCode::Right, Duration::ZERO);
    assert_eq!(app.session().breathing().selected(), 2);

    press(&mut app, KeyCode::Char(' '), Duration::ZERO);
    let pattern = app.session().breathing().active_pattern().copied();
    assert_eq!(pattern.map(|p| p.durations), Some([5, 0, 5, 0]));

    // Selection keys do nothing mid-session.
    press(&mut app, KeyCode::Left, secs(1));
    assert_eq!(app.session().breathing().selected(), 2);
}

#[test]
fn left_wraps_to_last_pattern() {
    let mut app = App::new(session_with_pattern(0));
    press(&mut app, KeyCode::Left, Duration::ZERO);
    assert_eq!(app.session().breathing().selected(), 2);
}

#[test]
fn message_changes_after_period() {
    let mut app = App::new(session_with_pattern(0));
    app.on_tick(secs(8));
    let screen = render(&app, secs(8));
    assert!(screen.contains("Every storm runs out of rain."));
}

#[test]
fn quit_command_sets_flag() {
    let mut app = App::new(session_with_pattern(0));
    app.apply(Command::Quit, Duration::ZERO);
    assert!(app.should_quit());
}

#[test]
fn wait_budget_never_exceeds_next_timer() {
    let mut app = App::new(session_with_pattern(0));
    app.apply(Command::Toggle, Duration::ZERO);
    let budget = app.wait_budget(Duration::from_millis(3_900), Duration::from_millis(250));
    assert_eq!(budget, Duration::from_millis(100));
}

#[test]
fn layout_follows_frame_size_after_resize() {
    let mut app = App::new(session_with_pattern(0));
    press(&mut app, KeyCode::Enter, Duration::ZERO);

    let wide = render_sized(&app, Duration::ZERO, 120, 44);
    let narrow = render_sized(&app, Duration::ZERO, 90, 34);
    for screen in [&wide, &narrow] {
        assert!(screen.contains("Breathe In"));
        assert!(screen.contains("Breaths completed: 0"));
    }
    assert_eq!(narrow.lines().count(), 34);
    assert!(narrow.lines().all(|line| line.chars().count() == 90));
}

#[test]
fn footer_hints_follow_session_activity() {
    let mut app = App::new(session_with_pattern(0));
    assert!(render(&app, Duration::ZERO).contains("1-3"));

    press(&mut app, KeyCode::Enter, Duration::ZERO);
    let screen = render(&app, Duration::ZERO);
    assert!(screen.contains("Enter: Stop"));
    assert!(!screen.contains("1-3"));
}

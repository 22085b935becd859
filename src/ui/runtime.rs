use crate::session::Session;
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::{Context, Result};
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

use crate::catalog::MessageList;

/// Everything the event loop needs to mount a session.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub messages: MessageList,
    pub message_interval: Duration,
    pub tick_rate: Duration,
    pub pattern: usize,
    pub start_immediately: bool,
}

pub fn run(settings: RunSettings) -> Result<()> {
    let shutdown = ShutdownCoordinator::new();
    shutdown
        .register_signals()
        .context("Failed to register signal handlers")?;

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let clock = Instant::now();
    let tick_rate = settings.tick_rate;
    let mut session = Session::new(
        settings.messages,
        settings.message_interval,
        settings.pattern,
        Duration::ZERO,
    );
    if settings.start_immediately {
        session.start(Duration::ZERO);
    }
    let mut app = App::new(session);
    let events = EventHandler::new(tick_rate, shutdown.handle());
    tracing::info!(pattern = settings.pattern, "session mounted");

    loop {
        let now = clock.elapsed();
        app.on_tick(now);
        terminal.draw(|frame| draw(frame, &app, now))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(app.wait_budget(now, tick_rate)) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, clock.elapsed()),
            // The next draw picks up the new size.
            Ok(AppEvent::Tick | AppEvent::Resize) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    app.teardown();
    drop(guard);
    tracing::info!("session unmounted");
    Ok(())
}

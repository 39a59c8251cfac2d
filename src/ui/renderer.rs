//! Terminal setup and the main event loop

use crate::config::Config;
use crate::logger::Logger;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout};

/// Runs a restore step when dropped, including on early return and unwind.
pub struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    pub fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Leave raw mode and the alternate screen. Every step is best effort so a
/// failure in one still runs the others.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        log::warn!("Failed to disable raw mode: {}", e);
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show) {
        log::warn!("Failed to restore terminal screen: {}", e);
    }
}

type TerminalGuard = RestoreGuard<fn()>;

/// Enter raw mode and the alternate screen. The returned guard undoes both.
fn init_terminal(mouse_enabled: bool) -> Result<(TerminalGuard, Terminal<CrosstermBackend<Stdout>>)> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    // From here on, an early return drops the guard and restores the terminal
    let guard: TerminalGuard = RestoreGuard::new(restore_terminal as fn());

    let mut stdout = io::stdout();
    if mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("Failed to enter alternate screen")?;
    } else {
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    }
    let terminal = Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
    Ok((guard, terminal))
}

/// Run the drawer shell until the user quits
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    // Build the shell before touching the terminal so config errors print normally
    let mut app = AppComponent::new(&config, logger)?;

    let (_guard, mut terminal) = init_terminal(config.ui.mouse_enabled)?;
    let mut event_handler = EventHandler::new();

    let result = match app.init() {
        Ok(()) => run_app_loop(&mut terminal, &mut app, &mut event_handler).await,
        Err(e) => Err(e),
    };
    app.destroy();

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Tick | EventType::Other => {}
            event => {
                app.handle_event(event);
                needs_render = true;
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

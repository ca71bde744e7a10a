//! The live dashboard renderer.
//!
//! Runs on its own thread and owns the terminal. Domain updates arrive as
//! [`UiEvent`]s from the handler thread; user intent that needs the backend
//! goes back as [`AppSignal`]s. The 50 ms tick drives counter animation and
//! toast expiry.

mod app;
mod components;
mod tui_event;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use app::AppState;
pub use app::ViewConfig;
pub use tui_event::{AppSignal, UiEvent};

pub struct TuiRenderer {
    view: ViewConfig,
}

impl TuiRenderer {
    pub fn new(view: ViewConfig) -> Self {
        TuiRenderer { view }
    }

    pub fn run(self, rx: Receiver<UiEvent>, signal_tx: Sender<AppSignal>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let mut state = AppState::new(self.view);

        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        while !state.should_quit {
            state.on_tick();
            terminal.draw(|f| {
                ui::draw(f, &mut state);
            })?;

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(signal) = state.handle_key(key) {
                        // Ignore send errors if the handler has gone away.
                        let _ = signal_tx.send(signal);
                    }
                }
            }

            while let Ok(ui_event) = rx.try_recv() {
                state.apply(ui_event);
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
            }
        }

        let _ = signal_tx.send(AppSignal::Quit);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }
}

//! Main TUI application.

use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::store::{Action, Store};

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::{Focus, Popup, UiState};

/// Wake-up interval when no timer is armed.
const IDLE_WAIT: Duration = Duration::from_millis(250);

/// Main TUI application.
pub struct App {
    store: Store,
    ui: UiState,
    should_quit: bool,
}

impl App {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            ui: UiState::new(),
            should_quit: false,
        }
    }

    /// Runs the TUI application until the user quits.
    pub fn run(mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new();
        info!("tui started");

        let result = self.event_loop(&mut terminal, &events);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        info!(ticks = self.store.ticks(), "tui stopped");
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &EventHandler,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|frame| render(frame, &self.store, &mut self.ui))?;

            let timeout = match self.store.next_deadline() {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => IDLE_WAIT,
            };

            match events.next_timeout(timeout) {
                Ok(Event::Key(key)) => match handle_key(&mut self.ui, &self.store, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::Dispatch(action) => self.dispatch(action),
                    KeyAction::None => {}
                },
                // next draw picks up the new size
                Ok(Event::Resize(width, height)) => debug!(width, height, "terminal resized"),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => self.should_quit = true,
            }

            self.store.fire_due(Instant::now());

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Forwards an action to the store; guard violations become an alert.
    fn dispatch(&mut self, action: Action) {
        let disconnecting = matches!(action, Action::Disconnect);
        if let Err(e) = self.store.dispatch(action, Instant::now()) {
            debug!(error = %e, "action rejected");
            self.ui.popup = Popup::Alert(e.to_string());
            return;
        }
        if disconnecting {
            self.ui.focus = Focus::Workspace;
            self.ui.explorer_cursor = 0;
            self.ui.reset_scroll();
        }
    }
}

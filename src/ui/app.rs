//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::Event as PollerEvent;
use crate::runtime::PollerControl;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub step_size: u64,
    pub poll_interval_ms: u64,
}

impl UIConfig {
    pub fn new(with_background_color: bool, step_size: u64, poll_interval_ms: u64) -> Self {
        Self {
            with_background_color,
            step_size,
            poll_interval_ms,
        }
    }
}

/// What a key press asks the application to do
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum KeyAction {
    Quit,
    TogglePause,
    None,
}

fn key_action(key: &KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => KeyAction::TogglePause,
        _ => KeyAction::None,
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// Dashboard being displayed.
    dashboard: DashboardState,

    /// Receives events from the poller task.
    event_receiver: mpsc::Receiver<PollerEvent>,

    /// Pause and shutdown handle for the poller.
    control: PollerControl,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<PollerEvent>,
        control: PollerControl,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            dashboard: DashboardState::new(environment, Instant::now(), ui_config),
            event_receiver,
            control,
        }
    }
}

/// Runs the dashboard in a loop until the user quits or the poller is shut down.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        if app.control.is_shutdown() {
            return Ok(());
        }

        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            app.dashboard.add_event(event);
        }
        app.dashboard.update();
        terminal.draw(|f| render_dashboard(f, &app.dashboard))?;

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match key_action(&key) {
                    KeyAction::Quit => {
                        app.control.shutdown();
                        return Ok(());
                    }
                    KeyAction::TogglePause => app.control.toggle_pause(),
                    KeyAction::None => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        let press = |code, modifiers| KeyEvent::new(code, modifiers);
        assert_eq!(
            key_action(&press(KeyCode::Char('q'), KeyModifiers::NONE)),
            KeyAction::Quit
        );
        assert_eq!(
            key_action(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(
            key_action(&press(KeyCode::Char('p'), KeyModifiers::NONE)),
            KeyAction::TogglePause
        );
        assert_eq!(
            key_action(&press(KeyCode::Char('c'), KeyModifiers::NONE)),
            KeyAction::None
        );
    }
}

//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::ui::{self, UIConfig};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the application in TUI mode
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. UI application initialization and execution
/// 3. Proper shutdown handling
///
/// # Arguments
/// * `session` - Session data from setup
/// * `with_background` - Whether to enable background colors
///
/// # Returns
/// * `Ok(())` - TUI mode completed successfully
/// * `Err` - TUI mode failed
pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", &session.config.environment);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let ui_config = UIConfig::new(
        with_background,
        session.config.step_size,
        session.config.poll_interval_ms,
    );
    let app = ui::App::new(
        session.config.environment.clone(),
        session.event_receiver,
        session.control.clone(),
        ui_config,
    );

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Stop the poller even if the UI loop failed
    session.control.shutdown();
    result?;

    print_session_shutdown();
    session.join_handle.await?;
    print_session_exit_success();

    Ok(())
}

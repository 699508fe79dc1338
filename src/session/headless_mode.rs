//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::Event;
use crate::logging::init_console_logger;
use std::error::Error;

/// One console line per successful poll.
pub fn format_update_line(event: &Event) -> Option<String> {
    let update = event.update.as_ref()?;
    Some(format!(
        "[{}] step {} | {} | O2 {:.4} | CO2 {:.4} | water {:.2}",
        event.timestamp,
        update.sample.step_num,
        update.sol_label,
        update.sample.avg_oxygen_pressure,
        update.sample.avg_carbon_dioxide,
        update.sample.total_water
    ))
}

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console event logging
/// 2. Ctrl+C shutdown handling
/// 3. Event loop management
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - Headless mode completed successfully
/// * `Err` - Headless mode failed
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    init_console_logger()?;
    print_session_starting("headless", &session.config.environment);

    // Trigger shutdown on Ctrl+C
    let control = session.control.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            control.shutdown();
        }
    });

    let shutdown = session.control.shutdown_token();

    // Event loop: log events to console until shutdown
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if let Some(line) = format_update_line(&event) {
                    println!("{}", line);
                } else if event.should_display() {
                    println!("{}", event);
                }
            }
            _ = shutdown.cancelled() => {
                break;
            }
        }
    }

    // Wait for the poller to finish
    print_session_shutdown();
    let state = session.join_handle.await?;
    if let Some(step) = state.last_step() {
        log::info!("Last step received: {}", step);
    }
    print_session_exit_success();

    Ok(())
}

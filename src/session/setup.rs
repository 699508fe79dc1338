//! Session setup and initialization

use crate::config::Config;
use crate::events::Event;
use crate::poller::{PollerConfig, PollerState};
use crate::runtime::{PollerControl, start_poller};
use crate::step_api::{StepClient, StepSource};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for poller events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Join handle for the poller task
    pub join_handle: JoinHandle<PollerState>,
    /// Pause and shutdown handle
    pub control: PollerControl,
    /// Resolved configuration
    pub config: Config,
}

/// Sets up a polling session
///
/// This function handles the setup shared by TUI and headless modes:
/// 1. Validates the configuration
/// 2. Creates the step client
/// 3. Starts the poller task
///
/// # Arguments
/// * `config` - Resolved configuration (file values with CLI overrides applied)
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - Session setup failed
pub fn setup_session(config: Config) -> Result<SessionData, Box<dyn Error>> {
    config.validate()?;

    let client = StepClient::new(config.environment.clone())?;
    log::debug!("Polling {}", client.environment().base_url());
    let (event_receiver, join_handle, control) =
        start_poller(Arc::new(client), PollerConfig::from(&config));

    Ok(SessionData {
        event_receiver,
        join_handle,
        control,
        config,
    })
}

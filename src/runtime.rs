//! Runtime for the step poller task

use crate::consts::cli_consts::{COMMAND_QUEUE_SIZE, EVENT_QUEUE_SIZE};
use crate::events::Event;
use crate::poller::{EventSender, PollerCommand, PollerConfig, PollerState, StepPoller};
use crate::step_api::StepSource;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Handle used by the UI to steer a running poller.
#[derive(Debug, Clone)]
pub struct PollerControl {
    commands: mpsc::Sender<PollerCommand>,
    shutdown: CancellationToken,
}

impl PollerControl {
    /// Flip between running and paused. Dropped if the command queue is full.
    pub fn toggle_pause(&self) {
        let _ = self.commands.try_send(PollerCommand::TogglePause);
    }

    /// Stop the poller; pending requests are abandoned.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }
}

/// Spawn the poller task.
pub fn start_poller(
    source: Arc<dyn StepSource>,
    config: PollerConfig,
) -> (mpsc::Receiver<Event>, JoinHandle<PollerState>, PollerControl) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (command_sender, command_receiver) = mpsc::channel(COMMAND_QUEUE_SIZE);
    let shutdown = CancellationToken::new();

    let poller = StepPoller::new(source, config, EventSender::new(event_sender));
    let join_handle = tokio::spawn(poller.run(command_receiver, shutdown.clone()));

    let control = PollerControl {
        commands: command_sender,
        shutdown,
    };
    (event_receiver, join_handle, control)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::events::PollerStatus;
    use crate::step_api::{MockStepSource, StepSample};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_control_pauses_and_stops_poller() {
        let mut source = MockStepSource::new();
        source.expect_get_step().returning(|_| {
            Ok(StepSample {
                avg_oxygen_pressure: 0.2,
                avg_carbon_dioxide: 0.05,
                total_water: 500.0,
                step_num: 48,
            })
        });

        let (mut events, handle, control) =
            start_poller(Arc::new(source), PollerConfig::from(&Config::default()));

        tokio::time::sleep(Duration::from_millis(200)).await;
        control.toggle_pause();
        tokio::time::sleep(Duration::from_millis(200)).await;
        control.shutdown();
        assert!(control.is_shutdown());

        let state = handle.await.unwrap();
        assert!(!state.is_running());
        assert_eq!(state.last_step(), Some(48));

        let mut statuses = Vec::new();
        let mut labels = Vec::new();
        while let Ok(event) = events.try_recv() {
            statuses.extend(event.poller_status);
            labels.extend(event.update.map(|u| u.sol_label));
        }
        assert_eq!(statuses, vec![PollerStatus::Running, PollerStatus::Paused]);
        assert_eq!(labels, vec!["Mars: Sol 2".to_string()]);
    }
}

//! Step poller task
//!
//! One tokio task owns the `PollerState`. It waits on the shutdown token,
//! the tick interval, pause commands and pending requests, and is the only
//! place the state is mutated.

use super::core::{EventSender, PauseBehavior, PollerConfig};
use super::state::{PollerState, TickOutcome};
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType, PollerStatus};
use crate::logging::LogLevel;
use crate::step_api::error::StepApiError;
use crate::step_api::{StepRequest, StepSample, StepSource};
use futures::StreamExt;
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Commands accepted by a running poller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PollerCommand {
    TogglePause,
    SetRunning(bool),
}

type PendingPoll = BoxFuture<'static, (StepRequest, Result<StepSample, StepApiError>)>;

pub struct StepPoller {
    source: Arc<dyn StepSource>,
    state: PollerState,
    config: PollerConfig,
    event_sender: EventSender,
    error_classifier: ErrorClassifier,
    in_flight: FuturesUnordered<PendingPoll>,
}

impl StepPoller {
    pub fn new(source: Arc<dyn StepSource>, config: PollerConfig, event_sender: EventSender) -> Self {
        Self {
            source,
            state: PollerState::new(config.step_size, !config.start_paused),
            config,
            event_sender,
            error_classifier: ErrorClassifier::new(),
            in_flight: FuturesUnordered::new(),
        }
    }

    /// Run until `shutdown` is cancelled. Pending requests are dropped on exit.
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<PollerCommand>,
        shutdown: CancellationToken,
    ) -> PollerState {
        let mut ticker = tokio::time::interval(self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.send_status("Poller started").await;

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => self.on_tick().await,
                Some(command) = commands.recv() => self.on_command(command).await,
                Some((request, result)) = self.in_flight.next(), if !self.in_flight.is_empty() => {
                    self.on_response(request, result).await;
                }
            }
        }

        self.state
    }

    async fn on_tick(&mut self) {
        match self.state.tick(self.in_flight.len(), self.config.overlap_policy) {
            TickOutcome::Paused => {}
            TickOutcome::Busy => {
                self.event_sender
                    .send_poller_event(
                        "Previous request still pending, skipping tick".to_string(),
                        EventType::Waiting,
                        LogLevel::Debug,
                    )
                    .await;
            }
            TickOutcome::Requested(request) => {
                let source = Arc::clone(&self.source);
                self.in_flight.push(Box::pin(async move {
                    let result = source.get_step(request).await;
                    (request, result)
                }));
            }
        }
    }

    async fn on_response(
        &mut self,
        request: StepRequest,
        result: Result<StepSample, StepApiError>,
    ) {
        let target = match request {
            StepRequest::Current => "current step".to_string(),
            StepRequest::Step(n) => format!("step {}", n),
        };
        match self.state.apply(result) {
            Ok(Some(update)) => self.event_sender.send_event(Event::poll_update(update)).await,
            Ok(None) => {
                self.event_sender
                    .send_poller_event(
                        format!("Discarded out-of-order response for {}", target),
                        EventType::Refresh,
                        LogLevel::Debug,
                    )
                    .await;
            }
            Err(e) => {
                let log_level = self.error_classifier.classify_poll_error(&e);
                self.event_sender
                    .send_poller_event(
                        format!("Failed to fetch {}: {}", target, e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
            }
        }
    }

    async fn on_command(&mut self, command: PollerCommand) {
        let running = match command {
            PollerCommand::TogglePause => !self.state.is_running(),
            PollerCommand::SetRunning(running) => running,
        };
        if running == self.state.is_running() {
            return;
        }

        match self.config.pause_behavior {
            // Resuming is still honored so a poller started paused can run
            PauseBehavior::Ignore if !running => {
                self.event_sender
                    .send_poller_event(
                        "Pause is disabled".to_string(),
                        EventType::Refresh,
                        LogLevel::Debug,
                    )
                    .await;
                return;
            }
            PauseBehavior::CancelInFlight if !running => {
                let dropped = self.in_flight.len();
                self.in_flight = FuturesUnordered::new();
                if dropped > 0 {
                    self.event_sender
                        .send_poller_event(
                            format!("Cancelled {} pending request(s)", dropped),
                            EventType::Refresh,
                            LogLevel::Debug,
                        )
                        .await;
                }
            }
            _ => {}
        }

        self.state.set_running(running);
        let msg = if running { "Polling resumed" } else { "Polling paused" };
        self.send_status(msg).await;
    }

    async fn send_status(&mut self, msg: &str) {
        let status = if self.state.is_running() {
            PollerStatus::Running
        } else {
            PollerStatus::Paused
        };
        self.event_sender
            .send_event(Event::state_change(status, msg.to_string()))
            .await;
    }
}

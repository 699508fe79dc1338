//! Core poller utilities and configuration

use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc;

/// Common event sending utilities for the poller
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    pub async fn send_poller_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::poller_with_level(message, event_type, log_level))
            .await;
    }
}

/// What the pause control does.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PauseBehavior {
    /// Pause requests are accepted but have no effect.
    Ignore,
    /// Ticks become no-ops while paused; pending requests still land.
    #[default]
    SkipTicks,
    /// Like `SkipTicks`, and pending requests are dropped when pausing.
    CancelInFlight,
}

/// What a tick does while an earlier request is still pending.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Drop the tick.
    #[default]
    Skip,
    /// Start another request anyway; a response older than the last applied one is dropped.
    Allow,
}

/// Poller configuration
#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub interval: Duration,
    pub step_size: u64,
    pub start_paused: bool,
    pub pause_behavior: PauseBehavior,
    pub overlap_policy: OverlapPolicy,
}

impl From<&crate::config::Config> for PollerConfig {
    fn from(config: &crate::config::Config) -> Self {
        Self {
            interval: Duration::from_millis(config.poll_interval_ms),
            step_size: config.step_size,
            start_paused: config.start_paused,
            pause_behavior: config.pause_behavior,
            overlap_policy: config.overlap_policy,
        }
    }
}

//! Event System
//!
//! Types and implementations for poller events and logging

use crate::logging::{LogLevel, should_log_with_env};
use crate::poller::PollUpdate;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Task that polls the simulation server for step data.
    StepPoller,
    /// Pause/resume handling.
    Control,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
    StateChange,
}

/// Whether the poller is issuing requests
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum PollerStatus {
    Running,
    Paused,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Set on state change events
    pub poller_status: Option<PollerStatus>,
    /// Set on successful polls; carries the values for the chart and date display
    pub update: Option<PollUpdate>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            poller_status: None,
            update: None,
        }
    }

    pub fn state_change(status: PollerStatus, msg: String) -> Self {
        Self {
            poller_status: Some(status),
            ..Self::new(Worker::Control, msg, EventType::StateChange, LogLevel::Info)
        }
    }

    pub fn poll_update(update: PollUpdate) -> Self {
        let msg = format!(
            "Step {} received ({})",
            update.sample.step_num, update.sol_label
        );
        Self {
            update: Some(update),
            ..Self::new(Worker::StepPoller, msg, EventType::Success, LogLevel::Debug)
        }
    }

    pub fn poller_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::StepPoller, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // StateChange events are shown in the header, not in the logs
        if self.event_type == EventType::StateChange {
            return false;
        }
        if self.event_type == EventType::Error && self.log_level >= LogLevel::Warn {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

//! Dashboard state management
//!
//! Contains the main dashboard state struct

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::{Event as PollerEvent, PollerStatus};
use crate::step_api::StepSample;
use crate::ui::app::UIConfig;
use crate::ui::chart::ChartState;

use std::collections::VecDeque;
use std::time::Instant;

/// Dashboard state: the last rendered readouts, chart and date label.
#[derive(Debug)]
pub struct DashboardState {
    /// The server being polled.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Steps advanced per poll.
    pub step_size: u64,
    /// Poll cadence in milliseconds.
    pub poll_interval_ms: u64,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<PollerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<PollerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,

    /// Values shown in the bar chart
    pub chart: ChartState,
    /// Animation tick counter
    pub tick: usize,

    /// Last successfully received sample; frozen while polls fail
    latest_sample: Option<StepSample>,
    /// Current-date display text, e.g. "Mars: Sol 2"
    sol_label: Option<String>,
    /// Timestamp of the last successful poll
    last_update_timestamp: Option<String>,
    poller_status: PollerStatus,
    polls_succeeded: u64,
    polls_failed: u64,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            start_time,
            step_size: ui_config.step_size,
            poll_interval_ms: ui_config.poll_interval_ms,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            chart: ChartState::default(),
            tick: 0,
            latest_sample: None,
            sol_label: None,
            last_update_timestamp: None,
            poller_status: PollerStatus::Running,
            polls_succeeded: 0,
            polls_failed: 0,
        }
    }

    pub fn latest_sample(&self) -> Option<&StepSample> {
        self.latest_sample.as_ref()
    }

    pub fn sol_label(&self) -> Option<&str> {
        self.sol_label.as_deref()
    }

    pub fn last_update_timestamp(&self) -> Option<&str> {
        self.last_update_timestamp.as_deref()
    }

    pub fn poller_status(&self) -> PollerStatus {
        self.poller_status
    }

    pub fn polls_succeeded(&self) -> u64 {
        self.polls_succeeded
    }

    pub fn polls_failed(&self) -> u64 {
        self.polls_failed
    }

    // Setters for the updaters
    pub(super) fn set_poller_status(&mut self, status: PollerStatus) {
        self.poller_status = status;
    }

    pub(super) fn record_sample(&mut self, sample: StepSample, sol_label: String, timestamp: String) {
        self.chart.update(
            sample.avg_oxygen_pressure,
            sample.avg_carbon_dioxide,
            sample.total_water,
        );
        self.sol_label = Some(sol_label);
        self.latest_sample = Some(sample);
        self.last_update_timestamp = Some(timestamp);
        self.polls_succeeded += 1;
    }

    pub(super) fn record_failure(&mut self) {
        self.polls_failed += 1;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: PollerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: PollerEvent) {
        self.pending_events.push_back(event);
    }
}

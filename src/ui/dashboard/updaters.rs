//! Dashboard state update logic
//!
//! Contains the methods for updating dashboard state from poller events

use super::state::DashboardState;
use crate::events::{Event as PollerEvent, EventType};

impl DashboardState {
    /// Advance the animation tick and apply queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
            self.add_to_activity_log(event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &PollerEvent) {
        if let Some(update) = &event.update {
            self.record_sample(
                update.sample.clone(),
                update.sol_label.clone(),
                event.timestamp.clone(),
            );
        }

        match event.event_type {
            EventType::Error => self.record_failure(),
            EventType::StateChange => {
                if let Some(status) = event.poller_status {
                    self.set_poller_status(status);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::events::PollerStatus;
    use crate::logging::LogLevel;
    use crate::poller::PollUpdate;
    use crate::step_api::StepSample;
    use crate::ui::app::UIConfig;
    use std::time::Instant;

    fn dashboard() -> DashboardState {
        DashboardState::new(
            Environment::Local,
            Instant::now(),
            UIConfig::new(false, 1, 1000),
        )
    }

    fn update_event(step_num: u64, oxygen: f64) -> PollerEvent {
        PollerEvent::poll_update(PollUpdate {
            sample: StepSample {
                avg_oxygen_pressure: oxygen,
                avg_carbon_dioxide: 0.04,
                total_water: 1000.0,
                step_num,
            },
            sol_label: crate::sol::sol_label(step_num),
        })
    }

    fn failure_event() -> PollerEvent {
        PollerEvent::poller_with_level(
            "Failed to fetch step 2: HTTP error with status 503: down".to_string(),
            EventType::Error,
            LogLevel::Warn,
        )
    }

    #[test]
    // The first update feeds the chart and the date display.
    fn test_update_renders_sample() {
        let mut state = dashboard();
        state.add_event(update_event(0, 0.21));
        state.update();

        assert_eq!(state.sol_label(), Some("Mars: Sol 1"));
        assert_eq!(state.chart.values(), [0.21, 0.04, 1000.0]);
        assert_eq!(state.latest_sample().map(|s| s.step_num), Some(0));
        assert_eq!(state.polls_succeeded(), 1);
        assert_eq!(state.activity_logs.len(), 1);
    }

    #[test]
    // Repeated failures leave label and chart at the last good values.
    fn test_failures_freeze_display() {
        let mut state = dashboard();
        state.add_event(update_event(30, 0.2));
        state.update();

        for _ in 0..3 {
            state.add_event(failure_event());
        }
        state.update();

        assert_eq!(state.sol_label(), Some("Mars: Sol 2"));
        assert_eq!(state.chart.values(), [0.2, 0.04, 1000.0]);
        assert_eq!(state.chart.bar_heights(), [1000, 1000, 1000]);
        assert_eq!(state.polls_failed(), 3);
    }

    #[test]
    fn test_state_change_sets_status() {
        let mut state = dashboard();
        state.add_event(PollerEvent::state_change(
            PollerStatus::Paused,
            "Polling paused".to_string(),
        ));
        state.update();
        assert_eq!(state.poller_status(), PollerStatus::Paused);
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = dashboard();
        for _ in 0..(crate::consts::cli_consts::MAX_ACTIVITY_LOGS + 10) {
            state.add_event(failure_event());
        }
        state.update();
        assert_eq!(
            state.activity_logs.len(),
            crate::consts::cli_consts::MAX_ACTIVITY_LOGS
        );
    }
}

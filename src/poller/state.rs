//! Poller state and the pure tick logic
//!
//! The poller task owns one `PollerState`. Deciding what a tick does and
//! folding a response back into the state are plain functions on it, so
//! the timing loop stays thin.

use super::core::OverlapPolicy;
use crate::sol::sol_label;
use crate::step_api::error::StepApiError;
use crate::step_api::{StepNumber, StepRequest, StepSample};

/// Values published after a successful poll.
#[derive(Debug, Clone, PartialEq)]
pub struct PollUpdate {
    pub sample: StepSample,
    /// Text for the current-date display, e.g. "Mars: Sol 3"
    pub sol_label: String,
}

/// What a timer tick decided to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Poller is paused; nothing happens.
    Paused,
    /// A request is still pending and overlapping requests are not allowed.
    Busy,
    /// Issue this request.
    Requested(StepRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerState {
    running: bool,
    step_size: u64,
    last_step: Option<StepNumber>,
}

impl PollerState {
    /// A step size of 0 is treated as 1.
    pub fn new(step_size: u64, running: bool) -> Self {
        Self {
            running,
            step_size: step_size.max(1),
            last_step: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Step number of the last successful poll, as reported by the server.
    pub fn last_step(&self) -> Option<StepNumber> {
        self.last_step
    }

    /// The request the next tick would issue.
    pub fn next_request(&self) -> StepRequest {
        match self.last_step {
            None => StepRequest::Current,
            Some(last) => StepRequest::Step(last.saturating_add(self.step_size)),
        }
    }

    /// Decide what a timer tick does given the number of requests still pending.
    pub fn tick(&self, in_flight: usize, overlap: OverlapPolicy) -> TickOutcome {
        if !self.running {
            return TickOutcome::Paused;
        }
        if in_flight > 0 && overlap == OverlapPolicy::Skip {
            return TickOutcome::Busy;
        }
        TickOutcome::Requested(self.next_request())
    }

    /// Fold a poll result into the state.
    ///
    /// On success the server's `step_num` becomes the last step, whatever was
    /// requested. A sample older than the last step (a slow response overtaken
    /// by a newer one) is dropped and yields `Ok(None)`, so the last step never
    /// moves backwards. On failure the state is left untouched and the error
    /// handed back.
    pub fn apply(
        &mut self,
        result: Result<StepSample, StepApiError>,
    ) -> Result<Option<PollUpdate>, StepApiError> {
        let sample = result?;
        if self.last_step.is_some_and(|last| sample.step_num < last) {
            return Ok(None);
        }
        self.last_step = Some(sample.step_num);
        Ok(Some(PollUpdate {
            sol_label: sol_label(sample.step_num),
            sample,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(step_num: StepNumber) -> StepSample {
        StepSample {
            avg_oxygen_pressure: 0.21,
            avg_carbon_dioxide: 0.04,
            total_water: 1000.0,
            step_num,
        }
    }

    fn server_error() -> StepApiError {
        StepApiError::Http {
            status: 503,
            message: "unavailable".to_string(),
        }
    }

    #[test]
    // Nothing recorded yet: ask for the current step.
    fn test_first_tick_requests_current_step() {
        let state = PollerState::new(1, true);
        assert_eq!(
            state.tick(0, OverlapPolicy::Skip),
            TickOutcome::Requested(StepRequest::Current)
        );
    }

    #[test]
    fn test_next_request_adds_step_size() {
        for step_size in [1, 2, 7, 24] {
            for last in [0, 1, 99, 8760] {
                let mut state = PollerState::new(step_size, true);
                state.apply(Ok(sample(last))).unwrap();
                assert_eq!(
                    state.next_request(),
                    StepRequest::Step(last + step_size),
                    "last={last} step_size={step_size}"
                );
            }
        }
    }

    #[test]
    fn test_zero_step_size_is_clamped() {
        let mut state = PollerState::new(0, true);
        state.apply(Ok(sample(3))).unwrap();
        assert_eq!(state.next_request(), StepRequest::Step(4));
    }

    #[test]
    // A response overtaken by a newer one publishes nothing.
    fn test_older_sample_is_discarded() {
        let mut state = PollerState::new(1, true);
        assert!(state.apply(Ok(sample(6))).unwrap().is_some());

        assert_eq!(state.apply(Ok(sample(5))).unwrap(), None);
        assert_eq!(state.last_step(), Some(6));
        assert_eq!(state.next_request(), StepRequest::Step(7));

        // Same step again is not a regression
        assert!(state.apply(Ok(sample(6))).unwrap().is_some());
    }

    #[test]
    // The server's step number wins over the locally computed one.
    fn test_apply_uses_returned_step_num() {
        let mut state = PollerState::new(5, true);
        state.apply(Ok(sample(10))).unwrap();
        assert_eq!(state.next_request(), StepRequest::Step(15));

        state.apply(Ok(sample(12))).unwrap();
        assert_eq!(state.last_step(), Some(12));
        assert_eq!(state.next_request(), StepRequest::Step(17));
    }

    #[test]
    fn test_failed_poll_leaves_state_unchanged() {
        let mut state = PollerState::new(1, true);
        state.apply(Ok(sample(4))).unwrap();
        let before = state.clone();

        let result = state.apply(Err(server_error()));

        assert!(result.is_err());
        assert_eq!(state, before);
        assert_eq!(state.next_request(), StepRequest::Step(5));
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let mut state = PollerState::new(1, false);
        state.apply(Ok(sample(3))).unwrap();
        let before = state.clone();

        assert_eq!(state.tick(0, OverlapPolicy::Allow), TickOutcome::Paused);
        assert_eq!(state, before);
    }

    #[test]
    fn test_overlap_policy_gates_pending_requests() {
        let state = PollerState::new(1, true);
        assert_eq!(state.tick(1, OverlapPolicy::Skip), TickOutcome::Busy);
        assert_eq!(
            state.tick(3, OverlapPolicy::Allow),
            TickOutcome::Requested(StepRequest::Current)
        );
    }

    #[test]
    fn test_initial_load_then_next_step() {
        let mut state = PollerState::new(1, true);

        assert_eq!(state.next_request(), StepRequest::Current);
        let update = state.apply(Ok(sample(0))).unwrap().unwrap();
        assert_eq!(update.sol_label, "Mars: Sol 1");
        assert_eq!(update.sample.avg_oxygen_pressure, 0.21);
        assert_eq!(update.sample.avg_carbon_dioxide, 0.04);
        assert_eq!(update.sample.total_water, 1000.0);

        assert_eq!(state.next_request(), StepRequest::Step(1));
        let update = state.apply(Ok(sample(1))).unwrap().unwrap();
        assert_eq!(update.sol_label, "Mars: Sol 1");
    }
}

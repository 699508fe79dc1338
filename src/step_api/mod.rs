use crate::environment::Environment;
use crate::step_api::error::StepApiError;
use serde::{Deserialize, Serialize};

pub(crate) mod client;
pub use client::StepClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Identifier of one discrete simulation step.
pub type StepNumber = u64;

/// Aggregate metrics for one simulation step, as served by `/get_step`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSample {
    pub avg_oxygen_pressure: f64,
    #[serde(rename = "avg_carbonDioxide")]
    pub avg_carbon_dioxide: f64,
    pub total_water: f64,
    pub step_num: StepNumber,
}

/// Which step to ask the server for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepRequest {
    /// Whatever step the server currently holds (no query parameter).
    Current,
    /// A specific step number.
    Step(StepNumber),
}

impl StepRequest {
    /// The `step_num` query value, if any.
    pub fn step_num(&self) -> Option<StepNumber> {
        match self {
            StepRequest::Current => None,
            StepRequest::Step(n) => Some(*n),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait StepSource: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the aggregate metrics of one step.
    async fn get_step(&self, request: StepRequest) -> Result<StepSample, StepApiError>;
}

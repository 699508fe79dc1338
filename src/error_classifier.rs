use crate::logging::LogLevel;
use crate::step_api::error::StepApiError;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_poll_error(&self, error: &StepApiError) -> LogLevel {
        match error {
            // The requested step has not been simulated yet
            StepApiError::Http { status, .. } if *status == 404 => LogLevel::Debug,

            // Non-critical: Temporary server issues
            StepApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            StepApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: Auth, bad requests, malformed responses
            StepApiError::Http { .. } => LogLevel::Error,
            StepApiError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            StepApiError::Reqwest(_) => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

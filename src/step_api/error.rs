//! Error handling for the step API module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StepApiError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The body was not a valid step sample.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl StepApiError {
    pub async fn from_response(response: reqwest::Response) -> StepApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        StepApiError::Http { status, message }
    }
}

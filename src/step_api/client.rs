//! SIMOC Step Client
//!
//! A client for the simulation server's `/get_step` route.

use crate::consts::cli_consts::network;
use crate::environment::Environment;
use crate::step_api::error::StepApiError;
use crate::step_api::{StepRequest, StepSample, StepSource};
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("simoc-dash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct StepClient {
    client: Client,
    environment: Environment,
}

impl StepClient {
    pub fn new(environment: Environment) -> Result<Self, StepApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(network::connect_timeout())
            .timeout(network::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, StepApiError> {
        if !response.status().is_success() {
            return Err(StepApiError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl StepSource for StepClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_step(&self, request: StepRequest) -> Result<StepSample, StepApiError> {
        let url = self.build_url(network::STEP_ENDPOINT);
        let mut builder = self.client.get(&url);
        if let Some(step_num) = request.step_num() {
            builder = builder.query(&[(network::STEP_QUERY_PARAM, step_num)]);
        }
        log::debug!("GET {} ({:?})", url, request);

        let response = builder.send().await?;
        let response = Self::handle_response_status(response).await?;
        let body = response.bytes().await?;
        let sample: StepSample = serde_json::from_slice(&body)?;
        Ok(sample)
    }
}

use super::types::UpstreamRequest;
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Sends one generation request and returns the parsed, unvalidated body.
    async fn generate(&self, request: UpstreamRequest) -> Result<Value>;
}

pub struct HuggingFaceClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
    timeout: Option<Duration>,
}

impl HuggingFaceClient {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let token = config.token().ok_or(Error::MissingToken)?.to_string();
        if config.timeout_secs == Some(0) {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        let endpoint = format!(
            "{}/models/{}",
            config.api_base.trim_end_matches('/'),
            config.model
        );

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
            token,
            timeout: config.timeout_secs.map(Duration::from_secs),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, request: &UpstreamRequest) -> Result<Value> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The body still goes through reply extraction.
            warn!("Inference endpoint answered with status {}", status);
        }

        let body = response.bytes().await?;
        debug!("Received {} byte response from inference endpoint", body.len());

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl InferenceClient for HuggingFaceClient {
    async fn generate(&self, request: UpstreamRequest) -> Result<Value> {
        debug!("Sending generation request to {}", self.endpoint);

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.send(&request))
                .await
                .map_err(|_| Error::Timeout {
                    secs: limit.as_secs(),
                })?,
            None => self.send(&request).await,
        }
    }
}

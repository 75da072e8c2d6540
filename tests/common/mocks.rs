use async_trait::async_trait;
use hf_proxy_rust::{
    Error, Result,
    inference::{InferenceClient, UpstreamRequest},
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Mock inference client that replays a fixed body or a timeout
#[derive(Debug, Clone)]
pub struct MockInferenceClient {
    pub body: Value,
    pub requests: Arc<Mutex<Vec<UpstreamRequest>>>,
    pub timeout_secs: Option<u64>,
}

impl MockInferenceClient {
    pub fn new(body: Value) -> Self {
        Self {
            body,
            requests: Arc::new(Mutex::new(Vec::new())),
            timeout_secs: None,
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn get_requests(&self) -> Vec<UpstreamRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn generate(&self, request: UpstreamRequest) -> Result<Value> {
        self.requests.lock().unwrap().push(request);

        if let Some(secs) = self.timeout_secs {
            return Err(Error::Timeout { secs });
        }

        Ok(self.body.clone())
    }
}

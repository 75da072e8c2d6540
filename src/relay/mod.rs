mod types;

pub use types::*;

use crate::{
    Error, Result,
    config::InferenceConfig,
    inference::{HuggingFaceClient, InferenceClient, UpstreamReply, UpstreamRequest},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Forwards chat requests to the inference endpoint and normalizes the answer.
///
/// A relay built without a client answers every request with
/// [`Error::MissingToken`] and never touches the network.
pub struct ChatRelay {
    client: Option<Arc<dyn InferenceClient>>,
}

impl ChatRelay {
    pub fn new(client: Arc<dyn InferenceClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn unconfigured() -> Self {
        Self { client: None }
    }

    pub fn from_config(config: &InferenceConfig) -> Result<Self> {
        match HuggingFaceClient::new(config) {
            Ok(client) => {
                info!("Relaying chat requests to {}", client.endpoint());
                Ok(Self::new(Arc::new(client)))
            }
            Err(Error::MissingToken) => {
                warn!("HF_TOKEN is not set, chat requests will fail until it is configured");
                Ok(Self::unconfigured())
            }
            Err(e) => Err(e),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub async fn relay(&self, request: ChatRequest) -> Result<ChatReply> {
        let client = self.client.as_ref().ok_or(Error::MissingToken)?;

        let upstream = UpstreamRequest::new(request.input_or_default());
        let body = client.generate(upstream).await?;

        let reply = UpstreamReply::from_value(&body);
        debug!("Extracted {} reply from upstream response", reply.kind());

        Ok(ChatReply {
            reply: reply.into_text(),
        })
    }
}

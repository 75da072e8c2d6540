use super::types::{ErrorResponse, HealthResponse};
use crate::relay::{ChatRelay, ChatReply, ChatRequest};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ChatRelay>,
}

impl AppState {
    pub fn new(relay: ChatRelay) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Bodies without a JSON content type are relayed as if `input` were absent.
pub async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ChatReply>, HandlerError> {
    let request = ChatRequest::from_body(is_json(&headers), &body).map_err(|e| {
        warn!("Rejected malformed chat body: {}", e);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Invalid JSON body: {}", e),
            }),
        )
    })?;

    info!(
        "Received chat request with {} input",
        if request.input.is_some() { "explicit" } else { "default" }
    );

    match state.relay.relay(request).await {
        Ok(reply) => Ok(Json(reply)),
        Err(e) => {
            if e.is_configuration() {
                warn!("Rejected chat request: {}", e);
            } else {
                error!("Failed to relay chat request: {}", e);
            }
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

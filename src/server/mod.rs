pub mod handlers;
pub mod types;

use crate::{Result, config::Config, relay::ChatRelay};
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub fn router(state: handlers::AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/chat", post(handlers::chat))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let relay = ChatRelay::from_config(&config.inference)?;
    let app = router(handlers::AppState::new(relay));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        "Proxy server running on http://localhost:{}",
        config.server.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}

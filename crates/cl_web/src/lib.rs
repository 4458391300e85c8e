use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

/// Service A: welcome page, clock and greeting.
pub fn create_greeting_app() -> Router {
    Router::new()
        .route("/", get(handlers::greeting::index))
        .route("/time", get(handlers::greeting::time))
        .route("/greet", get(handlers::greeting::greet))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Service B: comment analysis.
pub fn create_analysis_app(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/", get(handlers::analysis::index))
        .route("/analyze", post(handlers::analysis::analyze))
        .layer(body_limit)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

pub async fn serve(app: Router, addr: SocketAddr) -> cl_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🌐 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use cl_core::{AnalysisReport, Error, Result};
    pub use crate::{create_analysis_app, create_greeting_app, serve, AppState};
}

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::models::publishers::Publisher;

pub mod linkedin;

#[derive(Clone)]
pub struct AppState {
    pub publisher: Arc<dyn Publisher>,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/linkedin/post", post(linkedin::post_to_linkedin))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use chat::{chat_handler, empty_icon, health_handler, root_handler};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(root_handler).head(|| async { StatusCode::OK }))
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .route("/favicon.ico", get(empty_icon))
        .route("/apple-touch-icon.png", get(empty_icon))
        .route("/apple-touch-icon-precomposed.png", get(empty_icon))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

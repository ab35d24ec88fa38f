use axum::{
    Json,
    extract::State,
};
use serde::Serialize;

use crate::{
    message::{ChatReply, ChatRequest},
    services::chatbot::generate_reply,
    state::SharedState,
};

#[derive(Serialize)]
pub struct Endpoints {
    pub chat: &'static str,
    pub health: &'static str,
}

#[derive(Serialize)]
pub struct ServiceInfo {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub api_key_configured: bool,
    pub environment: String,
}

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatReply> {
    Json(generate_reply(&state.catalog, &state.completion, &payload).await)
}

pub async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        status: "online",
        message: "Beauty Chatbot AI Backend is running",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints { chat: "/chat", health: "/health" },
    })
}

pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "healthy",
        api_key_configured: state.config.api_key_configured(),
        environment: state.config.environment.clone(),
    })
}

// Browsers probe these on every page load.
pub async fn empty_icon() -> &'static str {
    ""
}

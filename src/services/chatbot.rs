// src/services/chatbot.rs
use tracing::info;

use crate::catalog::Catalog;
use crate::message::{ChatReply, ChatRequest};
use crate::services::completion::CompletionClient;
use crate::services::recommender::{build_context, filter_products};

/// One chat turn: pick products, ground the prompt with them, ask the model.
pub async fn generate_reply(catalog: &Catalog, client: &CompletionClient, request: &ChatRequest) -> ChatReply {
    let recommendations = filter_products(&request.message, catalog);
    info!(matches = recommendations.len(), history = request.chat_history.len(), "chat request");

    let context = build_context(&recommendations);
    let reply = client.complete(&request.message, &request.chat_history, &context).await;

    ChatReply { reply, recommendations }
}

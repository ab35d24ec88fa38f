// src/services/completion.rs
use reqwest::{Client, StatusCode, header};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::message::{ChatMessage, ChatRole};

pub const NOT_CONFIGURED_REPLY: &str =
    "I'm sorry, the AI service is not configured yet. Please set OPENROUTER_API_KEY and try again.";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("API key is not configured")]
    NotConfigured,

    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    #[error("{}", describe_transport(.0))]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl CompletionError {
    /// The text shown to the user in place of a model answer.
    pub fn user_message(&self) -> String {
        match self {
            CompletionError::NotConfigured => NOT_CONFIGURED_REPLY.to_string(),
            other => format!("I apologize, but I encountered an error: {other}"),
        }
    }
}

// reqwest's own Display stops at "error sending request"; the cause is further down.
fn describe_transport(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "the AI service took too long to respond".to_string();
    }

    let mut text = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<UpstreamMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct UpstreamMessage<'a> {
    role: ChatRole,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<UpstreamErrorBody>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct UpstreamErrorBody {
    message: Option<String>,
}

pub fn system_prompt(context: &str) -> String {
    format!(
        "You are a helpful beauty advisor. When recommending products, use this product information:\n\
         {context}\n\
         Formatting rules:\n\
         - Reply in plain sentences; no markdown headings, tables or bold text.\n\
         - Keep responses concise and focused on the user's question.\n\
         - Only recommend products listed above, by their exact name, and explain why they suit the user's needs.\n\
         - Never invent products or prices."
    )
}

/// Most recent `limit` entries of `history`, oldest first.
pub fn recent_history(history: &[ChatMessage], limit: usize) -> &[ChatMessage] {
    &history[history.len().saturating_sub(limit)..]
}

/// Stateless client for an OpenAI-style chat completion endpoint.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: Client,
    api_key: Option<String>,
    url: String,
    model: String,
    max_tokens: u32,
    history_limit: usize,
    referer: String,
}

impl CompletionClient {
    pub fn new(config: &Config) -> Result<Self, CompletionError> {
        let http = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            url: config.upstream_url.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            history_limit: config.history_limit,
            referer: config.referer.clone(),
        })
    }

    /// Like [`try_complete`](Self::try_complete), with every failure
    /// rendered as reply text.
    pub async fn complete(&self, user_message: &str, history: &[ChatMessage], context: &str) -> String {
        match self.try_complete(user_message, history, context).await {
            Ok(text) => text,
            Err(CompletionError::NotConfigured) => {
                warn!("chat requested but OPENROUTER_API_KEY is not set");
                NOT_CONFIGURED_REPLY.to_string()
            }
            Err(e) => {
                error!(error = %e, "completion request failed");
                e.user_message()
            }
        }
    }

    pub async fn try_complete(
        &self,
        user_message: &str,
        history: &[ChatMessage],
        context: &str,
    ) -> Result<String, CompletionError> {
        let api_key = self.api_key.as_deref().ok_or(CompletionError::NotConfigured)?;

        let system = system_prompt(context);
        let mut messages = Vec::with_capacity(self.history_limit + 2);
        messages.push(UpstreamMessage { role: ChatRole::System, content: &system });
        messages.extend(
            recent_history(history, self.history_limit)
                .iter()
                .map(|m| UpstreamMessage { role: m.role, content: &m.content }),
        );
        messages.push(UpstreamMessage { role: ChatRole::User, content: user_message });

        let body = CompletionRequest { model: &self.model, messages, max_tokens: self.max_tokens };
        debug!(model = %self.model, messages = body.messages.len(), "sending completion request");

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.referer)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(%status, body = %text, "completion response");

        let parsed: CompletionResponse = match serde_json::from_str(&text) {
            Ok(parsed) => parsed,
            Err(e) if status.is_success() => return Err(CompletionError::MalformedResponse(e.to_string())),
            Err(_) => {
                return Err(CompletionError::Upstream { status, message: "Unknown error".to_string() });
            }
        };

        if !status.is_success() || parsed.error.is_some() {
            let message = parsed
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(CompletionError::Upstream { status, message });
        }

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| CompletionError::MalformedResponse("no choices in response".to_string()))
    }
}

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use beauty_chatbot_backend::catalog::{Catalog, Product};
use beauty_chatbot_backend::config::Config;
use serde_json::{Value, json};

/// In-process stand-in for the completion endpoint. Records every payload it receives.
pub struct StubUpstream {
    pub url: String,
    pub requests: Arc<Mutex<Vec<Value>>>,
}

impl StubUpstream {
    pub async fn spawn(status: StatusCode, body: Value) -> Self {
        Self::spawn_delayed(Duration::ZERO, status, body).await
    }

    /// Like `spawn`, but each response is held back for `delay`.
    pub async fn spawn_delayed(delay: Duration, status: StatusCode, body: Value) -> Self {
        let requests: Arc<Mutex<Vec<Value>>> = Arc::default();
        let captured = requests.clone();

        let app = Router::new()
            .route(
                "/chat/completions",
                post(
                    move |State(captured): State<Arc<Mutex<Vec<Value>>>>, Json(payload): Json<Value>| {
                        let body = body.clone();
                        async move {
                            captured.lock().unwrap().push(payload);
                            tokio::time::sleep(delay).await;
                            (status, Json(body))
                        }
                    },
                ),
            )
            .with_state(captured);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { url: format!("http://{addr}/chat/completions"), requests }
    }

    pub async fn replying(text: &str) -> Self {
        Self::spawn(
            StatusCode::OK,
            json!({ "choices": [{ "message": { "role": "assistant", "content": text } }] }),
        )
        .await
    }

    pub fn config(&self) -> Config {
        Config {
            api_key: Some("test-key".to_string()),
            upstream_url: self.url.clone(),
            ..Config::default()
        }
    }

    pub fn captured(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn product(name: &str, product_type: &str, skin_type: &str, price: f64) -> Product {
    Product {
        name: name.to_string(),
        product_type: product_type.to_string(),
        skin_type: skin_type.to_string(),
        price,
        image_url: format!("https://img.example/{}.jpg", name.to_lowercase().replace(' ', "-")),
        description: format!("{name} description."),
    }
}

/// Two acne-prone washes, one dry-skin wash, one acne-prone serum.
pub fn mixed_catalog() -> Catalog {
    Catalog::new(vec![
        product("Clear Gel Wash", "face wash", "acne-prone", 12.5),
        product("Hydra Cream Cleanser", "face wash", "dry", 18.0),
        product("Spot Serum", "serum", "acne-prone", 31.99),
        product("Tea Tree Wash", "face wash", "acne-prone", 9.75),
    ])
}

//! Shared fixtures for the relay tests: a throwaway Groq stand-in bound to a
//! random local port.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde_json::Value;

use crate::agent::GroqAgentService;
use crate::config::Config;
use crate::service::relay_service::RelayService;

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct FakeState {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

pub struct FakeUpstream {
    addr: std::net::SocketAddr,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl FakeUpstream {
    pub async fn json(body: Value) -> Self {
        Self::with_status(StatusCode::OK, &body.to_string()).await
    }

    pub async fn with_status(status: StatusCode, body: &str) -> Self {
        Self::start(status, body, None).await
    }

    /// Answers only after `delay`, for exercising the client timeout.
    pub async fn slow(delay: Duration, body: Value) -> Self {
        Self::start(StatusCode::OK, &body.to_string(), Some(delay)).await
    }

    async fn start(status: StatusCode, body: &str, delay: Option<Duration>) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            status,
            body: body.to_string(),
            delay,
            seen: seen.clone(),
        };
        let app = Router::new()
            .route("/openai/v1/chat/completions", post(completions))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, seen }
    }

    pub fn url(&self) -> String {
        format!("http://{}/openai/v1/chat/completions", self.addr)
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

async fn completions(State(state): State<FakeState>, headers: HeaderMap, body: Bytes) -> Response {
    let seen = SeenRequest {
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    };
    state.seen.lock().unwrap().push(seen);
    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }
    (
        state.status,
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        state.body,
    )
        .into_response()
}

pub fn test_config(api_url: &str, api_key: Option<&str>) -> Config {
    Config {
        port: 0,
        allowed_origins: vec!["https://chat.example.com".to_string()],
        groq_api_key: api_key.map(str::to_string),
        groq_api_url: api_url.to_string(),
        model: "test-model".to_string(),
        upstream_timeout: None,
    }
}

pub fn relay_service(api_url: &str, api_key: Option<&str>) -> RelayService {
    relay_service_with_timeout(api_url, api_key, None)
}

pub fn relay_service_with_timeout(
    api_url: &str,
    api_key: Option<&str>,
    timeout: Option<Duration>,
) -> RelayService {
    let mut config = test_config(api_url, api_key);
    config.upstream_timeout = timeout;
    let agent = GroqAgentService::new(&config).unwrap();
    RelayService::new(Arc::new(config), agent)
}

/// A relay pointed at a local port nothing is listening on.
pub fn unreachable_service(api_key: Option<&str>) -> RelayService {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    relay_service(&format!("http://{addr}/openai/v1/chat/completions"), api_key)
}

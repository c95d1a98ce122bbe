// tests/common/mod.rs
#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Router,
    body::Bytes,
    extract::{RawQuery, State},
    http::StatusCode,
};
use portfolio_chat_relay::{config::Config, routes::create_router, state::AppState};

/// Canned provider: answers every request with the same status and body and
/// remembers what it was sent.
pub struct StubProvider {
    status: StatusCode,
    body: String,
    calls: AtomicUsize,
    last_body: Mutex<Option<serde_json::Value>>,
    last_query: Mutex<Option<String>>,
    last_path: Mutex<Option<String>>,
}

impl StubProvider {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<serde_json::Value> {
        self.last_body.lock().unwrap().clone()
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }

    pub fn last_path(&self) -> Option<String> {
        self.last_path.lock().unwrap().clone()
    }

    /// The text of the single user part sent upstream.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_body()?
            .pointer("/contents/0/parts/0/text")?
            .as_str()
            .map(str::to_string)
    }
}

async fn stub_handler(
    State(stub): State<Arc<StubProvider>>,
    uri: axum::http::Uri,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> (StatusCode, String) {
    stub.calls.fetch_add(1, Ordering::SeqCst);
    *stub.last_body.lock().unwrap() = serde_json::from_slice(&body).ok();
    *stub.last_query.lock().unwrap() = query;
    *stub.last_path.lock().unwrap() = Some(uri.path().to_string());
    (stub.status, stub.body.clone())
}

/// Starts a stub provider on an ephemeral port and returns it with its base URL.
pub async fn spawn_provider(status: StatusCode, body: &str) -> (Arc<StubProvider>, String) {
    let stub = Arc::new(StubProvider {
        status,
        body: body.to_string(),
        calls: AtomicUsize::new(0),
        last_body: Mutex::new(None),
        last_query: Mutex::new(None),
        last_path: Mutex::new(None),
    });

    let app = Router::new()
        .fallback(stub_handler)
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (stub, format!("http://{addr}/v1beta"))
}

pub fn test_config(api_key: Option<&str>, api_base: &str) -> Config {
    Config {
        api_key: api_key.map(str::to_string),
        api_base: api_base.to_string(),
        model: "gemini-test".to_string(),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
    }
}

pub fn app_with(config: Config) -> Router {
    create_router().with_state(Arc::new(AppState::new(config)))
}

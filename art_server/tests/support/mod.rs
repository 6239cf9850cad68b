// Shared helpers: a stub Gemini upstream and a real art server bound to
// ephemeral ports inside the calling test's runtime.
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use art_server::AppConfig;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::post,
};
use serde_json::{Value, json};

pub const ROOM_DATA_URL: &str = "data:image/jpeg;base64,/9j/4AAQ";

// One request as seen by the stub upstream.
#[derive(Clone, Debug)]
pub struct RecordedCall {
    // Final path segment, e.g. `gemini-2.5-flash-image:generateContent`.
    pub target: String,
    pub api_key: Option<String>,
    pub body: Value,
}

#[derive(Default)]
struct StubState {
    replies: Mutex<VecDeque<(StatusCode, Value)>>,
    calls: Mutex<Vec<RecordedCall>>,
}

#[derive(Clone)]
pub struct StubUpstream {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubUpstream {
    // Start the stub; replies are served in order, one per call.
    pub async fn start(replies: Vec<(StatusCode, Value)>) -> Self {
        let state = Arc::new(StubState {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1beta/models/{target}", post(stub_generate_content))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub upstream");
        let addr = listener.local_addr().expect("stub local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub upstream failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().expect("calls mutex poisoned").clone()
    }
}

async fn stub_generate_content(
    State(state): State<Arc<StubState>>,
    Path(target): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state
        .calls
        .lock()
        .expect("calls mutex poisoned")
        .push(RecordedCall {
            target,
            api_key: headers
                .get("x-goog-api-key")
                .and_then(|value| value.to_str().ok())
                .map(str::to_string),
            body,
        });

    let (status, reply) = state
        .replies
        .lock()
        .expect("replies mutex poisoned")
        .pop_front()
        .unwrap_or_else(|| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": { "message": "stub has no reply queued" } }),
            )
        });
    (status, Json(reply))
}

// Start the art server against `upstream` with extra env-style settings.
pub async fn start_server(upstream: &StubUpstream, settings: &[(&str, &str)]) -> String {
    let mut vars: HashMap<String, String> = settings
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    vars.insert("GEMINI_BASE_URL".to_string(), upstream.base_url.clone());

    let config = AppConfig::from_lookup(|key| vars.get(key).cloned()).expect("valid test config");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        art_server::run(listener, config).await.expect("server failed");
    });

    format!("http://{addr}")
}

pub fn image_reply(mime_type: &str, data: &str) -> (StatusCode, Value) {
    (
        StatusCode::OK,
        json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "inlineData": { "mimeType": mime_type, "data": data } }]
                },
                "finishReason": "STOP"
            }]
        }),
    )
}

pub fn text_reply(text: &str) -> (StatusCode, Value) {
    (
        StatusCode::OK,
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        }),
    )
}

pub fn error_reply(status: StatusCode, message: &str) -> (StatusCode, Value) {
    (
        status,
        json!({ "error": { "code": status.as_u16(), "message": message, "status": "ERROR" } }),
    )
}

pub async fn post_generate_art(base_url: &str, payload: Value) -> (reqwest::StatusCode, Value) {
    let res = reqwest::Client::new()
        .post(format!("{base_url}/api/generate-art"))
        .json(&payload)
        .send()
        .await
        .expect("request should succeed");
    let status = res.status();
    let body = res.json::<Value>().await.expect("json response body");
    (status, body)
}

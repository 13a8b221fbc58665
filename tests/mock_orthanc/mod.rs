//! A fake Orthanc server which records the requests it receives.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::IntoResponse;

static INIT_LOGGING: Once = Once::new();

pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        tracing::subscriber::set_global_default(
            tracing_subscriber::FmtSubscriber::builder()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_test_writer()
                .finish(),
        )
        .unwrap()
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    replies: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
}

pub struct MockOrthanc {
    url: String,
    state: MockState,
}

impl MockOrthanc {
    /// Start a server on an ephemeral port, in a background thread.
    pub fn start() -> Self {
        init_logging();
        let state = MockState::default();
        let server_state = state.clone();
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
                tx.send(listener.local_addr().unwrap()).unwrap();
                let app = Router::new().fallback(record).with_state(server_state);
                axum::serve(listener, app).await.unwrap();
            })
        });
        let address = rx.recv().unwrap();
        Self {
            url: format!("http://{address}"),
            state,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Answer requests to `method path` with the given status and body,
    /// instead of the default `200 {}`.
    pub fn reply(&self, method: &str, path: &str, status: u16, body: &str) {
        self.state.replies.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            (status, body.to_string()),
        );
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("mock Orthanc did not receive any request")
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header_value = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    };
    let request = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(|q| q.to_string()),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: body.to_vec(),
    };
    let key = (request.method.clone(), request.path.clone());
    state.requests.lock().unwrap().push(request);
    let (status, body) = state
        .replies
        .lock()
        .unwrap()
        .get(&key)
        .cloned()
        .unwrap_or_else(|| (200, "{}".to_string()));
    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

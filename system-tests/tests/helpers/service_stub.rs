// system-tests/tests/helpers/service_stub.rs
// ============================================================================
// Module: Recording Service Stub
// Description: Minimal in-process Characters endpoint recorder.
// Purpose: Verify client request wiring without a live deployment.
// Dependencies: axum, tokio, serde_json
// ============================================================================

//! ## Overview
//! A request-recording stand-in for the remote Characters service. It checks
//! nothing beyond the presence of an `Authorization` header and answers with
//! canned envelopes; the contract suite asserts on what the client *sent*,
//! not on what the service would do with it. Remote validation rules are
//! deliberately not modeled here.

use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;

use axum::Json;
use axum::Router;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::response::IntoResponse;
use axum::response::Response;
use characters_client::catalog::ServiceMessage;
use serde_json::Value;
use serde_json::json;
use tokio::runtime::Builder;
use tokio::sync::oneshot;

/// Upper bound on recorded request bodies.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// One request as the stub observed it on the wire.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    /// HTTP method name.
    pub method: String,
    /// Request path without the query string.
    pub path: String,
    /// Raw query string, when present.
    pub query: Option<String>,
    /// Raw `Authorization` header value, when present.
    pub authorization: Option<String>,
    /// Decoded JSON body, when present and decodable.
    pub body: Option<Value>,
}

/// Shared state handed to the recording handler.
#[derive(Clone)]
struct StubState {
    /// Requests observed so far, in arrival order.
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Handle for the stub service; shuts the server down on drop.
pub struct ServiceStubHandle {
    /// Base URL tests point their client at.
    base_url: String,
    /// Graceful-shutdown trigger for the server task.
    shutdown: Option<oneshot::Sender<()>>,
    /// Join handle for the server thread.
    join: Option<thread::JoinHandle<()>>,
    /// Requests observed so far, shared with the handler.
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl ServiceStubHandle {
    /// Returns the stub base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the requests recorded so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }
}

impl Drop for ServiceStubHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawns the recording stub on an ephemeral local port.
pub fn spawn_service_stub() -> Result<ServiceStubHandle, String> {
    let listener = StdTcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("service stub bind failed: {err}"))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("service stub listener nonblocking failed: {err}"))?;
    let addr =
        listener.local_addr().map_err(|err| format!("service stub local addr failed: {err}"))?;
    let base_url = format!("http://{addr}");

    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        requests: Arc::clone(&requests),
    };
    let app = Router::new().fallback(handle_request).with_state(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = thread::spawn(move || {
        let runtime = match Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime,
            Err(error) => {
                let _ = error;
                return;
            }
        };
        runtime.block_on(async move {
            let listener = match tokio::net::TcpListener::from_std(listener) {
                Ok(listener) => listener,
                Err(error) => {
                    let _ = error;
                    return;
                }
            };
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            let _ = server.await;
        });
    });
    Ok(ServiceStubHandle {
        base_url,
        shutdown: Some(shutdown_tx),
        join: Some(join),
        requests,
    })
}

/// Records the exchange and answers with a canned envelope.
async fn handle_request(State(state): State<StubState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES).await.unwrap_or_default();
    let body_json: Option<Value> =
        if bytes.is_empty() { None } else { serde_json::from_slice(&bytes).ok() };
    let authorization = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);
    record_request(
        &state,
        RecordedRequest {
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
            query: parts.uri.query().map(ToString::to_string),
            authorization: authorization.clone(),
            body: body_json.clone(),
        },
    );

    if authorization.is_none() {
        return (StatusCode::UNAUTHORIZED, ServiceMessage::Unauthorized.as_str().to_string())
            .into_response();
    }
    match (parts.method.as_str(), parts.uri.path()) {
        ("GET", "/characters") => {
            Json(json!({ "result": [ { "name": "Stub Character" } ] })).into_response()
        }
        ("GET", "/character") => {
            Json(json!({ "result": { "name": "Stub Character" } })).into_response()
        }
        ("POST" | "PUT", "/character") => {
            Json(json!({ "result": body_json.unwrap_or(Value::Null) })).into_response()
        }
        ("DELETE", "/character") | ("POST", "/reset") => StatusCode::OK.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Appends one observed request to the shared log.
fn record_request(state: &StubState, request: RecordedRequest) {
    let Ok(mut guard) = state.requests.lock() else {
        return;
    };
    guard.push(request);
}

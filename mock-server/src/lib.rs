//! Test server for the courier's integration tests.
//!
//! Every served request (except the introspection route) is recorded as
//! received on the wire — method, exact request target, raw body — so tests
//! can assert what actually reached the server, down to unescaped query
//! strings. `GET /requests` dumps the log as JSON.

use std::{sync::Arc, time::Duration};

use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::{net::TcpListener, sync::RwLock};

/// One request observed by the server.
#[derive(Clone, Debug, Serialize)]
pub struct RecordedRequest {
    pub method: String,
    pub uri: String,
    pub body: Vec<u8>,
}

pub type RequestLog = Arc<RwLock<Vec<RecordedRequest>>>;

pub fn request_log() -> RequestLog {
    Arc::new(RwLock::new(Vec::new()))
}

pub fn app(log: RequestLog) -> Router {
    Router::new()
        .route("/ok", get(ok))
        .route("/submit", post(submit))
        .route("/echo", post(echo))
        .route("/query", get(query))
        .route("/missing", get(missing))
        .route("/slow", get(slow))
        .route("/requests", get(requests))
        .with_state(log)
}

pub async fn run(listener: TcpListener, log: RequestLog) -> Result<(), std::io::Error> {
    axum::serve(listener, app(log)).await
}

async fn record(log: &RequestLog, method: &str, uri: &Uri, body: Vec<u8>) {
    log.write().await.push(RecordedRequest {
        method: method.to_string(),
        uri: uri.to_string(),
        body,
    });
}

async fn ok(State(log): State<RequestLog>, uri: Uri) -> &'static str {
    record(&log, "GET", &uri, Vec::new()).await;
    "ok"
}

async fn submit(State(log): State<RequestLog>, uri: Uri, body: Bytes) -> (StatusCode, String) {
    record(&log, "POST", &uri, body.to_vec()).await;
    (StatusCode::CREATED, String::new())
}

async fn echo(State(log): State<RequestLog>, uri: Uri, body: Bytes) -> Vec<u8> {
    record(&log, "POST", &uri, body.to_vec()).await;
    body.to_vec()
}

/// Returns the exact request target, so clients can verify what URL the
/// server actually saw.
async fn query(State(log): State<RequestLog>, uri: Uri) -> String {
    record(&log, "GET", &uri, Vec::new()).await;
    uri.to_string()
}

async fn missing(State(log): State<RequestLog>, uri: Uri) -> (StatusCode, &'static str) {
    record(&log, "GET", &uri, Vec::new()).await;
    (StatusCode::NOT_FOUND, "missing")
}

/// Stalls long enough to trip any test-sized read timeout.
async fn slow(State(log): State<RequestLog>, uri: Uri) -> &'static str {
    record(&log, "GET", &uri, Vec::new()).await;
    tokio::time::sleep(Duration::from_secs(5)).await;
    "slow"
}

async fn requests(State(log): State<RequestLog>) -> Json<Vec<RecordedRequest>> {
    Json(log.read().await.clone())
}

//! Access Log Middleware
//!
//! Emits one line per request on the `phonebook::access` target:
//!
//! ```text
//! POST /api/persons 200 71 - 0.412 ms {"name":"Ada Lovelace","number":"39-44-5323523"}
//! ```
//!
//! The request body is buffered so it can be logged, then handed on to the
//! handler unchanged.

use std::time::Instant;

use axum::body::{Body, Bytes, HttpBody};
use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::errors::ApiError;

/// Largest request body the server accepts
pub const BODY_LIMIT: usize = 1024 * 1024;

/// Log target for access lines
pub const ACCESS_TARGET: &str = "phonebook::access";

/// Middleware logging method, url, status, size, latency and body
pub async fn access_log(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let (parts, body) = request.into_parts();
    let (response, logged_body) = match axum::body::to_bytes(body, BODY_LIMIT).await {
        Ok(bytes) => {
            let logged_body = summarize_body(&bytes);
            tracing::debug!(
                method = %method,
                path = uri.path(),
                body = %logged_body,
                "incoming request"
            );

            let request = Request::from_parts(parts, Body::from(bytes));
            (next.run(request).await, logged_body)
        }
        Err(err) => (
            ApiError::InvalidBody(err.to_string()).into_response(),
            "{}".to_string(),
        ),
    };

    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    tracing::info!(
        target: ACCESS_TARGET,
        "{} {} {} {} - {:.3} ms {}",
        method,
        uri,
        response.status().as_u16(),
        response_length(&response),
        elapsed_ms,
        logged_body
    );

    response
}

/// Compact JSON for the log, `{}` when there is no JSON body
pub fn summarize_body(bytes: &Bytes) -> String {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .map(|value| value.to_string())
        .unwrap_or_else(|_| "{}".to_string())
}

fn response_length(response: &Response) -> String {
    response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| response.body().size_hint().exact().map(|n| n.to_string()))
        .unwrap_or_else(|| "-".to_string())
}

//! Request ID propagation.
//!
//! Probes and proxies may send an `x-request-id`; a valid UUID is kept,
//! anything else is replaced with a fresh v4. The ID tags the request span
//! and is echoed back on the response so callers can match their logs
//! against ours.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use http::{HeaderName, HeaderValue};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// The caller's request ID when it is a UUID, a new one otherwise.
fn incoming_or_new(request: &Request) -> Uuid {
    request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .unwrap_or_else(Uuid::new_v4)
}

/// Wraps every request, matched or not, in a span keyed by its request ID.
pub async fn request_id_layer(request: Request, next: Next) -> Response {
    let request_id = incoming_or_new(&request);
    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    async move {
        let start = Instant::now();
        let mut response = next.run(request).await;

        tracing::debug!(
            status = response.status().as_u16(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "served"
        );

        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }
    .instrument(span)
    .await
}

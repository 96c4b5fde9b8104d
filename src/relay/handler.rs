//! The `/api/fetch` handler.
//!
//! # Flow
//! ```text
//! Received → Validating → (Rejected | Fetching)
//!          → (Succeeded | UpstreamError | TransportError) → Responded
//! ```
//! Every request is terminal on its first resolution; nothing is retried.

use axum::{
    extract::{RawQuery, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::time::Instant;

use crate::http::request::RequestIdExt;
use crate::http::response::relay_response;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::relay::error::RelayError;
use crate::relay::target::{url_param, RelayTarget};

/// Number of body characters included in the success log line.
pub const PREVIEW_CHARS: usize = 200;

/// First `PREVIEW_CHARS` characters of a body, lossily decoded.
pub fn body_preview(body: &[u8]) -> String {
    String::from_utf8_lossy(body).chars().take(PREVIEW_CHARS).collect()
}

pub async fn fetch_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let start_time = Instant::now();
    let request_id = headers.request_id();
    let raw_url = url_param(query.as_deref());
    let url_field = raw_url.as_deref().unwrap_or_default();

    tracing::info!(request_id = %request_id, url = %url_field, "Fetch endpoint called");

    let target = match RelayTarget::parse(raw_url.as_deref()) {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!(request_id = %request_id, url = %url_field, error = %e, "Validation error");
            metrics::record_relay(e.kind(), e.status().as_u16(), start_time);
            return e.into_response();
        }
    };

    match state.client.fetch(&target.url).await {
        Ok(upstream) => {
            let content_type = upstream
                .headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown")
                .to_string();
            let preview = body_preview(&upstream.body);

            tracing::info!(
                request_id = %request_id,
                url = %target.raw,
                status = upstream.status.as_u16(),
                content_type = %content_type,
                content_length = upstream.body.len(),
                preview = %preview,
                "Successfully fetched"
            );
            metrics::record_relay("success", upstream.status.as_u16(), start_time);

            relay_response(upstream, &target, Utc::now())
        }
        Err(e @ RelayError::Upstream { .. }) => {
            tracing::error!(
                request_id = %request_id,
                url = %target.raw,
                status = e.status().as_u16(),
                error = %e,
                "Upstream returned error status"
            );
            metrics::record_relay(e.kind(), e.status().as_u16(), start_time);
            e.into_response()
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                url = %target.raw,
                kind = e.kind(),
                error = %e,
                "Failed to fetch"
            );
            metrics::record_relay(e.kind(), e.status().as_u16(), start_time);
            e.into_response()
        }
    }
}

//! Response handling and transformation.
//!
//! # Responsibilities
//! - Turn a successful upstream response into the caller's response
//! - Strip hop-by-hop and framing headers before passthrough
//! - Stamp provenance headers (X-Fetched-From, X-Fetch-Timestamp)
//! - Drop the upstream's X-Request-Id so the relay's own id is the one returned
//!
//! # Design Decisions
//! - The body is already fully read; axum re-frames it
//! - A non-canonical upstream reason phrase is preserved on HTTP/1

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderName, HeaderValue},
    response::Response,
};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::http::request::X_REQUEST_ID;
use crate::relay::client::UpstreamResponse;
use crate::relay::target::RelayTarget;

/// Header naming the URL the body was fetched from.
pub const X_FETCHED_FROM: HeaderName = HeaderName::from_static("x-fetched-from");
/// Header carrying the fetch time in ISO-8601.
pub const X_FETCH_TIMESTAMP: HeaderName = HeaderName::from_static("x-fetch-timestamp");

const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Remove headers that only describe the upstream connection or framing.
pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in HOP_BY_HOP.iter() {
        headers.remove(name);
    }
    headers.remove(header::CONTENT_LENGTH);
}

/// Format a timestamp the way `Date.prototype.toISOString` does.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Build the passthrough response for a 2xx upstream answer.
pub fn relay_response(upstream: UpstreamResponse, target: &RelayTarget, fetched_at: DateTime<Utc>) -> Response {
    let UpstreamResponse {
        status,
        reason,
        mut headers,
        body,
    } = upstream;

    strip_hop_by_hop(&mut headers);
    headers.remove(X_REQUEST_ID);

    // Non-ASCII input is echoed in its percent-encoded form.
    let echoed = if target.raw.is_ascii() {
        target.raw.as_str()
    } else {
        target.url.as_str()
    };
    if let Ok(value) = HeaderValue::from_str(echoed) {
        headers.insert(X_FETCHED_FROM, value);
    }
    if let Ok(value) = HeaderValue::from_str(&iso_timestamp(fetched_at)) {
        headers.insert(X_FETCH_TIMESTAMP, value);
    }

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    *response.headers_mut() = headers;

    if !reason.is_empty() && status.canonical_reason() != Some(reason.as_str()) {
        if let Ok(phrase) = hyper::ext::ReasonPhrase::try_from(reason) {
            response.extensions_mut().insert(phrase);
        }
    }

    response
}

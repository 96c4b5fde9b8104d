//! Relay error taxonomy and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::error::Error as StdError;
use thiserror::Error;

/// Message used when a transport error carries no text of its own.
pub const GENERIC_FETCH_ERROR: &str = "Error fetching URL";

/// Every way a relay request can end without passing the upstream body through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("URL parameter is required")]
    MissingUrl,

    #[error("Invalid URL format")]
    InvalidUrl,

    #[error("Request timed out")]
    Timeout,

    #[error("Connection refused - server may be down")]
    ConnectionRefused,

    #[error("Host not found - check the URL")]
    HostNotFound,

    #[error("{0}")]
    Transport(String),

    /// Upstream answered with a non-2xx status.
    #[error("HTTP {}: {reason}", .status.as_u16())]
    Upstream { status: StatusCode, reason: String },
}

impl RelayError {
    /// Build a transport error, substituting the generic message for empty text.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            RelayError::Transport(GENERIC_FETCH_ERROR.to_string())
        } else {
            RelayError::Transport(message)
        }
    }

    /// Status code returned to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingUrl | RelayError::InvalidUrl => StatusCode::BAD_REQUEST,
            RelayError::Timeout => StatusCode::REQUEST_TIMEOUT,
            RelayError::ConnectionRefused => StatusCode::BAD_GATEWAY,
            // Kept at 404 for compatibility with existing callers.
            RelayError::HostNotFound => StatusCode::NOT_FOUND,
            RelayError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::Upstream { status, .. } => *status,
        }
    }

    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::MissingUrl | RelayError::InvalidUrl => "validation",
            RelayError::Timeout => "timeout",
            RelayError::ConnectionRefused => "connection_refused",
            RelayError::HostNotFound => "host_not_found",
            RelayError::Transport(_) => "transport",
            RelayError::Upstream { .. } => "upstream_status",
        }
    }

    /// Classify a failed outbound call.
    ///
    /// Order matters: a timed-out connect must still report a timeout.
    pub fn from_fetch(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            return RelayError::Timeout;
        }
        classify_transport(err).unwrap_or_else(|| RelayError::transport(error_chain_message(err)))
    }
}

/// Inspect an error's source chain for refused connections and failed lookups.
pub fn classify_transport(err: &(dyn StdError + 'static)) -> Option<RelayError> {
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    let mut host_not_found = false;

    while let Some(e) = current {
        if let Some(io) = e.downcast_ref::<std::io::Error>() {
            match io.kind() {
                std::io::ErrorKind::ConnectionRefused => return Some(RelayError::ConnectionRefused),
                std::io::ErrorKind::TimedOut => return Some(RelayError::Timeout),
                _ => {}
            }
        }
        let message = e.to_string().to_ascii_lowercase();
        if message.contains("dns error")
            || message.contains("failed to lookup address")
            || message.contains("name or service not known")
            || message.contains("nodename nor servname")
        {
            host_not_found = true;
        }
        current = e.source();
    }

    host_not_found.then_some(RelayError::HostNotFound)
}

/// Join an error with its sources, skipping repeats.
fn error_chain_message(err: &(dyn StdError + 'static)) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(e) = current {
        let text = e.to_string();
        if !text.is_empty() && !parts.iter().any(|p| p.contains(&text)) {
            parts.push(text);
        }
        current = e.source();
    }
    parts.join(": ")
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

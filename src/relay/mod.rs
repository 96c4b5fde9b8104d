//! Relay subsystem: one inbound GET becomes one outbound GET.
//!
//! # Data Flow
//! ```text
//! GET /api/fetch?url=...
//!     → target.rs (extract & validate the url parameter)
//!     → client.rs (outbound GET with header profile and deadline)
//!     → error.rs (failure → status + JSON body)
//!     → http/response.rs (2xx passthrough + provenance headers)
//! ```
//!
//! # Design Decisions
//! - No shared mutable state between requests
//! - No retries, caching or pooling
//! - The header profile is chosen per deployment, not per request

pub mod client;
pub mod error;
pub mod handler;
pub mod profile;
pub mod target;

pub use client::{UpstreamClient, UpstreamResponse};
pub use error::RelayError;
pub use handler::fetch_handler;
pub use target::RelayTarget;

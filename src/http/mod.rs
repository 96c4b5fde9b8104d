//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → relay handler or docs handler
//!     → response.rs (passthrough transform, provenance headers)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, RequestIdExt, X_REQUEST_ID};
pub use response::{X_FETCHED_FROM, X_FETCH_TIMESTAMP};
pub use server::{AppState, HttpServer, ServerError};

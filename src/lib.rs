//! fetch-relay library
//!
//! A minimal HTTP relay built with Tokio, Axum and reqwest.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │                  FETCH RELAY                  │
//!   GET /api/fetch     │  ┌────────┐   ┌──────────┐   ┌────────────┐   │
//!   ───────────────────┼─▶│  http  │──▶│  relay   │──▶│  upstream  │───┼──▶ Target
//!                      │  │ server │   │ handler  │   │   client   │   │    origin
//!   Relay response     │  └────────┘   └──────────┘   └────────────┘   │
//!   ◀──────────────────┼── response.rs (passthrough + provenance) ◀────┼───
//!                      │                                               │
//!   GET /              │  ┌────────┐                                   │
//!   ───────────────────┼─▶│  docs  │  (static OpenAPI + Swagger UI)    │
//!                      │  └────────┘                                   │
//!                      │  config · observability · lifecycle           │
//!                      └───────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod docs;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

//! Documentation viewer.
//!
//! Serves a static OpenAPI description of `/api/fetch` and a Swagger UI page
//! that renders it. Nothing here touches relay traffic.

pub mod openapi;
pub mod page;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::Html,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::http::server::AppState;

pub use openapi::api_description;
pub use page::render_page;

/// Routes for `/` and `/openapi.json`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(docs_page))
        .route("/openapi.json", get(openapi_json))
}

/// Origin of the caller's view of this server, from `Host` and `X-Forwarded-Proto`.
pub fn request_origin(headers: &HeaderMap) -> Option<String> {
    let host = headers.get(header::HOST)?.to_str().ok()?;
    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .filter(|p| matches!(*p, "http" | "https"))
        .unwrap_or("http");

    let url = url::Url::parse(&format!("{}://{}", proto, host)).ok()?;
    if !url.has_host() || url.path() != "/" {
        return None;
    }
    Some(url.origin().ascii_serialization())
}

async fn docs_page(State(state): State<AppState>) -> Html<String> {
    let docs = &state.config.docs;
    let description = api_description(&docs.title, &docs.fallback_origin);
    Html(render_page(&docs.title, &description))
}

async fn openapi_json(State(state): State<AppState>, headers: HeaderMap) -> Json<Value> {
    let docs = &state.config.docs;
    let origin = request_origin(&headers).unwrap_or_else(|| docs.fallback_origin.clone());
    Json(api_description(&docs.title, &origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RelayConfig;
    use crate::http::HttpServer;
    use axum::body::Body;
    use axum::http::{HeaderValue, Request, StatusCode};
    use tower::ServiceExt;

    #[test]
    fn test_request_origin() {
        let mut headers = HeaderMap::new();
        assert_eq!(request_origin(&headers), None);

        headers.insert(header::HOST, HeaderValue::from_static("relay.example:8080"));
        assert_eq!(request_origin(&headers).as_deref(), Some("http://relay.example:8080"));

        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        assert_eq!(request_origin(&headers).as_deref(), Some("https://relay.example:8080"));

        headers.insert(header::HOST, HeaderValue::from_static("evil.test/path"));
        assert_eq!(request_origin(&headers), None);
    }

    #[tokio::test]
    async fn test_page_served() {
        let router = HttpServer::new(RelayConfig::default()).unwrap().router();
        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("/api/fetch"));
        assert!(html.contains("http://localhost:3000"));
    }

    #[tokio::test]
    async fn test_openapi_json_uses_fallback_without_host() {
        let router = HttpServer::new(RelayConfig::default()).unwrap().router();
        let response = router
            .oneshot(Request::builder().uri("/openapi.json").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let doc: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(doc["servers"][0]["url"], "http://localhost:3000");
    }

    #[tokio::test]
    async fn test_docs_can_be_disabled() {
        let mut config = RelayConfig::default();
        config.docs.enabled = false;
        let router = HttpServer::new(config).unwrap().router();
        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

//! Outbound HTTP client.
//!
//! # Responsibilities
//! - Issue exactly one GET per relay request with the deployment's header profile
//! - Enforce the deadline over connect, headers and body read
//! - Classify failures into [`RelayError`] variants
//!
//! # Design Decisions
//! - No idle connections are kept: every call dials fresh
//! - Environment proxy settings are ignored; the relay is the egress point
//! - Non-2xx responses are reported without reading their body

use axum::body::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

use crate::config::UpstreamConfig;
use crate::relay::error::RelayError;
use crate::relay::profile::outbound_headers;

/// A completed 2xx upstream response with its body fully read.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    /// Reason phrase as received, or the canonical one for the status.
    pub reason: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Client used for every outbound call.
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    deadline: Duration,
}

impl UpstreamClient {
    /// Build the client for the configured profile, deadline and redirect limit.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .default_headers(outbound_headers(config.header_profile))
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .pool_max_idle_per_host(0)
            .no_proxy()
            .build()?;

        Ok(Self {
            client,
            deadline: Duration::from_secs(config.timeout_secs),
        })
    }

    /// The deadline applied to each call.
    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// GET `url`, returning the full response on 2xx.
    pub async fn fetch(&self, url: &Url) -> Result<UpstreamResponse, RelayError> {
        match tokio::time::timeout(self.deadline, self.send(url)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(RelayError::Timeout),
        }
    }

    async fn send(&self, url: &Url) -> Result<UpstreamResponse, RelayError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| RelayError::from_fetch(&e))?;

        let status = response.status();
        let reason = reason_phrase(&response);
        if !status.is_success() {
            return Err(RelayError::Upstream { status, reason });
        }

        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| RelayError::from_fetch(&e))?;

        Ok(UpstreamResponse {
            status,
            reason,
            headers,
            body,
        })
    }
}

fn reason_phrase(response: &reqwest::Response) -> String {
    response
        .extensions()
        .get::<hyper::ext::ReasonPhrase>()
        .and_then(|r| std::str::from_utf8(r.as_bytes()).ok())
        .or_else(|| response.status().canonical_reason())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn one_shot_upstream(raw: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(raw.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        Url::parse(&format!("http://{}/", addr)).unwrap()
    }

    #[tokio::test]
    async fn test_success_reads_body() {
        let url = one_shot_upstream(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello",
        )
        .await;
        let client = UpstreamClient::new(&UpstreamConfig::default()).unwrap();

        let response = client.fetch(&url).await.unwrap();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.reason, "OK");
        assert_eq!(response.headers["content-type"], "text/plain");
        assert_eq!(&response.body[..], b"hello");
    }

    #[tokio::test]
    async fn test_custom_reason_phrase_kept() {
        let url = one_shot_upstream(
            "HTTP/1.1 404 Nothing Here\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        let client = UpstreamClient::new(&UpstreamConfig::default()).unwrap();

        let err = client.fetch(&url).await.unwrap_err();
        assert_eq!(
            err,
            RelayError::Upstream {
                status: StatusCode::NOT_FOUND,
                reason: "Nothing Here".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_deadline_elapses() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            // Accept and hold the socket without answering.
            let held = listener.accept().await;
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(held);
        });

        let config = UpstreamConfig {
            timeout_secs: 1,
            ..UpstreamConfig::default()
        };
        let client = UpstreamClient::new(&config).unwrap();
        let url = Url::parse(&format!("http://{}/", addr)).unwrap();

        assert_eq!(client.fetch(&url).await.unwrap_err(), RelayError::Timeout);
    }
}

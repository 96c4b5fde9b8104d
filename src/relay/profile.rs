//! Outbound header profiles.
//!
//! The profile is fixed per deployment and applied to every outbound call as
//! the client's default header set.

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION,
    UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};

use crate::config::HeaderProfile;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";
const BROWSER_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";

/// User agent sent by the minimal profile.
pub const MINIMAL_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the header set for a profile.
pub fn outbound_headers(profile: HeaderProfile) -> HeaderMap {
    let mut headers = HeaderMap::new();
    match profile {
        HeaderProfile::Browser => {
            headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
            headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
            headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
            headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
            headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
            headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
            headers.insert(HeaderName::from_static("sec-fetch-dest"), HeaderValue::from_static("document"));
            headers.insert(HeaderName::from_static("sec-fetch-mode"), HeaderValue::from_static("navigate"));
            headers.insert(HeaderName::from_static("sec-fetch-site"), HeaderValue::from_static("none"));
            headers.insert(HeaderName::from_static("sec-fetch-user"), HeaderValue::from_static("?1"));
        }
        HeaderProfile::Minimal => {
            headers.insert(USER_AGENT, HeaderValue::from_static(MINIMAL_USER_AGENT));
            headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        }
    }
    headers
}

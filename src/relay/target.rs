//! Target URL extraction and validation.

use url::Url;

use crate::relay::error::RelayError;

/// Query parameter carrying the target.
pub const URL_PARAM: &str = "url";

/// First `url` value in a raw query string, percent-decoded.
pub fn url_param(query: Option<&str>) -> Option<String> {
    query.and_then(|q| {
        url::form_urlencoded::parse(q.as_bytes())
            .find(|(key, _)| key == URL_PARAM)
            .map(|(_, value)| value.into_owned())
    })
}

/// A validated relay target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayTarget {
    /// The value exactly as the caller sent it.
    pub raw: String,
    /// Parsed absolute URL used for the outbound call.
    pub url: Url,
}

impl RelayTarget {
    /// Pull the first `url` pair out of a raw query string and validate it.
    pub fn from_query(query: Option<&str>) -> Result<Self, RelayError> {
        Self::parse(url_param(query).as_deref())
    }

    /// Validate a candidate target: non-empty, absolute, http(s), with a host.
    pub fn parse(raw: Option<&str>) -> Result<Self, RelayError> {
        let raw = match raw {
            Some(r) if !r.is_empty() => r,
            _ => return Err(RelayError::MissingUrl),
        };

        let url = Url::parse(raw).map_err(|_| RelayError::InvalidUrl)?;
        if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
            return Err(RelayError::InvalidUrl);
        }

        Ok(Self {
            raw: raw.to_string(),
            url,
        })
    }
}

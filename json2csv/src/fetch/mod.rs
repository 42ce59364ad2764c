//! HTTP fetcher for the source JSON document
//!
//! A single GET per conversion. The rule's token, when present, is sent
//! verbatim as the `Authorization` header. Failures are returned as
//! [`FetchError`] and never retried.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{FetchError, FetchResult};

/// Client-side timeout for the whole request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// Options for the HTTP fetch
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Request timeout, connect through body
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Parse and normalize a source URL. Only `http` and `https` are accepted.
pub fn parse_url(raw: &str) -> FetchResult<Url> {
    let url = Url::parse(raw).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

/// HTTP client bound to a set of [`FetchOptions`]
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    options: FetchOptions,
}

impl Fetcher {
    /// Build a fetcher with the given options
    pub fn new(options: FetchOptions) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, options })
    }

    /// GET `url` and return the response body.
    ///
    /// `token` is attached as `Authorization` only when non-empty.
    pub async fn fetch(&self, url: &str, token: Option<&str>) -> FetchResult<Vec<u8>> {
        let url = parse_url(url)?;
        info!(url = %url, authorized = token.is_some_and(|t| !t.is_empty()), "fetching source");

        let mut request = self.client.get(url.clone());
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            request = request.header(AUTHORIZATION, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                self.timeout_error()
            } else {
                FetchError::Body(e)
            }
        })?;

        debug!(bytes = body.len(), status = status.as_u16(), "response received");
        Ok(body.to_vec())
    }

    fn request_error(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            self.timeout_error()
        } else {
            FetchError::Request(error)
        }
    }

    fn timeout_error(&self) -> FetchError {
        FetchError::Timeout {
            secs: self.options.timeout.as_secs(),
        }
    }
}

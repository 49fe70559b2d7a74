//! Content acquisition.
//!
//! The converter never performs I/O itself: a [`Fetcher`] turns a URL into
//! HTML text. [`HttpFetcher`] is the blocking `reqwest` implementation used by
//! [`crate::generate`] and the CLI; tests and embedders can supply any other
//! implementation, including a plain closure.

use std::time::Duration;

use crate::error::Result;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("markify/", env!("CARGO_PKG_VERSION"));

/// Request options passed to a [`Fetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Extra request headers as `(name, value)` pairs.
    pub headers: Vec<(String, String)>,
    /// `User-Agent` header; [`DEFAULT_USER_AGENT`] when `None`.
    pub user_agent: Option<String>,
    /// Total request timeout; `None` disables it.
    pub timeout: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            user_agent: None,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

/// Retrieves the HTML of a URL.
pub trait Fetcher {
    /// Fetch `url` and return its body decoded to UTF-8.
    ///
    /// Non-success statuses are reported as [`crate::Error::HttpStatus`],
    /// transport failures as [`crate::Error::Network`].
    fn fetch(&self, url: &str, options: &FetchOptions) -> Result<String>;
}

impl<F> Fetcher for F
where
    F: Fn(&str, &FetchOptions) -> Result<String>,
{
    fn fetch(&self, url: &str, options: &FetchOptions) -> Result<String> {
        self(url, options)
    }
}

#[cfg(feature = "http")]
pub use http::HttpFetcher;

#[cfg(feature = "http")]
mod http {
    use reqwest::blocking::Client;
    use reqwest::header::CONTENT_TYPE;
    use tracing::debug;

    use super::{FetchOptions, Fetcher, DEFAULT_USER_AGENT};
    use crate::encoding::{charset_from_content_type, decode_with_label};
    use crate::error::{Error, Result};
    use crate::url_utils::is_absolute_url;

    /// Blocking HTTP(S) fetcher backed by `reqwest`.
    ///
    /// A client is built per call so each request honors its own timeout and
    /// user agent. Redirects are followed (up to `reqwest`'s default of 10).
    #[derive(Debug, Clone, Copy, Default)]
    pub struct HttpFetcher;

    impl HttpFetcher {
        /// Create a fetcher.
        #[must_use]
        pub fn new() -> Self {
            Self
        }

        fn client(options: &FetchOptions) -> Result<Client> {
            let user_agent = options.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
            let mut builder = Client::builder().user_agent(user_agent);
            if let Some(timeout) = options.timeout {
                builder = builder.timeout(timeout);
            }
            builder
                .build()
                .map_err(|e| Error::Network(format!("failed to build HTTP client: {e}")))
        }
    }

    impl Fetcher for HttpFetcher {
        fn fetch(&self, url: &str, options: &FetchOptions) -> Result<String> {
            let (is_absolute, parsed) = is_absolute_url(url);
            let Some(parsed) = parsed.filter(|_| is_absolute) else {
                return Err(Error::InvalidUrl(url.to_string()));
            };

            let client = Self::client(options)?;
            let mut request = client.get(parsed.as_str());
            for (name, value) in &options.headers {
                request = request.header(name.as_str(), value.as_str());
            }

            debug!(url = parsed.as_str(), "fetching");
            let response = request.send().map_err(|e| {
                if e.is_builder() {
                    Error::InvalidInput(format!("invalid request: {e}"))
                } else {
                    Error::Network(e.to_string())
                }
            })?;

            let status = response.status();
            debug!(url = parsed.as_str(), status = status.as_u16(), "response received");
            if !status.is_success() {
                return Err(Error::HttpStatus {
                    status: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or_default().to_string(),
                });
            }

            let charset = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .and_then(charset_from_content_type);
            let body = response.bytes().map_err(|e| Error::Network(e.to_string()))?;

            Ok(decode_with_label(&body, charset.as_deref()))
        }
    }
}

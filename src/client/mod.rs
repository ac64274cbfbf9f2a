//! # Content-Delivery Client
//!
//! Transport seam between the core and the content-delivery endpoint.
//! The registry, fetcher, and resolver are generic over
//! [`ContentTransport`] so tests can inject fixtures; [`HttpTransport`]
//! is the reqwest-backed production implementation.

pub mod config;

use std::future::Future;

use thiserror::Error;

pub use config::ContentConfig;

/// Result type for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

/// Failures the transport can report.
///
/// Callers in this crate never surface these: every consumer maps them
/// to a defined fallback value. The status/network split exists because
/// the registry degrades silently on a non-success status but logs a
/// diagnostic on transport failure.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The endpoint answered with a non-success status
    #[error("request for {path} returned status {status}")]
    Status { status: u16, path: String },

    /// The request timed out
    #[error("request for {path} timed out")]
    Timeout { path: String },

    /// The request could not be completed (connection refused, DNS, ...)
    #[error("network error for {path}: {message}")]
    Network { path: String, message: String },
}

impl TransportError {
    fn from_reqwest(err: reqwest::Error, path: &str) -> Self {
        if err.is_timeout() {
            Self::Timeout { path: path.to_string() }
        } else {
            Self::Network {
                path: path.to_string(),
                message: err.to_string(),
            }
        }
    }
}

/// One-operation transport over the content-delivery endpoint.
///
/// Paths are relative to the content root (e.g. `versions.json`,
/// `eng_kjv/version.json`, `eng_kjv/John_3.html`).
pub trait ContentTransport: Send + Sync {
    /// Fetch the body at `path` as text.
    fn fetch(&self, path: &str) -> impl Future<Output = TransportResult<String>> + Send;
}

/// reqwest-backed transport against a configured base URL
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ContentConfig,
}

impl HttpTransport {
    /// Create a transport for the configured endpoint
    pub fn new(config: ContentConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl ContentTransport for HttpTransport {
    async fn fetch(&self, path: &str) -> TransportResult<String> {
        let url = self.config.url_for(path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| TransportError::from_reqwest(err, path))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|err| TransportError::from_reqwest(err, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = TransportError::Status {
            status: 404,
            path: "eng_kjv/version.json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "request for eng_kjv/version.json returned status 404"
        );
    }

    #[test]
    fn test_network_error_display() {
        let err = TransportError::Network {
            path: "versions.json".to_string(),
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("versions.json"));
        assert!(err.to_string().contains("connection refused"));
    }
}

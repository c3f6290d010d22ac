//! Fetch port - retrieving raw catalog text
//!
//! The relay types mirror the message contract of a privileged fetch
//! context: a `{action, url}` request answered by `{success, content}` or
//! `{success: false, error}`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Action name carried by relay requests
pub const RELAY_ACTION: &str = "fetchWithAuth";

/// Message used when a relay fails without saying why
pub const RELAY_DEFAULT_ERROR: &str = "Failed to fetch test cases";

/// Fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// Server answered with a non-success status
    #[error("HTTP {status}: {reason} ({url})")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    /// Request never produced a response
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// Relay reported failure
    #[error("{0}")]
    Relay(String),

    /// Local source could not be read
    #[error("cannot read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Anything that turns a location into raw catalog text
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<F: Fetch + ?Sized> Fetch for Box<F> {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

/// Request sent to a relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayRequest {
    pub action: String,
    pub url: String,
}

impl RelayRequest {
    pub fn fetch_with_auth(url: impl Into<String>) -> Self {
        Self {
            action: RELAY_ACTION.to_string(),
            url: url.into(),
        }
    }
}

/// Relay answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayResponse {
    pub fn ok(content: impl Into<String>) -> Self {
        Self {
            success: true,
            content: Some(content.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            content: None,
            error: Some(error.into()),
        }
    }

    /// Convert into the fetch contract
    pub fn into_result(self) -> Result<String, FetchError> {
        if self.success {
            Ok(self.content.unwrap_or_default())
        } else {
            Err(FetchError::Relay(
                self.error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| RELAY_DEFAULT_ERROR.to_string()),
            ))
        }
    }
}

/// A privileged context that performs fetches on behalf of the caller
pub trait Relay {
    fn send(&self, request: &RelayRequest) -> RelayResponse;
}

//! Direct HTTP fetcher
//!
//! Plain GET with `Accept: text/plain`, optionally carrying a static
//! `Authorization` header. Non-2xx responses are errors.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;

use crate::domain::ports::{Fetch, FetchError};

/// User agent sent on every request
pub const USER_AGENT: &str = concat!("testrun/", env!("CARGO_PKG_VERSION"));

/// Build the shared blocking client
pub fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Send a prepared GET and read the body as text
pub(crate) fn get_text(request: RequestBuilder, url: &str) -> Result<String, FetchError> {
    let response = request
        .header(ACCEPT, "text/plain")
        .send()
        .map_err(|e| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
        });
    }

    response.text().map_err(|e| FetchError::Transport {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Direct fetch without session credentials
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    authorization: Option<String>,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            authorization: None,
        }
    }

    /// Send a fixed `Authorization` header value
    pub fn with_authorization(mut self, value: impl Into<String>) -> Self {
        self.authorization = Some(value.into());
        self
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url, "direct fetch");
        let mut request = self.client.get(url);
        if let Some(auth) = &self.authorization {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        get_text(request, url)
    }
}

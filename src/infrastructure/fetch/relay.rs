//! Credentialed relay
//!
//! Stands in for the privileged context that can attach session
//! credentials the direct fetch does not carry: cookie pairs and a bearer
//! token. Requests and answers use the relay message types, so any other
//! relay (a helper process, a browser bridge) can be swapped in.

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, COOKIE};

use super::http::get_text;
use crate::domain::ports::{Fetch, FetchError, Relay, RelayRequest, RelayResponse, RELAY_ACTION};

/// Session credentials attached out of band
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// `name=value` cookie pairs
    pub cookies: Vec<String>,
    /// Bearer token
    pub token: Option<String>,
}

impl Credentials {
    /// Value for the `Cookie` header, if any cookies are set
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            None
        } else {
            Some(self.cookies.join("; "))
        }
    }
}

/// In-process relay that performs the fetch with credentials attached
#[derive(Debug, Clone)]
pub struct CredentialRelay {
    client: Client,
    credentials: Credentials,
}

impl CredentialRelay {
    pub fn new(client: Client, credentials: Credentials) -> Self {
        Self {
            client,
            credentials,
        }
    }
}

impl Relay for CredentialRelay {
    fn send(&self, request: &RelayRequest) -> RelayResponse {
        if request.action != RELAY_ACTION {
            return RelayResponse::failed(format!("unsupported relay action '{}'", request.action));
        }

        tracing::debug!(
            url = %request.url,
            cookies = self.credentials.cookies.len(),
            token = self.credentials.token.is_some(),
            "relayed fetch"
        );

        let mut builder = self.client.get(&request.url);
        if let Some(cookie) = self.credentials.cookie_header() {
            builder = builder.header(COOKIE, cookie);
        }
        if let Some(token) = &self.credentials.token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        match get_text(builder, &request.url) {
            Ok(content) => RelayResponse::ok(content),
            Err(e) => RelayResponse::failed(e.to_string()),
        }
    }
}

/// Adapts any relay to the fetch contract
#[derive(Debug, Clone)]
pub struct RelayFetcher<R> {
    relay: R,
}

impl<R: Relay> RelayFetcher<R> {
    pub fn new(relay: R) -> Self {
        Self { relay }
    }
}

impl<R: Relay> Fetch for RelayFetcher<R> {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.relay
            .send(&RelayRequest::fetch_with_auth(url))
            .into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingRelay {
        seen: RefCell<Vec<RelayRequest>>,
        answer: RelayResponse,
    }

    impl Relay for RecordingRelay {
        fn send(&self, request: &RelayRequest) -> RelayResponse {
            self.seen.borrow_mut().push(request.clone());
            self.answer.clone()
        }
    }

    #[test]
    fn relay_fetcher_sends_fetch_with_auth() {
        let relay = RecordingRelay {
            seen: RefCell::new(Vec::new()),
            answer: RelayResponse::ok("content"),
        };
        let fetcher = RelayFetcher::new(relay);
        assert_eq!(fetcher.fetch("https://x/y.txt").unwrap(), "content");
        let seen = fetcher.relay.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].action, RELAY_ACTION);
        assert_eq!(seen[0].url, "https://x/y.txt");
    }

    #[test]
    fn relay_fetcher_surfaces_relay_error() {
        let fetcher = RelayFetcher::new(RecordingRelay {
            seen: RefCell::new(Vec::new()),
            answer: RelayResponse::failed("HTTP 403: Forbidden"),
        });
        let err = fetcher.fetch("https://x/y.txt").unwrap_err();
        assert!(matches!(err, FetchError::Relay(ref m) if m == "HTTP 403: Forbidden"));
    }

    #[test]
    fn credential_relay_rejects_unknown_action() {
        let relay = CredentialRelay::new(Client::new(), Credentials::default());
        let resp = relay.send(&RelayRequest {
            action: "somethingElse".to_string(),
            url: "https://x".to_string(),
        });
        assert!(!resp.success);
        assert_eq!(
            resp.error.as_deref(),
            Some("unsupported relay action 'somethingElse'")
        );
    }

    #[test]
    fn credentials_cookie_header_joins_pairs() {
        let creds = Credentials {
            cookies: vec!["a=1".to_string(), "b=2".to_string()],
            token: None,
        };
        assert_eq!(creds.cookie_header().as_deref(), Some("a=1; b=2"));
        assert!(Credentials::default().cookie_header().is_none());
    }
}

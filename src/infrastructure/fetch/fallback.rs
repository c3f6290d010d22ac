//! Two-step fetch strategy: primary, then secondary once

use crate::domain::ports::{Fetch, FetchError};

/// Tries `primary`; on any error invokes `secondary` exactly once
///
/// The secondary's error is the one reported.
#[derive(Debug, Clone)]
pub struct FallbackFetcher<P, S> {
    primary: P,
    secondary: S,
}

impl<P: Fetch, S: Fetch> FallbackFetcher<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: Fetch, S: Fetch> Fetch for FallbackFetcher<P, S> {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        match self.primary.fetch(url) {
            Ok(content) => Ok(content),
            Err(primary_err) => {
                tracing::warn!(error = %primary_err, "direct fetch failed, retrying through relay");
                self.secondary.fetch(url)
            }
        }
    }
}

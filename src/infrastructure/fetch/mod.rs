//! Catalog fetchers
//!
//! - `HttpFetcher` - direct GET
//! - `CredentialRelay` / `RelayFetcher` - credentialed fetch through a relay
//! - `FallbackFetcher` - direct first, relay once on failure
//! - `FileFetcher` / `DirectoryFetcher` - local sources

mod fallback;
mod http;
mod local;
mod relay;

pub use fallback::FallbackFetcher;
pub use http::{build_client, HttpFetcher, USER_AGENT};
pub use local::{DirectoryFetcher, FileFetcher};
pub use relay::{CredentialRelay, Credentials, RelayFetcher};

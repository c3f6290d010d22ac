//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fetch/` - Catalog fetchers (HTTP, relay, fallback, local)
//! - `clipboard` - System and in-memory clipboards

pub mod clipboard;
pub mod fetch;

pub use clipboard::{MemoryClipboard, SystemClipboard};
pub use fetch::{
    CredentialRelay, Credentials, DirectoryFetcher, FallbackFetcher, FileFetcher, HttpFetcher,
    RelayFetcher,
};

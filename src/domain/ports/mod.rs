//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clipboard;
pub mod fetch;

pub use clipboard::{ClipboardError, ClipboardSink};
pub use fetch::{
    Fetch, FetchError, Relay, RelayRequest, RelayResponse, RELAY_ACTION, RELAY_DEFAULT_ERROR,
};

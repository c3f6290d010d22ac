//! Clipboard port

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard not available: {0}")]
    Unavailable(String),

    #[error("failed to copy to clipboard: {0}")]
    Write(String),
}

/// Destination for the generated document
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

//! System clipboard via `arboard`
//!
//! The handle is created lazily and kept for the lifetime of the sink: on
//! X11/Wayland the copied text is only served while the handle is alive.

use crate::domain::ports::{ClipboardError, ClipboardSink};

/// Whether copied text disappears when the process exits (X11/Wayland)
pub const SERVED_BY_PROCESS: bool = cfg!(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
));

#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    wait: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard for commands that exit right after copying.
    ///
    /// Where the text is served by the process, `set_text` blocks until
    /// another program takes over the selection.
    pub fn until_replaced() -> Self {
        Self {
            inner: None,
            wait: true,
        }
    }

    pub fn waits_for_replacement(&self) -> bool {
        self.wait && SERVED_BY_PROCESS
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
        };
        let clipboard = self.inner.insert(clipboard);

        #[cfg(all(
            unix,
            not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
        ))]
        if self.wait {
            use arboard::SetExtLinux;
            return clipboard
                .set()
                .wait()
                .text(text)
                .map_err(|e| ClipboardError::Write(e.to_string()));
        }

        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// In-memory clipboard for tests and headless runs
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    /// When set, every write fails with this message
    pub fail_with: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(msg) = &self.fail_with {
            return Err(ClipboardError::Write(msg.clone()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

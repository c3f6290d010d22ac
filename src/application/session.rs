//! Interactive selection session
//!
//! Owns the selection model for the lifetime of one browse, regenerates
//! the document on demand and reports clipboard outcomes as status
//! messages instead of failing.

use crate::domain::document::{render_document, DocumentFormat};
use crate::domain::ports::ClipboardSink;
use crate::domain::selection::SelectionModel;
use crate::error::TestRunResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Info,
    Error,
}

/// One-line feedback shown under the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

pub struct Session {
    model: SelectionModel,
    title: String,
    format: DocumentFormat,
    status: Option<StatusMessage>,
}

impl Session {
    pub fn new(model: SelectionModel, title: impl Into<String>, format: DocumentFormat) -> Self {
        Self {
            model,
            title: title.into(),
            format,
            status: None,
        }
    }

    pub fn model(&self) -> &SelectionModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut SelectionModel {
        &mut self.model
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current document in the session's format
    pub fn document(&self) -> TestRunResult<String> {
        render_document(&self.model, self.format, &self.title)
    }

    /// Copy the current document, recording the outcome as status
    pub fn copy_to(&mut self, clipboard: &mut dyn ClipboardSink) {
        if !self.model.has_selection() {
            self.status = Some(StatusMessage::info("Nothing selected to copy"));
            return;
        }

        let result = self
            .document()
            .and_then(|doc| clipboard.set_text(&doc).map_err(Into::into));

        self.status = Some(match result {
            Ok(()) => {
                let count = self.model.selected_count();
                tracing::info!(count, "copied document to clipboard");
                StatusMessage::success(format!(
                    "Copied {} test case{} to clipboard",
                    count,
                    if count == 1 { "" } else { "s" }
                ))
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                StatusMessage::error(e.to_string())
            }
        });
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

//! Checklist document generation
//!
//! Renders the current selection into a Markdown checklist (the default)
//! or a CSV sheet with empty result columns for the tester to fill in.
//! Output is a pure function of catalog and selection.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Catalog;
use crate::domain::selection::{selected_test_cases, SelectionModel, SelectionState};
use crate::error::TestRunResult;

/// Default top-level heading
pub const DEFAULT_TITLE: &str = "Test Run";

/// CSV header row
const CSV_HEADER: [&str; 6] = ["id", "Section", "Feature", "Steps", "QA-pass", "Notes"];

/// Output document format
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Markdown,
    Csv,
}

impl DocumentFormat {
    /// File extension used when saving
    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Markdown => "md",
            DocumentFormat::Csv => "csv",
        }
    }
}

/// Render the selection as a Markdown checklist
///
/// Sections without any selected test case are left out entirely.
pub fn render_markdown(catalog: &Catalog, state: &SelectionState, title: &str) -> String {
    let mut out = format!("# {}\n\n", title);

    let selected = selected_test_cases(catalog, state);
    let mut current: Option<&str> = None;

    for (section, tc) in selected {
        if current != Some(section.id()) {
            if current.is_some() {
                out.push('\n');
            }
            out.push_str(&format!("## {}\n", section.name()));
            current = Some(section.id());
        }
        out.push_str(&format!("- [ ] {}   {}\n", tc.id(), tc.name()));
    }
    if current.is_some() {
        out.push('\n');
    }

    out
}

/// Render the selection as a CSV sheet
pub fn render_csv(catalog: &Catalog, state: &SelectionState) -> TestRunResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for (section, tc) in selected_test_cases(catalog, state) {
        writer.write_record([
            tc.id(),
            section.name(),
            tc.name(),
            tc.steps().unwrap_or_default(),
            "",
            "",
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Render the model's selection in the requested format
pub fn render_document(
    model: &SelectionModel,
    format: DocumentFormat,
    title: &str,
) -> TestRunResult<String> {
    match format {
        DocumentFormat::Markdown => Ok(render_markdown(model.catalog(), model.state(), title)),
        DocumentFormat::Csv => render_csv(model.catalog(), model.state()),
    }
}

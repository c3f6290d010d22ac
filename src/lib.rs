//! testrun - build test-run checklists from a shared test case catalog
//!
//! The catalog is a delimited text document of metadata / steps block pairs.
//! testrun parses it, groups the test cases into sections, tracks a tri-state
//! section / test case selection and renders the selection as a Markdown
//! checklist or a CSV sheet.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{load_catalog, LoadError, LoadedCatalog, Session, Source};
pub use config::Config;
pub use domain::document::{render_csv, render_document, render_markdown, DocumentFormat};
pub use domain::entities::{Catalog, Section, TestCase};
pub use domain::organizer::organize;
pub use domain::parser::{parse, parse_with_diagnostics, TestCaseRecord};
pub use domain::selection::{CheckState, SelectionModel, SelectionState};
pub use error::{TestRunError, TestRunResult};

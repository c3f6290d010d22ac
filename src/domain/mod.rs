//! Domain Layer
//!
//! Pure logic without I/O: parsing the catalog source, grouping it into
//! sections, tracking selection and rendering the checklist.
//!
//! ## Structure
//!
//! - `entities/` - TestCase, Section, Catalog
//! - `parser` - raw text into records
//! - `organizer` - records into a catalog
//! - `selection` - selection state and tri-state derivation
//! - `document` - Markdown / CSV checklist generation
//! - `ports/` - Interface definitions for infrastructure

pub mod document;
pub mod entities;
pub mod organizer;
pub mod parser;
pub mod ports;
pub mod selection;

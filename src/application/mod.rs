//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `load_catalog` - Fetch, parse and organize a catalog
//! - `pick` - Select by test case ids and section names
//! - `Session` - Interactive selection session (model + clipboard + status)

pub mod load;
pub mod pick;
pub mod session;

pub use load::{load_catalog, load_with, LoadError, LoadedCatalog, Source, REMEDIATION_HINTS};
pub use pick::{pick, PickReport};
pub use session::{Session, StatusKind, StatusMessage};

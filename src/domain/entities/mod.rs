//! Domain Entities
//!
//! - `TestCase` - A single selectable check
//! - `Section` - A named group of test cases
//! - `Catalog` - The whole ordered tree of sections

mod section;
mod test_case;

pub use section::{Catalog, Section};
pub use test_case::TestCase;

//! Section and Catalog entities
//!
//! A `Catalog` is the whole two-level tree: ordered sections, each owning
//! an ordered list of test cases. It is replaced wholesale on every load.

use serde::Serialize;

use super::test_case::TestCase;

/// A named group of test cases
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Slug derived from the name
    id: String,
    /// Name exactly as it appeared in the source
    name: String,
    test_cases: Vec<TestCase>,
}

impl Section {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            test_cases: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn test_cases(&self) -> &[TestCase] {
        &self.test_cases
    }

    /// Append a test case, preserving insertion order
    pub fn push(&mut self, test_case: TestCase) {
        self.test_cases.push(test_case);
    }

    /// Whether this section contains a test case with the given id
    pub fn contains(&self, test_case_id: &str) -> bool {
        self.test_cases.iter().any(|tc| tc.id() == test_case_id)
    }

    pub fn len(&self) -> usize {
        self.test_cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.test_cases.is_empty()
    }
}

/// Ordered sequence of sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a section by id (first match wins)
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == section_id)
    }

    /// Find the first section containing a test case id
    pub fn section_of(&self, test_case_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.contains(test_case_id))
    }

    /// Total number of test cases across all sections
    pub fn test_case_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

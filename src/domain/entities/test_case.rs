//! TestCase entity - a single selectable check in a catalog section
//!
//! Test cases are built by the organizer from parsed records and are
//! never mutated afterwards.

use serde::Serialize;

/// A single test case inside a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    /// Identifier, assumed unique within its section
    id: String,
    /// Display name (the record's `feature` field)
    name: String,
    /// Steps body, if the record had a `Steps:` block
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<String>,
    /// Creation date as written in the source
    #[serde(skip_serializing_if = "Option::is_none")]
    date_created: Option<String>,
}

impl TestCase {
    /// Create a new test case
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            steps: None,
            date_created: None,
        }
    }

    /// Builder: attach the steps body
    pub fn with_steps(mut self, steps: impl Into<String>) -> Self {
        self.steps = Some(steps.into());
        self
    }

    /// Builder: attach the creation date
    pub fn with_date_created(mut self, date: impl Into<String>) -> Self {
        self.date_created = Some(date.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> Option<&str> {
        self.steps.as_deref()
    }

    pub fn date_created(&self) -> Option<&str> {
        self.date_created.as_deref()
    }
}

//! Selection model for the two-level test-case tree
//!
//! Holds the catalog plus three independent id sets and derives the
//! tri-state checkbox status of each section from them.
//!
//! Invariant: a section id in `selected_section_ids` never coexists with one
//! of that section's test-case ids in `selected_test_case_ids`. Selecting a
//! section clears its children's individual entries, and individual toggles
//! are ignored while the section is selected. Deselecting a section does not
//! restore anything.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::entities::{Catalog, Section, TestCase};

/// Tri-state checkbox status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    Checked,
    Unchecked,
    /// Some children selected individually
    Indeterminate,
}

/// The three id sets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub expanded_section_ids: BTreeSet<String>,
    pub selected_section_ids: BTreeSet<String>,
    pub selected_test_case_ids: BTreeSet<String>,
}

/// Catalog plus selection state
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    catalog: Catalog,
    state: SelectionState,
}

impl SelectionModel {
    /// Create a model for a freshly loaded catalog (all sections expanded)
    pub fn new(catalog: Catalog) -> Self {
        let mut model = Self::default();
        model.load_catalog(catalog);
        model
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Replace the catalog wholesale and expand all of its sections
    ///
    /// Selection sets are kept as-is.
    pub fn load_catalog(&mut self, catalog: Catalog) {
        self.state
            .expanded_section_ids
            .extend(catalog.sections().iter().map(|s| s.id().to_string()));
        self.catalog = catalog;
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    pub fn toggle_expand(&mut self, section_id: &str) {
        toggle(&mut self.state.expanded_section_ids, section_id);
    }

    /// Select or deselect a whole section
    ///
    /// Unknown section ids are ignored.
    pub fn toggle_section_select(&mut self, section_id: &str) {
        let Some(section) = self.catalog.section(section_id) else {
            return;
        };

        if self.state.selected_section_ids.remove(section_id) {
            return;
        }

        self.state
            .selected_section_ids
            .insert(section_id.to_string());
        for tc in section.test_cases() {
            self.state.selected_test_case_ids.remove(tc.id());
        }
    }

    /// Flip a single test case; no-op while its section is selected
    pub fn toggle_test_case_select(&mut self, test_case_id: &str, section_id: &str) {
        if self.state.selected_section_ids.contains(section_id) {
            return;
        }
        toggle(&mut self.state.selected_test_case_ids, test_case_id);
    }

    /// Section-select every section
    pub fn select_all(&mut self) {
        for section in self.catalog.sections() {
            if self.state.selected_section_ids.insert(section.id().to_string()) {
                for tc in section.test_cases() {
                    self.state.selected_test_case_ids.remove(tc.id());
                }
            }
        }
    }

    /// Clear every selection (expansion is untouched)
    pub fn deselect_all(&mut self) {
        self.state.selected_section_ids.clear();
        self.state.selected_test_case_ids.clear();
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    pub fn is_expanded(&self, section_id: &str) -> bool {
        self.state.expanded_section_ids.contains(section_id)
    }

    pub fn is_section_checked(&self, section: &Section) -> bool {
        self.state.selected_section_ids.contains(section.id())
    }

    /// True when some children are individually selected
    ///
    /// A section whose children are *all* individually selected still
    /// reports indeterminate; only section selection yields checked.
    pub fn is_section_indeterminate(&self, section: &Section) -> bool {
        if self.is_section_checked(section) {
            return false;
        }
        section
            .test_cases()
            .iter()
            .any(|tc| self.state.selected_test_case_ids.contains(tc.id()))
    }

    pub fn section_status(&self, section: &Section) -> CheckState {
        if self.is_section_checked(section) {
            CheckState::Checked
        } else if self.is_section_indeterminate(section) {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }

    pub fn is_test_case_checked(&self, test_case_id: &str, section_id: &str) -> bool {
        self.state.selected_section_ids.contains(section_id)
            || self.state.selected_test_case_ids.contains(test_case_id)
    }

    /// Whether individual toggling is locked by section selection
    pub fn is_test_case_locked(&self, section_id: &str) -> bool {
        self.state.selected_section_ids.contains(section_id)
    }

    pub fn has_selection(&self) -> bool {
        !self.state.selected_section_ids.is_empty()
            || !self.state.selected_test_case_ids.is_empty()
    }

    /// Selected test cases with their section, in catalog order
    pub fn selected_test_cases(&self) -> Vec<(&Section, &TestCase)> {
        selected_test_cases(&self.catalog, &self.state)
    }

    pub fn selected_count(&self) -> usize {
        self.selected_test_cases().len()
    }

    pub fn total_count(&self) -> usize {
        self.catalog.test_case_count()
    }
}

/// Selected test cases of `catalog` under `state`, in catalog order
pub fn selected_test_cases<'a>(
    catalog: &'a Catalog,
    state: &SelectionState,
) -> Vec<(&'a Section, &'a TestCase)> {
    catalog
        .sections()
        .iter()
        .flat_map(|section| {
            let whole = state.selected_section_ids.contains(section.id());
            section
                .test_cases()
                .iter()
                .filter(move |tc| whole || state.selected_test_case_ids.contains(tc.id()))
                .map(move |tc| (section, tc))
        })
        .collect()
}

fn toggle(set: &mut BTreeSet<String>, id: &str) {
    if !set.remove(id) {
        set.insert(id.to_string());
    }
}

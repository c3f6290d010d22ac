//! Non-interactive selection from test case ids and section names

use crate::domain::selection::SelectionModel;

/// References that matched nothing in the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickReport {
    pub unknown_ids: Vec<String>,
    pub unknown_sections: Vec<String>,
}

impl PickReport {
    pub fn is_clean(&self) -> bool {
        self.unknown_ids.is_empty() && self.unknown_sections.is_empty()
    }
}

/// Select whole sections (matched by id or case-insensitive name), then
/// individual test cases by id.
///
/// Selecting is idempotent: repeated references never toggle anything off,
/// and ids inside an already selected section are left alone.
pub fn pick(model: &mut SelectionModel, ids: &[String], sections: &[String]) -> PickReport {
    let mut report = PickReport::default();

    for reference in sections {
        let found = model
            .catalog()
            .sections()
            .iter()
            .find(|s| s.id() == reference || s.name().eq_ignore_ascii_case(reference))
            .map(|s| (s.id().to_string(), model.is_section_checked(s)));

        match found {
            Some((section_id, false)) => model.toggle_section_select(&section_id),
            Some((_, true)) => {}
            None => {
                tracing::warn!(section = %reference, "section not found");
                report.unknown_sections.push(reference.clone());
            }
        }
    }

    for id in ids {
        let Some(section_id) = model.catalog().section_of(id).map(|s| s.id().to_string()) else {
            tracing::warn!(id = %id, "test case not found");
            report.unknown_ids.push(id.clone());
            continue;
        };
        if !model.is_test_case_checked(id, &section_id) {
            model.toggle_test_case_select(id, &section_id);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Catalog, Section, TestCase};

    fn model() -> SelectionModel {
        let mut login = Section::new("log-in", "Log In");
        login.push(TestCase::new("L-1", "Can log in"));
        login.push(TestCase::new("L-2", "Can log out"));
        let mut admin = Section::new("admin", "Admin");
        admin.push(TestCase::new("A-1", "Can ban users"));
        SelectionModel::new(Catalog::new(vec![login, admin]))
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pick_selects_ids_and_sections() {
        let mut model = model();
        let report = pick(&mut model, &strings(&["L-2"]), &strings(&["admin"]));

        assert!(report.is_clean());
        assert!(model.state().selected_section_ids.contains("admin"));
        assert!(model.state().selected_test_case_ids.contains("L-2"));
        assert_eq!(model.selected_count(), 2);
    }

    #[test]
    fn pick_matches_section_names_case_insensitively() {
        let mut model = model();
        pick(&mut model, &[], &strings(&["log in"]));
        assert!(model.state().selected_section_ids.contains("log-in"));
    }

    #[test]
    fn pick_reports_unknown_references() {
        let mut model = model();
        let report = pick(&mut model, &strings(&["L-1", "Z-9"]), &strings(&["Billing"]));

        assert_eq!(report.unknown_ids, vec!["Z-9"]);
        assert_eq!(report.unknown_sections, vec!["Billing"]);
        assert!(!report.is_clean());
        assert_eq!(model.selected_count(), 1);
    }

    #[test]
    fn pick_is_idempotent_for_repeats() {
        let mut model = model();
        pick(
            &mut model,
            &strings(&["L-1", "L-1"]),
            &strings(&["admin", "Admin"]),
        );
        assert!(model.state().selected_test_case_ids.contains("L-1"));
        assert!(model.state().selected_section_ids.contains("admin"));
    }

    #[test]
    fn pick_id_inside_selected_section_is_absorbed() {
        let mut model = model();
        pick(&mut model, &strings(&["L-1"]), &strings(&["log-in"]));
        assert!(model.state().selected_test_case_ids.is_empty());
        assert_eq!(model.selected_count(), 2);
    }
}

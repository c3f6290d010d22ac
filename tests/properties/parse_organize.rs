//! Property tests for parsing and organizing catalog text.

use proptest::prelude::*;

use testrun::domain::organizer::section_slug;
use testrun::{organize, parse, parse_with_diagnostics};

fn section_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Login", "Log In", "LOG IN", "Billing", "Admin Panel", "Settings"])
        .prop_map(String::from)
}

fn case() -> impl Strategy<Value = (String, String, String)> {
    (
        "[A-Z]-[0-9]{1,3}",
        section_name(),
        "[a-z][a-z ]{0,20}",
    )
}

fn catalog_text(cases: &[(String, String, String)]) -> String {
    cases
        .iter()
        .map(|(id, section, feature)| {
            format!(
                "id: {}\nsection: {}\nfeature: {}\n---\nSteps: {}",
                id, section, feature, feature
            )
        })
        .collect::<Vec<_>>()
        .join("\n---\n")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(raw in "(?s).{0,512}") {
        let report = parse_with_diagnostics(&raw);
        let _ = organize(report.records);
    }

    /// PROPERTY: Well-formed pairs all survive, in input order.
    #[test]
    fn property_well_formed_records_survive(cases in prop::collection::vec(case(), 0..12)) {
        let records = parse(&catalog_text(&cases));
        prop_assert_eq!(records.len(), cases.len());
        for (record, (id, section, _)) in records.iter().zip(&cases) {
            prop_assert_eq!(record.id(), id.as_str());
            prop_assert_eq!(record.section(), section.as_str());
        }
    }

    /// PROPERTY: Sections appear in first-seen order and keep every test case.
    #[test]
    fn property_sections_in_first_seen_order(cases in prop::collection::vec(case(), 0..16)) {
        let catalog = organize(parse(&catalog_text(&cases)));

        let mut first_seen: Vec<&str> = Vec::new();
        for (_, section, _) in &cases {
            if !first_seen.contains(&section.as_str()) {
                first_seen.push(section);
            }
        }
        let names: Vec<&str> = catalog.sections().iter().map(|s| s.name()).collect();
        prop_assert_eq!(names, first_seen);
        prop_assert_eq!(catalog.test_case_count(), cases.len());
    }

    /// PROPERTY: Section ids are unique even when names slug to the same id.
    #[test]
    fn property_section_ids_unique(cases in prop::collection::vec(case(), 0..16)) {
        let catalog = organize(parse(&catalog_text(&cases)));
        let mut ids: Vec<&str> = catalog.sections().iter().map(|s| s.id()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    /// PROPERTY: Slugs are lowercase and contain no whitespace.
    #[test]
    fn property_slug_has_no_whitespace(name in "[A-Za-z \t]{0,30}") {
        let slug = section_slug(&name);
        prop_assert!(!slug.chars().any(char::is_whitespace));
        prop_assert_eq!(slug.to_lowercase(), slug);
    }
}

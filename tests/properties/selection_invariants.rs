//! Property tests for selection state transitions.

use proptest::prelude::*;

use testrun::domain::document::render_markdown;
use testrun::{Catalog, Section, SelectionModel, TestCase};

#[derive(Debug, Clone)]
enum Op {
    ToggleSection(usize),
    ToggleCase(usize, usize),
    ToggleExpand(usize),
    SelectAll,
    DeselectAll,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..4).prop_map(Op::ToggleSection),
        6 => (0usize..4, 0usize..4).prop_map(|(s, c)| Op::ToggleCase(s, c)),
        1 => (0usize..4).prop_map(Op::ToggleExpand),
        1 => Just(Op::SelectAll),
        1 => Just(Op::DeselectAll),
    ]
}

fn catalog() -> Catalog {
    let sections = (0..3)
        .map(|s| {
            let mut section = Section::new(format!("s{}", s), format!("Section {}", s));
            for c in 0..3 {
                section.push(TestCase::new(format!("S{}-{}", s, c), format!("case {}", c)));
            }
            section
        })
        .collect();
    Catalog::new(sections)
}

/// (section id, test case id) at the given position
fn case_ids(model: &SelectionModel, s: usize, c: usize) -> Option<(String, String)> {
    let section = model.catalog().sections().get(s)?;
    let tc = section.test_cases().get(c)?;
    Some((section.id().to_string(), tc.id().to_string()))
}

fn apply(model: &mut SelectionModel, op: &Op) {
    match *op {
        Op::ToggleSection(s) => {
            let id = model.catalog().sections().get(s).map(|x| x.id().to_string());
            model.toggle_section_select(id.as_deref().unwrap_or("missing"));
        }
        Op::ToggleCase(s, c) => {
            let (section_id, case_id) =
                case_ids(model, s, c).unwrap_or_else(|| ("missing".to_string(), "missing".to_string()));
            model.toggle_test_case_select(&case_id, &section_id);
        }
        Op::ToggleExpand(s) => {
            let id = model.catalog().sections().get(s).map(|x| x.id().to_string());
            model.toggle_expand(id.as_deref().unwrap_or("missing"));
        }
        Op::SelectAll => model.select_all(),
        Op::DeselectAll => model.deselect_all(),
    }
}

/// No selected section may also have individually selected children
fn section_and_children_disjoint(model: &SelectionModel) -> bool {
    model.catalog().sections().iter().all(|section| {
        !model.state().selected_section_ids.contains(section.id())
            || section
                .test_cases()
                .iter()
                .all(|tc| !model.state().selected_test_case_ids.contains(tc.id()))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Section selection and child selection never overlap.
    #[test]
    fn property_section_and_children_never_overlap(ops in prop::collection::vec(op(), 0..40)) {
        let mut model = SelectionModel::new(catalog());
        for op in &ops {
            apply(&mut model, op);
            prop_assert!(section_and_children_disjoint(&model), "after {:?}", op);
        }
    }

    /// PROPERTY: Toggling a section on then off keeps other sections' ids and
    /// clears its own.
    #[test]
    fn property_section_toggle_clears_own_children(
        ops in prop::collection::vec(op(), 0..20),
        target in 0usize..3,
    ) {
        let mut model = SelectionModel::new(catalog());
        for op in &ops {
            apply(&mut model, op);
        }
        let section_id = format!("s{}", target);
        if model.state().selected_section_ids.contains(&section_id) {
            model.toggle_section_select(&section_id);
        }
        let prefix = format!("S{}-", target);
        let before = model.state().selected_test_case_ids.clone();

        model.toggle_section_select(&section_id);
        model.toggle_section_select(&section_id);

        let after = &model.state().selected_test_case_ids;
        let expected: std::collections::BTreeSet<String> =
            before.into_iter().filter(|id| !id.starts_with(&prefix)).collect();
        prop_assert_eq!(after, &expected);
        prop_assert!(!model.state().selected_section_ids.contains(&section_id));
    }

    /// PROPERTY: Toggling a case inside a selected section changes nothing.
    #[test]
    fn property_locked_case_toggle_is_noop(
        ops in prop::collection::vec(op(), 0..20),
        target in 0usize..3,
        case in 0usize..3,
    ) {
        let mut model = SelectionModel::new(catalog());
        for op in &ops {
            apply(&mut model, op);
        }
        let section_id = format!("s{}", target);
        if !model.state().selected_section_ids.contains(&section_id) {
            model.toggle_section_select(&section_id);
        }
        let before = model.state().clone();

        model.toggle_test_case_select(&format!("S{}-{}", target, case), &section_id);
        prop_assert_eq!(model.state(), &before);
    }

    /// PROPERTY: Rendering is deterministic and omits unselected sections.
    #[test]
    fn property_render_deterministic(ops in prop::collection::vec(op(), 0..30)) {
        let mut model = SelectionModel::new(catalog());
        for op in &ops {
            apply(&mut model, op);
        }
        let first = render_markdown(model.catalog(), model.state(), "Test Run");
        let second = render_markdown(model.catalog(), model.state(), "Test Run");
        prop_assert_eq!(&first, &second);

        for section in model.catalog().sections() {
            let heading = format!("## {}\n", section.name());
            let any_selected = section
                .test_cases()
                .iter()
                .any(|tc| model.is_test_case_checked(tc.id(), section.id()));
            prop_assert_eq!(first.contains(&heading), any_selected);
        }
    }
}

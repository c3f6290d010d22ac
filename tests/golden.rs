//! Golden output tests for the checklist documents.

use insta::assert_snapshot;
use testrun::{organize, parse, render_csv, render_markdown, SelectionModel};

const WORKED_EXAMPLE: &str = "id: T1\nsection: Login\nfeature: Can log in\n---\nSteps: do a\n---\nid: T2\nsection: Login\nfeature: Can log out\n---\nSteps: do b";

const CATALOG: &str = r#"
id: L-1
section: Log In
feature: Can log in with email
date_created: 2023-01-05
---
Steps:
1. Open the app
2. Enter email and password
---
id: L-2
section: Log In
feature: Can reset password
---
Steps: Use the "forgot password" link
---
id: B-1
section: Billing
feature: Can add a card
---
Steps: Add a card, then pay
---
id: S-1
section: Settings
feature: Can change language
---
Steps: none
"#;

fn model(raw: &str) -> SelectionModel {
    SelectionModel::new(organize(parse(raw)))
}

#[test]
fn golden_worked_example_is_byte_exact() {
    let mut model = model(WORKED_EXAMPLE);
    model.toggle_section_select("login");

    let doc = render_markdown(model.catalog(), model.state(), "Test Run");
    assert_eq!(
        doc,
        "# Test Run\n\n## Login\n- [ ] T1   Can log in\n- [ ] T2   Can log out\n\n"
    );
}

#[test]
fn golden_markdown_mixed_selection() {
    let mut model = model(CATALOG);
    model.toggle_test_case_select("L-2", "log-in");
    model.toggle_section_select("billing");

    let doc = render_markdown(model.catalog(), model.state(), "Sprint 42");
    assert_snapshot!(doc.trim_end(), @r"
    # Sprint 42

    ## Log In
    - [ ] L-2   Can reset password

    ## Billing
    - [ ] B-1   Can add a card
    ");
}

#[test]
fn golden_markdown_select_all() {
    let mut model = model(CATALOG);
    model.select_all();

    let doc = render_markdown(model.catalog(), model.state(), "Test Run");
    assert_snapshot!(doc.trim_end(), @r"
    # Test Run

    ## Log In
    - [ ] L-1   Can log in with email
    - [ ] L-2   Can reset password

    ## Billing
    - [ ] B-1   Can add a card

    ## Settings
    - [ ] S-1   Can change language
    ");
}

#[test]
fn golden_csv_export() {
    let mut model = model(CATALOG);
    model.toggle_section_select("log-in");
    model.toggle_test_case_select("B-1", "billing");

    let csv = render_csv(model.catalog(), model.state()).unwrap();
    assert_snapshot!(csv.trim_end(), @r#"
    id,Section,Feature,Steps,QA-pass,Notes
    L-1,Log In,Can log in with email,"1. Open the app
    2. Enter email and password",,
    L-2,Log In,Can reset password,"Use the ""forgot password"" link",,
    B-1,Billing,Can add a card,"Add a card, then pay",,
    "#);
}

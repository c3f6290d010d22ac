//! Catalog listing

use anyhow::Result;
use testrun::config::Config;
use testrun::domain::entities::Catalog;

use crate::ui::context::UiContext;
use crate::ui::json;

pub fn cmd_list(source: Option<&str>, config: &Config, ui: &UiContext) -> Result<()> {
    let loaded = super::load(source, config, ui)?;

    if ui.json {
        json::emit(serde_json::json!({
            "event": "catalog",
            "sections": &loaded.catalog,
            "test_cases": loaded.catalog.test_case_count(),
            "dropped_blocks": loaded.diagnostics.len(),
        }))?;
        return Ok(());
    }

    print!("{}", render_catalog(&loaded.catalog));
    Ok(())
}

/// Plain-text tree: section headers followed by indented test cases
pub fn render_catalog(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return "No test cases found\n".to_string();
    }

    let mut out = String::new();
    for section in catalog.sections() {
        out.push_str(&format!("{} ({})\n", section.name(), section.len()));
        for tc in section.test_cases() {
            if tc.name().is_empty() {
                out.push_str(&format!("  {}\n", tc.id()));
            } else {
                out.push_str(&format!("  {}  {}\n", tc.id(), tc.name()));
            }
        }
    }
    out.push_str(&format!(
        "\n{} test case(s) in {} section(s)\n",
        catalog.test_case_count(),
        catalog.sections().len()
    ));
    out
}

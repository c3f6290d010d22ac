//! Command handlers for the testrun binary

pub mod browse;
pub mod list;
pub mod render;

use anyhow::Result;
use testrun::application::{load_catalog, LoadedCatalog, Source};
use testrun::config::Config;
use testrun::TestRunError;

use crate::ui::context::UiContext;
use crate::ui::output::print_parse_summary;

/// `--source` wins over the configured source
pub fn resolve_source(cli_source: Option<&str>, config: &Config) -> Result<Source, TestRunError> {
    cli_source
        .or(config.source.url.as_deref())
        .filter(|s| !s.trim().is_empty())
        .map(Source::parse)
        .ok_or(TestRunError::NoSource)
}

/// Load the catalog and report dropped blocks
pub fn load(cli_source: Option<&str>, config: &Config, ui: &UiContext) -> Result<LoadedCatalog> {
    let source = resolve_source(cli_source, config)?;
    let loaded = load_catalog(&source, &config.source)?;
    // With -v the individual drops are already logged
    if !ui.json && ui.verbose == 0 {
        print_parse_summary(&loaded.diagnostics, ui.unicode);
    }
    Ok(loaded)
}

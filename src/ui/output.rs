use std::path::Path;

use testrun::config::ConfigWarning;
use testrun::domain::parser::ParseDiagnostic;

use crate::ui::theme::{icons, icons_ascii, pick};

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], supports_unicode: bool) {
    let warn = pick(supports_unicode, icons::WARNING, icons_ascii::WARNING);
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("{} Unknown config key '{}' in {}:{}", warn, w.key, path.display(), line);
        } else {
            eprintln!("{} Unknown config key '{}' in {}", warn, w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

pub fn print_parse_summary(diagnostics: &[ParseDiagnostic], supports_unicode: bool) {
    if diagnostics.is_empty() {
        return;
    }
    let warn = pick(supports_unicode, icons::WARNING, icons_ascii::WARNING);
    eprintln!(
        "{} Skipped {} malformed block{} in the catalog (run with -v for details)",
        warn,
        diagnostics.len(),
        if diagnostics.len() == 1 { "" } else { "s" }
    );
}

pub fn print_error(message: &str, supports_unicode: bool) {
    let icon = pick(supports_unicode, icons::ERROR, icons_ascii::ERROR);
    eprintln!("{} Error: {}", icon, message);
}

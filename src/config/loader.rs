//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::document::DocumentFormat;
use crate::error::{TestRunError, TestRunResult};

use super::types::Config;

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "testrun.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Outcome of layered loading
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from (None = built-in defaults)
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TestRunResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TestRunError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit file, the project file, the user file, or defaults
///
/// An explicit path must load; discovered files that fail to parse are
/// skipped with a warning. Environment overrides are applied last.
pub fn load_layered(explicit: Option<&Path>, project_root: &Path) -> TestRunResult<LoadedConfig> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok(LoadedConfig {
            config: with_env_overrides(config),
            path: Some(path.to_path_buf()),
            warnings,
        });
    }

    let candidates = [
        Some(project_root.join(PROJECT_CONFIG_FILE)),
        user_config_path(),
    ];

    for path in candidates.into_iter().flatten() {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                tracing::debug!(path = %path.display(), "loaded config");
                return Ok(LoadedConfig {
                    config: with_env_overrides(config),
                    path: Some(path),
                    warnings,
                });
            }
            Err(e) => tracing::warn!(error = %e, "ignoring unreadable config"),
        }
    }

    Ok(LoadedConfig {
        config: with_env_overrides(Config::default()),
        path: None,
        warnings: Vec::new(),
    })
}

/// User-level config file (`<config_dir>/testrun/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("testrun").join("config.toml"))
}

/// Apply environment variable overrides (TESTRUN_* prefix)
fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

fn with_env_overrides_from(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // TESTRUN_SOURCE
    if let Some(source) = get_env("TESTRUN_SOURCE").filter(|s| !s.trim().is_empty()) {
        config.source.url = Some(source);
    }

    // TESTRUN_TITLE
    if let Some(title) = get_env("TESTRUN_TITLE") {
        config.document.title = title;
    }

    // TESTRUN_FORMAT
    if let Some(format) = get_env("TESTRUN_FORMAT") {
        config.document.format = match format.to_lowercase().as_str() {
            "csv" => DocumentFormat::Csv,
            _ => DocumentFormat::Markdown,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "url",
        "token_env",
        "cookies",
        "timeout_secs",
        "document",
        "title",
        "format",
        "ui",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

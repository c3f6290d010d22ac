//! Catalog loading use case
//!
//! Source location -> raw text -> records -> catalog. Dropped blocks are
//! logged; fetch failures become a single user-facing error.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::config::SourceConfig;
use crate::domain::entities::Catalog;
use crate::domain::organizer::organize;
use crate::domain::parser::{parse_with_diagnostics, ParseDiagnostic};
use crate::domain::ports::{Fetch, FetchError};
use crate::infrastructure::fetch::{
    build_client, CredentialRelay, Credentials, DirectoryFetcher, FallbackFetcher, FileFetcher,
    HttpFetcher, RelayFetcher,
};

/// Static hints appended to remote load failures
pub const REMEDIATION_HINTS: &str = "Make sure:\n\
1. You are signed in to the source host (token or cookie configured)\n\
2. You have access to the repository\n\
3. The source URL in your config is correct";

/// Where the catalog text lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
    /// `<dir>/<section>/*.yml` tree
    Directory(PathBuf),
}

impl Source {
    /// Classify a `--source` argument
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Source::Url(location.to_string());
        }
        let path = PathBuf::from(location);
        if path.is_dir() {
            Source::Directory(path)
        } else {
            Source::File(path)
        }
    }

    /// Location string handed to the fetcher
    pub fn location(&self) -> String {
        match self {
            Source::Url(url) => url.clone(),
            Source::File(path) | Source::Directory(path) => path.display().to_string(),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Source::Url(_))
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.location())
    }
}

/// Failure to produce a catalog
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{}\n\n{}", .0, REMEDIATION_HINTS)]
    Remote(FetchError),

    #[error(transparent)]
    Local(FetchError),
}

/// A loaded catalog plus what the parser dropped
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Resolve relay credentials from config
pub fn credentials_from_config(
    source: &SourceConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> Credentials {
    let token = source
        .token_env
        .as_deref()
        .and_then(&get_env)
        .filter(|t| !t.trim().is_empty());
    Credentials {
        cookies: source.cookies.clone(),
        token,
    }
}

/// Build the fetcher for a source
///
/// URLs get the direct fetch with the credentialed relay as fallback.
pub fn fetcher_for(source: &Source, config: &SourceConfig) -> Box<dyn Fetch> {
    match source {
        Source::Url(_) => {
            let client = build_client(Duration::from_secs(config.timeout_secs));
            let credentials = credentials_from_config(config, |key| std::env::var(key).ok());
            Box::new(FallbackFetcher::new(
                HttpFetcher::new(client.clone()),
                RelayFetcher::new(CredentialRelay::new(client, credentials)),
            ))
        }
        Source::File(_) => Box::new(FileFetcher),
        Source::Directory(_) => Box::new(DirectoryFetcher),
    }
}

/// Fetch, parse and organize the catalog at `source`
pub fn load_catalog(source: &Source, config: &SourceConfig) -> Result<LoadedCatalog, LoadError> {
    let fetcher = fetcher_for(source, config);
    load_with(fetcher.as_ref(), source)
}

/// Same as [`load_catalog`] with an explicit fetcher
pub fn load_with(fetcher: &dyn Fetch, source: &Source) -> Result<LoadedCatalog, LoadError> {
    let location = source.location();
    tracing::info!(source = %location, "loading catalog");

    let raw = fetcher.fetch(&location).map_err(|e| {
        if source.is_remote() {
            LoadError::Remote(e)
        } else {
            LoadError::Local(e)
        }
    })?;

    let report = parse_with_diagnostics(&raw);
    for diag in &report.diagnostics {
        tracing::warn!(%diag, "dropped catalog block");
    }

    let catalog = organize(report.records);
    tracing::info!(
        sections = catalog.sections().len(),
        test_cases = catalog.test_case_count(),
        "catalog loaded"
    );

    Ok(LoadedCatalog {
        catalog,
        diagnostics: report.diagnostics,
    })
}

/// Default save path for a document: `test-run-YYYYMMDD.<ext>` under `dir`
pub fn default_output_path(dir: &Path, date: chrono::NaiveDate, extension: &str) -> PathBuf {
    dir.join(format!("test-run-{}.{}", date.format("%Y%m%d"), extension))
}

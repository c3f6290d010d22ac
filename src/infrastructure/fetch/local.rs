//! Local catalog sources
//!
//! `FileFetcher` reads one pre-concatenated catalog file. `DirectoryFetcher`
//! reads a `test-cases/` style tree (`<dir>/<section>/*.yml`) and joins the
//! files with block delimiters, so the result parses like a single file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ports::{Fetch, FetchError};

/// Extension of test-case files inside section directories
const CASE_EXTENSION: &str = "yml";

fn read_error(path: &Path) -> impl FnOnce(std::io::Error) -> FetchError + '_ {
    move |source| FetchError::Read {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads a single catalog file
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl Fetch for FileFetcher {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        let path = Path::new(location);
        fs::read_to_string(path).map_err(read_error(path))
    }
}

/// Reads section directories of `.yml` files
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryFetcher;

impl DirectoryFetcher {
    /// Case files in deterministic order: section directory, then file name
    pub fn case_files(root: &Path) -> Result<Vec<PathBuf>, FetchError> {
        let mut sections = sorted_entries(root)?;
        sections.retain(|p| p.is_dir() && !is_hidden(p));

        let mut files = Vec::new();
        for section in sections {
            let mut cases = sorted_entries(&section)?;
            cases.retain(|p| {
                p.is_file() && p.extension().is_some_and(|e| e == CASE_EXTENSION)
            });
            files.extend(cases);
        }
        Ok(files)
    }
}

impl Fetch for DirectoryFetcher {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        let root = Path::new(location);
        let mut parts = Vec::new();
        for file in Self::case_files(root)? {
            parts.push(fs::read_to_string(&file).map_err(read_error(&file))?);
        }
        tracing::debug!(files = parts.len(), dir = %root.display(), "read case directory");
        Ok(parts.join("\n---\n"))
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, FetchError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error(dir))? {
        entries.push(entry.map_err(read_error(dir))?.path());
    }
    entries.sort();
    Ok(entries)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

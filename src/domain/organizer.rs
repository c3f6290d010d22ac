//! Groups parsed records into the section tree
//!
//! Sections appear in the order their name is first seen; test cases keep
//! input order within their section.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::entities::{Catalog, Section, TestCase};
use crate::domain::parser::TestCaseRecord;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Derive a section id from its display name
///
/// Lowercases and collapses every whitespace run into a single `-`.
pub fn section_slug(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

/// Group records into a catalog
///
/// Grouping is by exact section name. Distinct names whose slugs collide
/// (e.g. `Log In` and `log  in`) stay separate sections; later ones get a
/// numeric suffix (`log-in-2`) so every section id is unique.
pub fn organize<I>(records: I) -> Catalog
where
    I: IntoIterator<Item = TestCaseRecord>,
{
    let mut sections: Vec<Section> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();
    let mut used_ids: HashSet<String> = HashSet::new();

    for record in records {
        let idx = match index_by_name.get(record.section()) {
            Some(&idx) => idx,
            None => {
                let id = unique_id(section_slug(record.section()), &used_ids);
                used_ids.insert(id.clone());
                sections.push(Section::new(id, record.section()));
                index_by_name.insert(record.section().to_string(), sections.len() - 1);
                sections.len() - 1
            }
        };
        sections[idx].push(to_test_case(&record));
    }

    Catalog::new(sections)
}

fn unique_id(slug: String, used: &HashSet<String>) -> String {
    if !used.contains(&slug) {
        return slug;
    }
    (2..)
        .map(|n| format!("{}-{}", slug, n))
        .find(|candidate| !used.contains(candidate))
        .unwrap_or(slug)
}

fn to_test_case(record: &TestCaseRecord) -> TestCase {
    let mut tc = TestCase::new(record.id(), record.feature().unwrap_or_default());
    if let Some(steps) = record.steps() {
        tc = tc.with_steps(steps);
    }
    if let Some(date) = record.date_created() {
        tc = tc.with_date_created(date);
    }
    tc
}

//! Catalog source parser
//!
//! Turns the delimited plain-text catalog into flat test-case records.
//!
//! The source is a sequence of blocks separated by `---`, consumed in pairs:
//!
//! ```text
//! id: L-1
//! section: Login
//! feature: Can log in
//! ---
//! Steps: 1. open the app
//! ---
//! ```
//!
//! Parsing is total. Anything that does not fit the format is dropped, and
//! `parse_with_diagnostics` reports what was dropped and why.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Delimiter between blocks
const BLOCK_DELIMITER: &str = "---";

/// Prefix that marks a steps block
const STEPS_PREFIX: &str = "Steps:";

/// `key: value`, key restricted to ASCII word characters
static METADATA_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9_]+):\s*(.+)$").unwrap());

/// A parsed test-case record, before grouping into sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCaseRecord {
    /// Every metadata field found in the block
    pub fields: BTreeMap<String, String>,
    /// Steps body, without the `Steps:` prefix
    pub steps: Option<String>,
}

impl TestCaseRecord {
    fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Record id (always present on records returned by the parser)
    pub fn id(&self) -> &str {
        self.field("id").unwrap_or_default()
    }

    /// Section name (always present on records returned by the parser)
    pub fn section(&self) -> &str {
        self.field("section").unwrap_or_default()
    }

    pub fn feature(&self) -> Option<&str> {
        self.field("feature")
    }

    pub fn date_created(&self) -> Option<&str> {
        self.field("date_created")
    }

    pub fn steps(&self) -> Option<&str> {
        self.steps.as_deref()
    }
}

/// Why a block pair did not produce a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    MissingId,
    MissingSection,
    MissingIdAndSection,
    /// Odd block count: the last metadata block has no steps block
    UnpairedBlock,
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            DropReason::MissingId => "missing 'id' field",
            DropReason::MissingSection => "missing 'section' field",
            DropReason::MissingIdAndSection => "missing 'id' and 'section' fields",
            DropReason::UnpairedBlock => "trailing block has no steps block",
        };
        f.write_str(msg)
    }
}

/// A block pair that was dropped during parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    /// Zero-based index of the block pair
    pub pair: usize,
    pub reason: DropReason,
}

impl std::fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "block pair {}: {}", self.pair, self.reason)
    }
}

/// Records plus everything that was dropped on the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub records: Vec<TestCaseRecord>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Parse raw catalog text into records
pub fn parse(raw: &str) -> Vec<TestCaseRecord> {
    parse_with_diagnostics(raw).records
}

/// Parse raw catalog text, reporting dropped block pairs
pub fn parse_with_diagnostics(raw: &str) -> ParseReport {
    let blocks: Vec<&str> = raw
        .split(BLOCK_DELIMITER)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect();

    let mut report = ParseReport::default();

    for (pair, chunk) in blocks.chunks(2).enumerate() {
        let [metadata, steps] = chunk else {
            report.diagnostics.push(ParseDiagnostic {
                pair,
                reason: DropReason::UnpairedBlock,
            });
            continue;
        };

        let record = TestCaseRecord {
            fields: parse_metadata(metadata),
            steps: parse_steps(steps),
        };

        let has_id = record.fields.contains_key("id");
        let has_section = record.fields.contains_key("section");
        let reason = match (has_id, has_section) {
            (true, true) => {
                report.records.push(record);
                continue;
            }
            (false, true) => DropReason::MissingId,
            (true, false) => DropReason::MissingSection,
            (false, false) => DropReason::MissingIdAndSection,
        };
        report.diagnostics.push(ParseDiagnostic { pair, reason });
    }

    report
}

fn parse_metadata(block: &str) -> BTreeMap<String, String> {
    block
        .lines()
        .filter_map(|line| METADATA_LINE.captures(line))
        .map(|caps| (caps[1].to_string(), caps[2].trim().to_string()))
        .collect()
}

fn parse_steps(block: &str) -> Option<String> {
    block
        .strip_prefix(STEPS_PREFIX)
        .map(|rest| rest.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CASES: &str = "id: T1\nsection: Login\nfeature: Can log in\n---\nSteps: do a\n---\nid: T2\nsection: Login\nfeature: Can log out\n---\nSteps: do b";

    #[test]
    fn parse_reads_paired_blocks() {
        let records = parse(TWO_CASES);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), "T1");
        assert_eq!(records[0].section(), "Login");
        assert_eq!(records[0].feature(), Some("Can log in"));
        assert_eq!(records[0].steps(), Some("do a"));
        assert_eq!(records[1].id(), "T2");
        assert_eq!(records[1].steps(), Some("do b"));
    }

    #[test]
    fn parse_empty_input_yields_nothing() {
        let report = parse_with_diagnostics("");
        assert!(report.records.is_empty());
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn parse_garbage_yields_nothing() {
        assert!(parse("just some prose without structure").is_empty());
    }

    #[test]
    fn parse_skips_leading_delimiter() {
        let raw = "---\nid: T1\nsection: Login\n---\nSteps: go\n";
        let records = parse(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), "T1");
    }

    #[test]
    fn parse_concatenated_frontmatter_files() {
        let raw = "---\nid: L-1\nsection: Login\n---\nSteps: a\n---\nid: L-2\nsection: Login\n---\nSteps: b\n";
        let ids: Vec<_> = parse(raw).iter().map(|r| r.id().to_string()).collect();
        assert_eq!(ids, vec!["L-1", "L-2"]);
    }

    #[test]
    fn parse_trims_values() {
        let records = parse("id:    T1   \nsection:\tLogin\n---\nSteps:   spaced   ");
        assert_eq!(records[0].id(), "T1");
        assert_eq!(records[0].section(), "Login");
        assert_eq!(records[0].steps(), Some("spaced"));
    }

    #[test]
    fn parse_skips_unmatched_metadata_lines() {
        let raw = "# comment\nid: T1\nnot a field\nweird-key: skipped\nsection: Login\n---\nSteps: x";
        let records = parse(raw);
        assert_eq!(records.len(), 1);
        assert!(!records[0].fields.contains_key("weird-key"));
        assert_eq!(records[0].fields.len(), 2);
    }

    #[test]
    fn parse_later_duplicate_key_wins() {
        let records = parse("id: T1\nid: T9\nsection: Login\n---\nSteps: x");
        assert_eq!(records[0].id(), "T9");
    }

    #[test]
    fn parse_steps_without_prefix_are_ignored() {
        let records = parse("id: T1\nsection: Login\n---\n1. do a thing");
        assert_eq!(records.len(), 1);
        assert!(records[0].steps().is_none());
    }

    #[test]
    fn parse_keeps_multiline_steps() {
        let records = parse("id: T1\nsection: Login\n---\nSteps:\n1. open\n2. click\n");
        assert_eq!(records[0].steps(), Some("1. open\n2. click"));
    }

    #[test]
    fn parse_handles_crlf_line_endings() {
        let records = parse("id: T1\r\nsection: Login\r\n---\r\nSteps: x\r\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].section(), "Login");
    }

    #[test]
    fn parse_drops_incomplete_records_with_diagnostics() {
        let raw = "id: T1\n---\nSteps: a\n---\nsection: Login\n---\nSteps: b\n---\nfeature: x\n---\nSteps: c";
        let report = parse_with_diagnostics(raw);
        assert!(report.records.is_empty());
        assert_eq!(
            report.diagnostics,
            vec![
                ParseDiagnostic { pair: 0, reason: DropReason::MissingSection },
                ParseDiagnostic { pair: 1, reason: DropReason::MissingId },
                ParseDiagnostic { pair: 2, reason: DropReason::MissingIdAndSection },
            ]
        );
    }

    #[test]
    fn parse_ignores_trailing_unpaired_block() {
        let raw = format!("{}\n---\nid: T3\nsection: Login", TWO_CASES);
        let report = parse_with_diagnostics(&raw);
        assert_eq!(report.records.len(), 2);
        assert_eq!(
            report.diagnostics,
            vec![ParseDiagnostic { pair: 2, reason: DropReason::UnpairedBlock }]
        );
    }

    #[test]
    fn diagnostic_display_names_pair_and_reason() {
        let diag = ParseDiagnostic { pair: 3, reason: DropReason::MissingId };
        assert_eq!(diag.to_string(), "block pair 3: missing 'id' field");
    }
}

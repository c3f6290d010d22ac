//! Terminal rendering functions for the tree menu.
//!
//! Everything here renders to plain strings so it can be tested without a
//! terminal; the interactive loop handles placement and color.

use testrun::application::{StatusKind, StatusMessage};
use testrun::domain::entities::{Section, TestCase};
use testrun::domain::selection::CheckState;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme::{icons, icons_ascii, pick};

use super::menu::FlattenedRow;

fn check_icon(state: CheckState, supports_unicode: bool) -> &'static str {
    match state {
        CheckState::Checked => pick(supports_unicode, icons::SELECTED, icons_ascii::SELECTED),
        CheckState::Unchecked => pick(supports_unicode, icons::UNSELECTED, icons_ascii::UNSELECTED),
        CheckState::Indeterminate => pick(supports_unicode, icons::PARTIAL, icons_ascii::PARTIAL),
    }
}

/// Render a single tree row to a string
pub fn render_tree_row(row: &FlattenedRow, is_active: bool, supports_unicode: bool) -> String {
    let indent = "  ".repeat(row.depth);
    let cursor = if is_active { "> " } else { "  " };
    let state_icon = check_icon(row.state, supports_unicode);

    // Sections always get an expansion marker, even when empty
    let expand_icon = if row.depth == 0 {
        let icon = if row.expanded {
            pick(supports_unicode, icons::EXPAND, icons_ascii::EXPAND)
        } else {
            pick(supports_unicode, icons::COLLAPSE, icons_ascii::COLLAPSE)
        };
        format!("{} ", icon)
    } else {
        String::from("  ")
    };

    let suffix = if row.depth == 0 {
        format!(" ({})", row.case_count)
    } else if row.locked {
        format!(" {}", pick(supports_unicode, icons::LOCKED, icons_ascii::LOCKED))
    } else {
        String::new()
    };

    format!(
        "{}{}{}{} {}{}",
        cursor, indent, expand_icon, state_icon, row.label, suffix
    )
}

/// Render the status bar showing selection counts
pub fn render_status_bar(selected: usize, total: usize, supports_unicode: bool) -> String {
    format!(
        "Selected: {}/{} test cases\n\n{} = selected    {} = partial    {} = not selected",
        selected,
        total,
        check_icon(CheckState::Checked, supports_unicode),
        check_icon(CheckState::Indeterminate, supports_unicode),
        check_icon(CheckState::Unchecked, supports_unicode),
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar() -> String {
    String::from(
        "[a] All    [n] None    [c] Copy    [Enter] Print    [q] Quit\n\
         (Use ↑↓ to navigate, Space to toggle, →← to expand/collapse, Tab to fold)",
    )
}

/// Steps and creation date of a single test case
pub fn render_detail(section: &Section, test_case: &TestCase) -> String {
    let mut out = format!("{} · {}\n", test_case.id(), section.name());
    if let Some(date) = test_case.date_created() {
        out.push_str(&format!("Created: {}\n", date));
    }
    match test_case.steps() {
        Some(steps) => {
            out.push_str("Steps:\n");
            for line in steps.lines() {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
        }
        None => out.push_str("No steps recorded\n"),
    }
    out
}

/// One-line status message with its icon
pub fn render_status_message(status: &StatusMessage, supports_unicode: bool) -> String {
    let icon = match status.kind {
        StatusKind::Success => pick(supports_unicode, icons::SUCCESS, icons_ascii::SUCCESS),
        StatusKind::Info => pick(supports_unicode, icons::INFO, icons_ascii::INFO),
        StatusKind::Error => pick(supports_unicode, icons::ERROR, icons_ascii::ERROR),
    };
    format!("{} {}", icon, status.text)
}

/// Cut a line to at most `width` terminal columns
pub fn fit_width(line: &str, width: usize) -> String {
    if line.width() <= width {
        return line.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

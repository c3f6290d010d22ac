//! TreeMenu state management and action handling.
//!
//! The menu owns only presentation state (cursor, flattened rows). All
//! selection state lives in the `SelectionModel` it is handed on every
//! call; after each mutation the rows are rebuilt from the model.

use testrun::domain::selection::{CheckState, SelectionModel};

use super::render::{render_detail, render_help_bar, render_status_bar, render_tree_row};

/// What a flattened row points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    Section { section: usize },
    TestCase { section: usize, case: usize },
}

impl RowTarget {
    pub fn section_index(self) -> usize {
        match self {
            RowTarget::Section { section } | RowTarget::TestCase { section, .. } => section,
        }
    }
}

/// A flattened representation of a tree row for rendering
#[derive(Debug, Clone)]
pub struct FlattenedRow {
    pub target: RowTarget,
    /// Depth level (0 = section)
    pub depth: usize,
    /// Display label
    pub label: String,
    /// Checkbox state
    pub state: CheckState,
    /// Whether this row is expanded (sections only)
    pub expanded: bool,
    /// Whether this row has children
    pub has_children: bool,
    /// Test case count for sections
    pub case_count: usize,
    /// Checked through its section; individual toggling is ignored
    pub locked: bool,
}

/// Tree menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Toggle selection
    Toggle,
    /// Expand section
    Expand,
    /// Collapse section (from a test case: collapse its parent)
    Collapse,
    /// Flip expansion of the current section
    ToggleExpand,
    /// Select every section
    SelectAll,
    /// Clear every selection
    SelectNone,
    /// Copy document to clipboard
    Copy,
    /// Confirm selection
    Confirm,
    /// Quit without confirming
    Quit,
}

/// Interactive tree menu over a selection model
#[derive(Debug, Default)]
pub struct TreeMenu {
    /// Current cursor position in flattened view
    pub cursor: usize,
    /// Cached flattened rows for rendering
    rows: Vec<FlattenedRow>,
}

impl TreeMenu {
    pub fn new(model: &SelectionModel) -> Self {
        let mut menu = Self::default();
        menu.rebuild(model);
        menu
    }

    /// Rebuild the flattened row list from the model
    pub fn rebuild(&mut self, model: &SelectionModel) {
        self.rows = Self::flatten(model);
        // Ensure cursor is within bounds
        if self.rows.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len() - 1;
        }
    }

    fn flatten(model: &SelectionModel) -> Vec<FlattenedRow> {
        let mut rows = Vec::new();

        for (si, section) in model.catalog().sections().iter().enumerate() {
            let expanded = model.is_expanded(section.id());
            rows.push(FlattenedRow {
                target: RowTarget::Section { section: si },
                depth: 0,
                label: section.name().to_string(),
                state: model.section_status(section),
                expanded,
                has_children: !section.is_empty(),
                case_count: section.len(),
                locked: false,
            });

            if !expanded {
                continue;
            }

            let locked = model.is_test_case_locked(section.id());
            for (ci, tc) in section.test_cases().iter().enumerate() {
                let checked = model.is_test_case_checked(tc.id(), section.id());
                rows.push(FlattenedRow {
                    target: RowTarget::TestCase {
                        section: si,
                        case: ci,
                    },
                    depth: 1,
                    label: if tc.name().is_empty() {
                        tc.id().to_string()
                    } else {
                        format!("{}  {}", tc.id(), tc.name())
                    },
                    state: if checked {
                        CheckState::Checked
                    } else {
                        CheckState::Unchecked
                    },
                    expanded: false,
                    has_children: false,
                    case_count: 0,
                    locked,
                });
            }
        }

        rows
    }

    /// Get flattened rows for rendering
    pub fn rows(&self) -> &[FlattenedRow] {
        &self.rows
    }

    /// Row under the cursor
    pub fn current(&self) -> Option<&FlattenedRow> {
        self.rows.get(self.cursor)
    }

    /// Handle a tree action; returns true when the menu should close
    pub fn handle_action(&mut self, model: &mut SelectionModel, action: TreeAction) -> bool {
        match action {
            TreeAction::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                false
            }
            TreeAction::Down => {
                if self.cursor + 1 < self.rows.len() {
                    self.cursor += 1;
                }
                false
            }
            TreeAction::Toggle => {
                if let Some((section_id, case_id)) = self.current_ids(model) {
                    match case_id {
                        Some(case_id) => model.toggle_test_case_select(&case_id, &section_id),
                        None => model.toggle_section_select(&section_id),
                    }
                }
                self.rebuild(model);
                false
            }
            TreeAction::Expand => {
                if let Some(row) = self.current() {
                    if let RowTarget::Section { .. } = row.target {
                        if !row.expanded && row.has_children {
                            self.toggle_current_section(model);
                        }
                    }
                }
                self.rebuild(model);
                false
            }
            TreeAction::Collapse => {
                if let Some(row) = self.current().cloned() {
                    let section_row = self.section_row_index(row.target.section_index());
                    let section_expanded = section_row
                        .and_then(|i| self.rows.get(i))
                        .map(|r| r.expanded)
                        .unwrap_or(false);
                    if section_expanded {
                        if let Some(i) = section_row {
                            self.cursor = i;
                        }
                        self.toggle_current_section(model);
                    }
                }
                self.rebuild(model);
                false
            }
            TreeAction::ToggleExpand => {
                if let Some(row) = self.current() {
                    if let RowTarget::Section { .. } = row.target {
                        self.toggle_current_section(model);
                    }
                }
                self.rebuild(model);
                false
            }
            TreeAction::SelectAll => {
                model.select_all();
                self.rebuild(model);
                false
            }
            TreeAction::SelectNone => {
                model.deselect_all();
                self.rebuild(model);
                false
            }
            // Handled by the interactive loop, which owns the clipboard.
            TreeAction::Copy => false,
            TreeAction::Confirm => true,
            TreeAction::Quit => true,
        }
    }

    /// (section id, test case id) of the row under the cursor
    fn current_ids(&self, model: &SelectionModel) -> Option<(String, Option<String>)> {
        let row = self.current()?;
        let section = model
            .catalog()
            .sections()
            .get(row.target.section_index())?;
        let case_id = match row.target {
            RowTarget::Section { .. } => None,
            RowTarget::TestCase { case, .. } => {
                Some(section.test_cases().get(case)?.id().to_string())
            }
        };
        Some((section.id().to_string(), case_id))
    }

    fn toggle_current_section(&self, model: &mut SelectionModel) {
        if let Some((section_id, _)) = self.current_ids(model) {
            model.toggle_expand(&section_id);
        }
    }

    fn section_row_index(&self, section: usize) -> Option<usize> {
        self.rows
            .iter()
            .position(|r| r.target == RowTarget::Section { section })
    }

    /// Range of rows that fit in `height` lines, keeping the cursor visible
    pub fn visible_range(&self, height: usize) -> std::ops::Range<usize> {
        let len = self.rows.len();
        if height == 0 || len <= height {
            return 0..len;
        }
        let half = height / 2;
        let start = self.cursor.saturating_sub(half).min(len - height);
        start..start + height
    }

    /// Render the visible part of the tree to a string
    pub fn render(&self, supports_unicode: bool, height: usize) -> String {
        let mut out = String::new();

        for i in self.visible_range(height) {
            let is_active = i == self.cursor;
            out.push_str(&render_tree_row(&self.rows[i], is_active, supports_unicode));
            out.push('\n');
        }

        out
    }

    /// Render the status bar
    pub fn render_status_bar(&self, model: &SelectionModel, supports_unicode: bool) -> String {
        render_status_bar(model.selected_count(), model.total_count(), supports_unicode)
    }

    /// Render details of the test case under the cursor
    pub fn render_detail(&self, model: &SelectionModel) -> String {
        match self.current().map(|r| r.target) {
            Some(RowTarget::TestCase { section, case }) => model
                .catalog()
                .sections()
                .get(section)
                .and_then(|s| s.test_cases().get(case).map(|tc| render_detail(s, tc)))
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    /// Render the help bar
    pub fn render_help_bar(&self) -> String {
        render_help_bar()
    }
}

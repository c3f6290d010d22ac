use crossterm::style::Color;

/// Design tokens for the testrun terminal UI.
///
/// Design constraints:
/// - Only semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const INFO: &str = "ℹ";

    // Checkbox states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";
    pub const LOCKED: &str = "🔒";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const HEADER: &str = "📋";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const INFO: &str = "[i]";

    // Checkbox states.
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";
    pub const LOCKED: &str = "(locked)";

    // Tree expansion.
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const HEADER: &str = "[TESTRUN]";
}

pub mod borders {
    pub const HORIZONTAL: &str = "─";
}

pub mod borders_ascii {
    pub const HORIZONTAL: &str = "-";
}

/// Pick the Unicode or ASCII variant of a token
pub fn pick(supports_unicode: bool, unicode: &'static str, ascii: &'static str) -> &'static str {
    if supports_unicode {
        unicode
    } else {
        ascii
    }
}

/// Horizontal rule of the given width
pub fn rule(supports_unicode: bool, width: usize) -> String {
    pick(supports_unicode, borders::HORIZONTAL, borders_ascii::HORIZONTAL).repeat(width)
}

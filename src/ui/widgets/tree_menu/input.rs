//! Keyboard input handling and interactive loop.

use std::io::{self, Stdout, Write};

use crossterm::event::KeyEvent;
use crossterm::{
    cursor, execute,
    style::{Print, Stylize},
    terminal::{self, ClearType},
};
use testrun::application::{Session, StatusKind};
use testrun::domain::ports::ClipboardSink;

use super::menu::{TreeAction, TreeMenu};
use super::render::{fit_width, render_status_message};
use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme::{colors, icons, icons_ascii, pick, rule};

/// Lines taken by everything except the tree and the preview
const CHROME_LINES: usize = 12 + DETAIL_LINES;
/// Height of the strip describing the case under the cursor
const DETAIL_LINES: usize = 4;
const PREVIEW_EMPTY: &str = "No test cases selected";

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent) -> Option<TreeAction> {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Char(' ') => Some(TreeAction::Toggle),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(TreeAction::Collapse),
        KeyCode::Tab => Some(TreeAction::ToggleExpand),
        KeyCode::Char('a') => Some(TreeAction::SelectAll),
        KeyCode::Char('n') => Some(TreeAction::SelectNone),
        KeyCode::Char('c') => Some(TreeAction::Copy),
        KeyCode::Enter => Some(TreeAction::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Raw mode and hidden cursor for as long as the guard lives
struct RawModeGuard {
    stdout: Stdout,
}

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { stdout })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Split the available rows between the tree and the preview pane
fn pane_heights(terminal_height: usize) -> (usize, usize) {
    let available = terminal_height.saturating_sub(CHROME_LINES).max(4);
    let tree = available.div_ceil(2);
    (tree, available - tree)
}

/// Build the full screen as lines, top to bottom
pub fn compose_screen(
    menu: &TreeMenu,
    session: &Session,
    caps: &TerminalCapabilities,
) -> Vec<String> {
    let unicode = caps.supports_unicode;
    let width = usize::from(caps.width.max(20));
    let (tree_height, preview_height) = pane_heights(usize::from(caps.height));
    let model = session.model();
    let mut lines = Vec::new();

    lines.push(format!(
        "{} {}",
        pick(unicode, icons::HEADER, icons_ascii::HEADER),
        session.title()
    ));
    lines.push(String::new());
    lines.extend(menu.render(unicode, tree_height).lines().map(String::from));
    if menu.rows().is_empty() {
        lines.push("  (catalog is empty)".to_string());
    }
    lines.push(rule(unicode, width));

    let detail = menu.render_detail(model);
    lines.extend(
        detail
            .lines()
            .chain(std::iter::repeat(""))
            .take(DETAIL_LINES)
            .map(String::from),
    );
    lines.push(rule(unicode, width));

    // Preview is rebuilt from the model on every draw
    let preview = if !model.has_selection() {
        PREVIEW_EMPTY.to_string()
    } else {
        session
            .document()
            .unwrap_or_else(|e| format!("Preview unavailable: {}", e))
    };
    let preview_lines: Vec<&str> = preview.lines().collect();
    for line in preview_lines.iter().take(preview_height) {
        lines.push(line.to_string());
    }
    if preview_lines.len() > preview_height {
        lines.push(format!(
            "  … {} more line(s)",
            preview_lines.len() - preview_height
        ));
    }

    lines.push(rule(unicode, width));
    lines.extend(menu.render_status_bar(model, unicode).lines().map(String::from));
    lines.push(String::new());
    lines.extend(menu.render_help_bar().lines().map(String::from));

    lines.into_iter().map(|l| fit_width(&l, width)).collect()
}

fn draw(
    out: &mut Stdout,
    menu: &TreeMenu,
    session: &Session,
    caps: &TerminalCapabilities,
) -> io::Result<()> {
    execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    for line in compose_screen(menu, session, caps) {
        execute!(out, Print(line), Print("\r\n"))?;
    }

    if let Some(status) = session.status() {
        let text = render_status_message(status, caps.supports_unicode);
        if caps.supports_color {
            let color = match status.kind {
                StatusKind::Success => colors::SUCCESS,
                StatusKind::Info => colors::INFO,
                StatusKind::Error => colors::ERROR,
            };
            execute!(out, Print(text.with(color)), Print("\r\n"))?;
        } else {
            execute!(out, Print(text), Print("\r\n"))?;
        }
    }

    out.flush()
}

/// Run the tree menu interactively.
///
/// Returns `true` when the user confirmed with Enter, `false` on quit.
pub fn run_interactive(
    session: &mut Session,
    clipboard: &mut dyn ClipboardSink,
    caps: &TerminalCapabilities,
) -> io::Result<bool> {
    use crossterm::event::{self, Event, KeyEventKind};

    let mut menu = TreeMenu::new(session.model());
    let mut guard = RawModeGuard::enter()?;
    let mut caps = *caps;

    draw(&mut guard.stdout, &menu, session, &caps)?;

    let confirmed = loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(action) = key_to_action(key) else {
                    continue;
                };
                session.clear_status();
                match action {
                    TreeAction::Confirm => break true,
                    TreeAction::Quit => break false,
                    TreeAction::Copy => session.copy_to(clipboard),
                    _ => {
                        menu.handle_action(session.model_mut(), action);
                    }
                }
            }
            Event::Resize(width, height) => {
                caps.width = width;
                caps.height = height;
            }
            _ => continue,
        }
        draw(&mut guard.stdout, &menu, session, &caps)?;
    };

    drop(guard);
    Ok(confirmed)
}

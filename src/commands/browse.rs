//! Interactive browse command

use anyhow::{bail, Result};
use testrun::application::Session;
use testrun::config::Config;
use testrun::domain::document::DocumentFormat;
use testrun::domain::selection::SelectionModel;
use testrun::infrastructure::SystemClipboard;

use crate::logging;
use crate::ui::context::UiContext;
use crate::ui::widgets::tree_menu::run_interactive;

pub fn cmd_browse(
    source: Option<&str>,
    format: Option<DocumentFormat>,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    if !ui.can_interact() {
        bail!("browse needs an interactive terminal; use 'testrun list' or 'testrun render' instead");
    }

    let loaded = super::load(source, config, ui)?;
    let mut session = Session::new(
        SelectionModel::new(loaded.catalog),
        config.document.title.clone(),
        format.unwrap_or(config.document.format),
    );

    let mut clipboard = SystemClipboard::new();
    let confirmed = {
        let _mute = logging::mute();
        run_interactive(&mut session, &mut clipboard, &ui.caps)?
    };

    if !confirmed {
        return Ok(());
    }
    if !session.model().has_selection() {
        eprintln!("No test cases selected");
        return Ok(());
    }
    print!("{}", session.document()?);
    Ok(())
}

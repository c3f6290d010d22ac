//! Non-interactive document rendering

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use testrun::application::{load::default_output_path, pick, Session};
use testrun::config::Config;
use testrun::domain::document::DocumentFormat;
use testrun::domain::ports::ClipboardSink;
use testrun::domain::selection::SelectionModel;
use testrun::infrastructure::SystemClipboard;

use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::theme::{icons, icons_ascii, pick as pick_icon};

#[derive(Debug, Default)]
pub struct RenderOptions {
    pub ids: Vec<String>,
    pub sections: Vec<String>,
    pub format: Option<DocumentFormat>,
    pub title: Option<String>,
    pub output: Option<PathBuf>,
    pub save: bool,
    pub copy: bool,
}

pub fn cmd_render(
    options: RenderOptions,
    source: Option<&str>,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let loaded = super::load(source, config, ui)?;
    let mut model = SelectionModel::new(loaded.catalog);

    let report = pick(&mut model, &options.ids, &options.sections);
    let warn = pick_icon(ui.unicode, icons::WARNING, icons_ascii::WARNING);
    if !ui.json {
        for id in &report.unknown_ids {
            eprintln!("{} Test case id '{}' not found", warn, id);
        }
        for section in &report.unknown_sections {
            eprintln!("{} Section '{}' not found", warn, section);
        }
    }

    if !model.has_selection() {
        bail!("no valid test cases selected");
    }

    let format = options.format.unwrap_or(config.document.format);
    let title = options
        .title
        .unwrap_or_else(|| config.document.title.clone());
    let session = Session::new(model, title, format);
    let document = session.document()?;

    let target = if options.save {
        let cwd = std::env::current_dir()?;
        let today = chrono::Local::now().date_naive();
        Some(default_output_path(&cwd, today, format.extension()))
    } else {
        options.output
    };

    if let Some(path) = &target {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(path, &document)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "document written");
    }

    let count = session.model().selected_count();
    let mut clipboard = options.copy.then(SystemClipboard::until_replaced);
    if let Some(clipboard) = clipboard.as_mut() {
        if clipboard.waits_for_replacement() && !ui.json {
            let info = pick_icon(ui.unicode, icons::INFO, icons_ascii::INFO);
            eprintln!(
                "{} Holding the clipboard until something else is copied",
                info
            );
        }
        clipboard.set_text(&document)?;
    }

    if ui.json {
        let inline_document = target.is_none().then_some(&document);
        json::emit(serde_json::json!({
            "event": "render",
            "format": format,
            "test_cases": count,
            "path": target.as_ref().map(|p| p.display().to_string()),
            "copied": options.copy,
            "unknown_ids": report.unknown_ids,
            "unknown_sections": report.unknown_sections,
            "document": inline_document,
        }))?;
        return Ok(());
    }

    let ok = pick_icon(ui.unicode, icons::SUCCESS, icons_ascii::SUCCESS);
    match &target {
        Some(path) => eprintln!("{} Wrote {} test case(s) to {}", ok, count, path.display()),
        None => print!("{}", document),
    }
    if options.copy {
        eprintln!("{} Copied {} test case(s) to clipboard", ok, count);
    }
    Ok(())
}

//! testrun CLI
//!
//! Usage: testrun [COMMAND]
//!
//! Commands:
//!   browse  Pick test cases in an interactive tree (default)
//!   list    Print the catalog
//!   render  Render a checklist for given ids and sections

mod cli;
mod commands;
mod logging;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use testrun::config::load_layered;

use cli::{Cli, Commands};
use commands::render::RenderOptions;
use ui::context::UiContext;
use ui::output::{print_config_warnings, print_error};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let unicode = ui::terminal::detect_capabilities().supports_unicode;
            print_error(&format!("{:#}", e), unicode);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let loaded = load_layered(cli.config.as_deref(), &cwd)?;
    let config = loaded.config;
    let ui = UiContext::new(cli.json, cli.verbose, &config);

    if let Some(path) = &loaded.path {
        if !ui.json {
            print_config_warnings(path, &loaded.warnings, ui.unicode);
        }
    }

    match cli.command {
        None => commands::browse::cmd_browse(None, None, &config, &ui),
        Some(Commands::Browse { source, format }) => {
            commands::browse::cmd_browse(source.source.as_deref(), format, &config, &ui)
        }
        Some(Commands::List { source }) => {
            commands::list::cmd_list(source.source.as_deref(), &config, &ui)
        }
        Some(Commands::Render {
            ids,
            sections,
            source,
            format,
            title,
            output,
            save,
            copy,
        }) => commands::render::cmd_render(
            RenderOptions {
                ids,
                sections,
                format,
                title,
                output,
                save,
                copy,
            },
            source.source.as_deref(),
            &config,
            &ui,
        ),
    }
}

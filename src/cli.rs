use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use testrun::domain::document::DocumentFormat;

/// testrun - pick test cases from a shared catalog and build a test-run checklist
#[derive(Parser, Debug)]
#[command(name = "testrun")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'testrun' without arguments to browse the configured catalog.")]
pub struct Cli {
    /// Machine-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (skips testrun.toml and the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where to read the catalog from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Catalog URL, text file, or `<dir>/<section>/*.yml` directory
    #[arg(short, long, value_name = "SOURCE")]
    pub source: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the catalog and pick test cases interactively (default)
    Browse {
        #[command(flatten)]
        source: SourceArgs,

        /// Document format for preview, copy and print
        #[arg(short, long, value_enum)]
        format: Option<DocumentFormat>,
    },

    /// Print the catalog tree
    List {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Render a document for the given test case ids and sections
    Render {
        /// Test case ids to include
        ids: Vec<String>,

        /// Include every test case of a section (by name or id)
        #[arg(long = "section", value_name = "NAME")]
        sections: Vec<String>,

        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<DocumentFormat>,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "PATH", conflicts_with = "save")]
        output: Option<PathBuf>,

        /// Write to test-run-YYYYMMDD.<ext> in the current directory
        #[arg(long)]
        save: bool,

        /// Also copy the document to the clipboard
        #[arg(long)]
        copy: bool,
    },
}

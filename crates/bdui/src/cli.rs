//! Command-line interface definitions for bdui.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;

/// Command-line interface for the `bdui` binary.
#[derive(Parser, Debug)]
#[command(
    name = "bdui",
    about = "Render and exercise server-driven UI documents",
    version
)]
pub struct Cli {
    /// Logging controls shared across bdui binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// Path to a configuration file (RON). Defaults to ~/.bdui/config.ron when present.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reject null or unrecognized members instead of dropping them.
    #[arg(long, global = true)]
    pub strict: bool,

    /// What to do with the document.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch, parse and map a document, then print the widget outline.
    Render(DocArgs),
    /// Decode and parse a document without mapping it.
    Validate(DocArgs),
    /// Render a document and tap one of its buttons.
    Tap(TapArgs),
}

/// Selects the document to load.
#[derive(Args, Debug, Clone, Default)]
pub struct DocArgs {
    /// JSON document to load instead of the configured source.
    #[arg(value_name = "DOC")]
    pub doc: Option<PathBuf>,
}

/// Arguments for the `tap` subcommand.
#[derive(Args, Debug, Clone)]
pub struct TapArgs {
    /// Title of the button to tap.
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Document selection.
    #[command(flatten)]
    pub doc: DocArgs,
}

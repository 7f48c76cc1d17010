//! Error handling for the bdui binary.

use std::result;

use bdui_engine::Error as EngineError;
use thiserror::Error;

/// Convenient result type for bdui commands.
pub type Result<T> = result::Result<T, Error>;

/// Errors that end a bdui command.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration parsing or validation errors.
    #[error("Configuration error: {0}")]
    Config(#[from] config::Error),
    /// Failures while resolving the source or loading the screen.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// The document could not be fetched.
    #[error(transparent)]
    Fetch(#[from] bdui_engine::FetchError),
    /// The document failed to decode or parse.
    #[error("invalid document: {0}")]
    Document(#[from] bdui_protocol::Error),
    /// The screen rendered its empty state instead of the document.
    #[error("screen failed to load: {0}")]
    LoadFailed(String),
    /// No button with the requested title.
    #[error("no button titled '{title}' (available: {available})")]
    NoSuchButton {
        /// Requested title.
        title: String,
        /// Titles present in the rendered tree.
        available: String,
    },
}

impl Error {
    /// The text shown to the user. Config errors use their multi-line report
    /// so the caret excerpt is visible.
    pub fn report(&self) -> String {
        match self {
            Self::Config(e) | Self::Engine(EngineError::Config(e)) => e.pretty(),
            other => other.to_string(),
        }
    }
}

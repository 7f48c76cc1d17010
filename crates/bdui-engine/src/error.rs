use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;
use tokio::task::JoinError;

/// Convenient result type for the engine crate.
pub type Result<T> = StdResult<T, Error>;

/// Unified error type for the bdui engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration cannot be turned into engine inputs.
    #[error("Config error: {0}")]
    Config(#[from] config::Error),

    /// A document could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Failure to obtain raw bytes from a document source or data endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Local file could not be read.
    #[error("reading {}: {source}", path.display())]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// Transport-level HTTP failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status code.
        status: u16,
    },

    /// The data client has no such endpoint.
    #[error("unknown endpoint '{0}'")]
    UnknownEndpoint(String),

    /// The fetch task panicked or was cancelled before producing a result.
    #[error("fetch task failed: {0}")]
    Task(#[from] JoinError),
}

/// Why a screen shows the empty state instead of a tree.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document bytes could not be obtained.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The bytes are not a valid document.
    #[error("invalid document: {0}")]
    Document(#[from] bdui_protocol::Error),
}

//! Parse and load user configuration.

use std::{ffi::OsStr, fs, path::Path};

use tracing::debug;

use crate::{Config, Error, error::excerpt_at};

/// Parse and validate a RON config. `path` only labels errors.
pub fn from_ron(source: &str, path: Option<&Path>) -> Result<Config, Error> {
    let config: Config = ron::from_str(source).map_err(|e| {
        let line = e.span.start.line;
        let col = e.span.start.col;
        Error::Parse {
            path: path.map(Path::to_path_buf),
            line,
            col,
            message: e.code.to_string(),
            excerpt: excerpt_at(source, line, col),
        }
    })?;
    config
        .validate()
        .map_err(|e| match path {
            Some(p) => e.with_path(p),
            None => e,
        })?;
    Ok(config)
}

/// Load a `Config` from a `.ron` file at `path`.
pub fn load_from_path(path: &Path) -> Result<Config, Error> {
    if path.extension() != Some(OsStr::new("ron")) {
        return Err(Error::Read {
            path: Some(path.to_path_buf()),
            message: "Unsupported config format (expected a .ron file)".to_string(),
        });
    }
    let source = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), "loading config");
    from_ron(&source, Some(path))
}

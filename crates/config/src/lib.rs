//! Configuration for the bdui engine.
//!
//! A config is a single RON file:
//!
//! ```ron
//! (
//!     decode_policy: Strict,
//!     source: Url(url: "https://example.com/screen.json",
//!                 credentials: Some((username_var: "BDUI_USER", password_var: "BDUI_PASS"))),
//!     screens: ["settings"],
//!     toast: (visible_ms: 2000),
//! )
//! ```
//!
//! Every field is optional.

use std::{
    env,
    path::{Path, PathBuf},
};

mod error;
mod loader;
mod types;

#[cfg(test)]
mod test_parse;

pub use bdui_protocol::DecodePolicy;
pub use error::Error;
pub use loader::{from_ron, load_from_path};
pub use types::{BasicAuth, Config, CredentialsEnv, EmptyStateText, SourceSpec, ToastTiming};

/// The preferred user config path (`~/.bdui/config.ron`).
pub fn default_config_path() -> PathBuf {
    let mut p = PathBuf::from(env::var_os("HOME").unwrap_or_default());
    p.push(".bdui");
    p.push("config.ron");
    p
}

/// Resolve which config file to load.
///
/// Policy:
/// 1) Use `explicit` when provided.
/// 2) Else use `~/.bdui/config.ron` when it exists.
/// 3) Else `None`: the caller runs with `Config::default()`.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let preferred = default_config_path();
    preferred.exists().then_some(preferred)
}

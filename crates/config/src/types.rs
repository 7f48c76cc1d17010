//! Configuration data types.

use std::{env, fmt, path::PathBuf, time::Duration};

use bdui_protocol::DecodePolicy;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// How the document decoder treats nested values it cannot represent.
    pub decode_policy: DecodePolicy,
    /// Where the screen's document comes from.
    pub source: SourceSpec,
    /// Host-registered screens, in addition to the built-in `profile` and `balance`.
    pub screens: Vec<String>,
    /// Toast animation timing.
    pub toast: ToastTiming,
    /// Text of the failure screen.
    pub empty_state: EmptyStateText,
}

impl Config {
    /// Check values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(idx) = self.screens.iter().position(|s| s.trim().is_empty()) {
            return Err(Error::invalid(format!("screens[{idx}]: screen name must not be empty")));
        }
        if let SourceSpec::Url { url, .. } = &self.source
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(Error::invalid(format!(
                "source: url '{url}' must start with http:// or https://"
            )));
        }
        if self.toast.visible_ms == 0 {
            return Err(Error::invalid("toast.visible_ms must be greater than zero"));
        }
        Ok(())
    }
}

/// Document source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SourceSpec {
    /// The demo document compiled into the binary.
    #[default]
    Bundled,
    /// A JSON file on disk.
    File(PathBuf),
    /// An HTTP(S) endpoint fetched with GET.
    Url {
        /// Endpoint URL.
        url: String,
        /// Basic-auth credentials, read from the environment at load time.
        #[serde(default)]
        credentials: Option<CredentialsEnv>,
    },
}

/// Names of the environment variables holding basic-auth credentials.
///
/// Credentials never live in the config file itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsEnv {
    /// Variable holding the user name.
    pub username_var: String,
    /// Variable holding the password.
    pub password_var: String,
}

impl CredentialsEnv {
    /// Read both variables.
    pub fn resolve(&self) -> Result<BasicAuth, Error> {
        let read = |var: &str| {
            env::var(var).map_err(|_| {
                Error::invalid(format!("credentials: environment variable {var} is not set"))
            })
        };
        Ok(BasicAuth {
            username: read(&self.username_var)?,
            password: read(&self.password_var)?,
        })
    }
}

/// HTTP basic-auth credentials. `Debug` never shows the password.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    /// User name.
    pub username: String,
    /// Password.
    pub password: String,
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Toast fade-in, visible and fade-out durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ToastTiming {
    /// Fade-in duration in milliseconds.
    pub fade_in_ms: u64,
    /// Fully visible duration in milliseconds.
    pub visible_ms: u64,
    /// Fade-out duration in milliseconds.
    pub fade_out_ms: u64,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            fade_in_ms: 500,
            visible_ms: 1500,
            fade_out_ms: 500,
        }
    }
}

impl ToastTiming {
    /// Fade-in duration.
    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }

    /// Fully visible duration.
    pub fn visible(&self) -> Duration {
        Duration::from_millis(self.visible_ms)
    }

    /// Fade-out duration.
    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }

    /// Time from first appearance to removal.
    pub fn total(&self) -> Duration {
        self.fade_in() + self.visible() + self.fade_out()
    }
}

/// Text of the failure screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EmptyStateText {
    /// Headline.
    pub title: String,
    /// Explanation.
    pub message: String,
}

impl Default for EmptyStateText {
    fn default() -> Self {
        Self {
            title: "Failed to load".to_string(),
            message: "Could not load services data".to_string(),
        }
    }
}

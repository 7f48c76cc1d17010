//! Collaborators the dispatcher drives. Hosts implement these; tests use the
//! recording doubles in [`crate::test_support`].

use std::fmt;

use async_trait::async_trait;
use config::ToastTiming;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::FetchError;

// ---- Navigation ----

/// A navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// The user's profile screen.
    Profile,
    /// The account balance screen.
    Balance,
    /// A screen the host registered by name.
    Registered(String),
}

impl Route {
    /// Screen name as it appears in `navigate` payloads.
    pub fn name(&self) -> &str {
        match self {
            Self::Profile => "profile",
            Self::Balance => "balance",
            Self::Registered(name) => name,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The closed set of screens `navigate` may name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Routes {
    /// Host-registered names, checked after the built-ins.
    registered: Vec<String>,
}

impl Routes {
    /// Built-in screens plus `registered`.
    pub fn new<I, S>(registered: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            registered: registered.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolve a screen name. Matching is exact.
    pub fn resolve(&self, screen: &str) -> Option<Route> {
        match screen {
            "profile" => Some(Route::Profile),
            "balance" => Some(Route::Balance),
            other => self
                .registered
                .iter()
                .any(|r| r == other)
                .then(|| Route::Registered(other.to_string())),
        }
    }

    /// Every known screen name.
    pub fn names(&self) -> Vec<&str> {
        ["profile", "balance"]
            .into_iter()
            .chain(self.registered.iter().map(String::as_str))
            .collect()
    }
}

/// Performs screen transitions.
pub trait Navigator: Send + Sync {
    /// Show `route`.
    fn navigate(&self, route: &Route);
}

// ---- Presentation ----

/// A modal alert with a single acknowledgement control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Alert title.
    pub title: String,
    /// Alert body.
    pub message: String,
    /// Label of the acknowledgement control.
    pub acknowledge: String,
}

impl Alert {
    /// An alert acknowledged with "OK".
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            acknowledge: "OK".to_string(),
        }
    }
}

/// A transient notice that removes itself after `timing.total()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Notice text.
    pub message: String,
    /// Fade and visibility durations.
    pub timing: ToastTiming,
}

/// Presents modal and transient UI.
pub trait Presenter: Send + Sync {
    /// Show a modal alert.
    fn present_alert(&self, alert: &Alert);
    /// Show a toast.
    fn show_toast(&self, toast: &Toast);
    /// Dismiss the currently presented context.
    fn dismiss(&self);
}

// ---- Reload ----

/// Asks the owning screen to fetch and render its document again.
pub trait ReloadTrigger: Send + Sync {
    /// Request a reload. Returns immediately.
    fn reload(&self);
}

impl<F> ReloadTrigger for F
where
    F: Fn() + Send + Sync,
{
    fn reload(&self) {
        self()
    }
}

/// Reload trigger that posts to a [`crate::ScreenHost`]'s reload channel.
#[derive(Debug, Clone)]
pub struct ReloadSender {
    /// Channel to the screen host.
    tx: UnboundedSender<()>,
}

impl ReloadTrigger for ReloadSender {
    fn reload(&self) {
        if self.tx.send(()).is_err() {
            debug!("reload requested after screen closed");
        }
    }
}

/// A reload trigger and the receiver a screen host listens on.
pub fn reload_channel() -> (ReloadSender, UnboundedReceiver<()>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ReloadSender { tx }, rx)
}

// ---- Data ----

/// Remote data endpoints reachable through `apiRequest`.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Fetch the raw response body of `endpoint`.
    async fn request(&self, endpoint: &str) -> Result<Vec<u8>, FetchError>;
}

//! Action dispatch: classify a tapped action and drive one collaborator.
//!
//! Dispatch never fails. Anything that cannot be carried out (unknown type,
//! missing payload field, unknown screen) is logged and reported as
//! [`Outcome::Ignored`].

use bdui_protocol::{Action, ActionDescriptor, ActionIssue};
use bdui_render::ActionSink;
use config::ToastTiming;
use tokio::runtime::Handle;
use tokio_util::task::TaskTracker;
use tracing::{debug, info, warn};

use crate::{
    deps::{Alert, Route, Routes, Toast},
    services::Services,
};

/// What a dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The navigator was asked to show a screen.
    Navigated(Route),
    /// The reload trigger fired.
    Reloaded,
    /// An alert was presented.
    AlertPresented(Alert),
    /// The presented context was dismissed.
    Dismissed,
    /// A toast was shown.
    ToastShown(Toast),
    /// A data request was started; its result is only logged.
    ApiRequested(String),
    /// Nothing happened.
    Ignored(Ignored),
}

/// Why a dispatch had no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ignored {
    /// Unknown type or missing payload field.
    Invalid(ActionIssue),
    /// `navigate` named a screen outside the known set.
    UnknownScreen(String),
    /// `apiRequest` outside a Tokio runtime.
    NoRuntime(String),
}

/// Maps action descriptors onto collaborator calls.
pub struct ActionDispatcher {
    /// Collaborators.
    services: Services,
    /// Screens `navigate` may reach.
    routes: Routes,
    /// Timing attached to every toast.
    toast: ToastTiming,
    /// In-flight `apiRequest` tasks.
    tasks: TaskTracker,
}

impl ActionDispatcher {
    /// Dispatcher over `services` reaching `routes`.
    pub fn new(services: Services, routes: Routes) -> Self {
        Self {
            services,
            routes,
            toast: ToastTiming::default(),
            tasks: TaskTracker::new(),
        }
    }

    /// Builder: override toast timing.
    pub fn with_toast_timing(mut self, timing: ToastTiming) -> Self {
        self.toast = timing;
        self
    }

    /// Screens this dispatcher can navigate to.
    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    /// Classify `desc` and perform its effect.
    pub fn dispatch(&self, desc: &ActionDescriptor) -> Outcome {
        let action = match Action::from_descriptor(desc) {
            Ok(action) => action,
            Err(issue) => {
                match &issue {
                    ActionIssue::UnknownType(kind) => warn!(kind = %kind, "unknown action type"),
                    ActionIssue::MissingField { .. } => warn!(%issue, "action not performed"),
                }
                return Outcome::Ignored(Ignored::Invalid(issue));
            }
        };
        debug!(kind = %action.kind(), "dispatching action");
        match action {
            Action::Navigate { screen } => self.navigate(screen),
            Action::Reload => {
                self.services.reload.reload();
                Outcome::Reloaded
            }
            Action::ApiRequest { endpoint } => self.api_request(endpoint),
            Action::ShowAlert { title, message } => {
                let alert = Alert::new(title, message);
                self.services.presenter.present_alert(&alert);
                Outcome::AlertPresented(alert)
            }
            Action::Dismiss => {
                self.services.presenter.dismiss();
                Outcome::Dismissed
            }
            Action::ShowToast { message } => {
                let toast = Toast {
                    message,
                    timing: self.toast,
                };
                self.services.presenter.show_toast(&toast);
                Outcome::ToastShown(toast)
            }
        }
    }

    /// `navigate`: only known screens are reachable.
    fn navigate(&self, screen: String) -> Outcome {
        match self.routes.resolve(&screen) {
            Some(route) => {
                self.services.navigator.navigate(&route);
                Outcome::Navigated(route)
            }
            None => {
                warn!(screen = %screen, known = ?self.routes.names(), "unknown screen");
                Outcome::Ignored(Ignored::UnknownScreen(screen))
            }
        }
    }

    /// `apiRequest`: fire and forget, result logged.
    fn api_request(&self, endpoint: String) -> Outcome {
        let Ok(handle) = Handle::try_current() else {
            warn!(endpoint = %endpoint, "no async runtime, api request dropped");
            return Outcome::Ignored(Ignored::NoRuntime(endpoint));
        };
        let api = self.services.api.clone();
        let ep = endpoint.clone();
        self.tasks.spawn_on(
            async move {
                match api.request(&ep).await {
                    Ok(body) => {
                        info!(endpoint = %ep, bytes = body.len(), "api response");
                        debug!(endpoint = %ep, body = %String::from_utf8_lossy(&body), "api response body");
                    }
                    Err(e) => warn!(endpoint = %ep, error = %e, "api request failed"),
                }
            },
            &handle,
        );
        Outcome::ApiRequested(endpoint)
    }

    /// Wait for every in-flight `apiRequest` to finish.
    pub async fn settle(&self) {
        self.tasks.close();
        self.tasks.wait().await;
        self.tasks.reopen();
    }
}

impl ActionSink for ActionDispatcher {
    fn handle_action(&self, action: &ActionDescriptor) {
        let outcome = self.dispatch(action);
        debug!(?outcome, "tap handled");
    }
}

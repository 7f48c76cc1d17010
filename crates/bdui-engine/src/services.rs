use std::sync::Arc;

use crate::deps::{ApiClient, Navigator, Presenter, ReloadTrigger};

/// Groups the collaborators the dispatcher drives, so construction sites pass
/// one explicit value instead of reaching for globals.
#[derive(Clone)]
pub struct Services {
    /// Screen transitions.
    pub navigator: Arc<dyn Navigator>,
    /// Alerts, toasts and dismissal.
    pub presenter: Arc<dyn Presenter>,
    /// Re-render of the owning screen.
    pub reload: Arc<dyn ReloadTrigger>,
    /// Data endpoints for `apiRequest`.
    pub api: Arc<dyn ApiClient>,
}

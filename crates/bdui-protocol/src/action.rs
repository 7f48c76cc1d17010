//! The closed action vocabulary and its typed payloads.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ActionDescriptor;

/// Discriminants understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    /// Transition to a named screen (`payload.screen`).
    Navigate,
    /// Re-fetch and re-render the owning screen.
    Reload,
    /// Call a data endpoint (`payload.endpoint`); the response is only logged.
    ApiRequest,
    /// Modal alert (`payload.title`, `payload.message`).
    ShowAlert,
    /// Dismiss the presented context.
    Dismiss,
    /// Transient notice (`payload.message`).
    ShowToast,
}

impl ActionKind {
    /// Parse a wire discriminant. Matching is exact and case-sensitive.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "navigate" => Some(Self::Navigate),
            "reload" => Some(Self::Reload),
            "apiRequest" => Some(Self::ApiRequest),
            "showAlert" => Some(Self::ShowAlert),
            "dismiss" => Some(Self::Dismiss),
            "showToast" => Some(Self::ShowToast),
            _ => None,
        }
    }

    /// Wire name of the discriminant.
    pub fn name(self) -> &'static str {
        match self {
            Self::Navigate => "navigate",
            Self::Reload => "reload",
            Self::ApiRequest => "apiRequest",
            Self::ShowAlert => "showAlert",
            Self::Dismiss => "dismiss",
            Self::ShowToast => "showToast",
        }
    }

    /// Every recognized discriminant.
    pub fn all() -> &'static [Self] {
        &[
            Self::Navigate,
            Self::Reload,
            Self::ApiRequest,
            Self::ShowAlert,
            Self::Dismiss,
            Self::ShowToast,
        ]
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An action whose payload has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Action {
    Navigate { screen: String },
    Reload,
    ApiRequest { endpoint: String },
    ShowAlert { title: String, message: String },
    Dismiss,
    ShowToast { message: String },
}

/// Why a descriptor does not yield an [`Action`]. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionIssue {
    /// The `type` is outside the vocabulary.
    #[error("unknown action type '{0}'")]
    UnknownType(String),
    /// A required string payload field is absent or not a string.
    #[error("{kind} action is missing string payload field '{field}'")]
    MissingField {
        /// Discriminant of the incomplete action.
        kind: ActionKind,
        /// Name of the missing field.
        field: &'static str,
    },
}

impl Action {
    /// Classify a descriptor and extract its payload.
    pub fn from_descriptor(desc: &ActionDescriptor) -> Result<Self, ActionIssue> {
        let kind = desc
            .action_kind()
            .ok_or_else(|| ActionIssue::UnknownType(desc.kind.clone()))?;
        let field = |name: &'static str| {
            desc.payload_str(name)
                .map(str::to_string)
                .ok_or(ActionIssue::MissingField { kind, field: name })
        };
        Ok(match kind {
            ActionKind::Navigate => Self::Navigate {
                screen: field("screen")?,
            },
            ActionKind::Reload => Self::Reload,
            ActionKind::ApiRequest => Self::ApiRequest {
                endpoint: field("endpoint")?,
            },
            ActionKind::ShowAlert => Self::ShowAlert {
                title: field("title")?,
                message: field("message")?,
            },
            ActionKind::Dismiss => Self::Dismiss,
            ActionKind::ShowToast => Self::ShowToast {
                message: field("message")?,
            },
        })
    }

    /// Discriminant of this action.
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Navigate { .. } => ActionKind::Navigate,
            Self::Reload => ActionKind::Reload,
            Self::ApiRequest { .. } => ActionKind::ApiRequest,
            Self::ShowAlert { .. } => ActionKind::ShowAlert,
            Self::Dismiss => ActionKind::Dismiss,
            Self::ShowToast { .. } => ActionKind::ShowToast,
        }
    }

    /// Wire form of this action.
    pub fn to_descriptor(&self) -> ActionDescriptor {
        let desc = ActionDescriptor::new(self.kind().name());
        match self {
            Self::Navigate { screen } => desc.with_payload("screen", screen.as_str()),
            Self::ApiRequest { endpoint } => desc.with_payload("endpoint", endpoint.as_str()),
            Self::ShowAlert { title, message } => desc
                .with_payload("title", title.as_str())
                .with_payload("message", message.as_str()),
            Self::ShowToast { message } => desc.with_payload("message", message.as_str()),
            Self::Reload | Self::Dismiss => desc,
        }
    }
}

//! Error shared by the language and questionnaire collaborators.

use thiserror::Error;

/// Failure reported by a classifier, generator, humanizer or agent.
///
/// The facilitator never shows these to the tenant; they are logged and
/// replaced by an apology.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("{service} unavailable: {message}")]
    Unavailable { service: &'static str, message: String },

    #[error("{service} returned an invalid response: {message}")]
    InvalidResponse { service: &'static str, message: String },

    #[error("{service} rejected the input: {message}")]
    Rejected { service: &'static str, message: String },
}

impl CollaboratorError {
    pub fn unavailable(service: &'static str, message: impl Into<String>) -> Self {
        Self::Unavailable {
            service,
            message: message.into(),
        }
    }

    pub fn invalid_response(service: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            service,
            message: message.into(),
        }
    }

    pub fn rejected(service: &'static str, message: impl Into<String>) -> Self {
        Self::Rejected {
            service,
            message: message.into(),
        }
    }

    /// Name of the collaborator that failed.
    pub fn service(&self) -> &'static str {
        match self {
            Self::Unavailable { service, .. }
            | Self::InvalidResponse { service, .. }
            | Self::Rejected { service, .. } => service,
        }
    }
}

//! Error types for Notespace API operations.

use thiserror::Error;

/// Result type for Notespace API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the Notespace API.
///
/// The split mirrors how the UI reacts: `SessionExpired`, `Forbidden`,
/// `NotFound`, `Server` and `Network` are surfaced globally through the
/// [`crate::observer::ClientObserver`], while `Rejected` carries a
/// business-rule rejection (400/409/422) that the calling component must
/// interpret in context.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    /// No response was received at all, as opposed to an HTTP error status.
    #[error("network error: {0}")]
    Network(String),

    /// 401 received away from the auth screens: the server no longer
    /// recognizes the session cookie.
    #[error("session expired")]
    SessionExpired,

    /// 401 received while on a login/register/landing screen: the submitted
    /// credentials were wrong, the session did not drop.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("server error: {0}")]
    Server(String),

    /// Business-rule rejection (validation failure, edit conflict, ...).
    /// Never surfaced globally; the caller renders it inline.
    #[error("request rejected ({code}): {message}")]
    Rejected {
        status: u16,
        code: String,
        message: String,
    },

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Success status whose body did not carry the expected envelope payload.
    #[error("envelope error: {0}")]
    Envelope(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// True for a 409 rejection, the edit-conflict path on post updates.
    #[inline]
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 409, .. })
    }

    /// Server-provided message where one exists, a generic one otherwise.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Server(msg) => msg.clone(),
            ApiError::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

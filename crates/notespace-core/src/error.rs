//! Error types for the domain layer.

use notespace_http::ApiError;
use thiserror::Error;

/// Result type for domain-layer operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by the stores and the session context. Precondition
/// failures are caught before any network call is made.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CoreError {
    /// A workspace-scoped operation was attempted with no active workspace.
    #[error("no workspace selected")]
    NoWorkspaceSelected,

    /// Moving a folder under itself or one of its own descendants.
    #[error("cannot move folder {folder} under its own subtree")]
    FolderCycle {
        folder: notespace_http::wire::FolderId,
    },

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl CoreError {
    /// True when the wrapped API error is the post edit-conflict rejection.
    #[inline]
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, CoreError::Api(err) if err.is_conflict())
    }
}

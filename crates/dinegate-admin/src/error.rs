//! Admin service errors.

/// Failures reported by an [`AdminService`](crate::AdminService).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminServiceError {
    /// No request with this id exists.
    #[error("restaurant request '{0}' not found")]
    NotFound(String),

    /// The request already left the pending state.
    #[error("restaurant request '{id}' was already {status}")]
    AlreadyProcessed {
        /// Request id.
        id: String,
        /// Status it currently holds.
        status: String,
    },

    /// Any other failure of the service.
    #[error("admin service failure: {0}")]
    Internal(String),
}

//! Error types for the Dinegate core.

/// Core error type for Dinegate infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The region identifier is not a well-formed AWS region code.
    #[error("invalid AWS region: {0:?}")]
    InvalidRegion(String),
}

/// Convenience result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

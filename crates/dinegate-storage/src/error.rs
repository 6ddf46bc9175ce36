//! Storage error types.

/// Boxed error from an external collaborator (SDK, signer).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server-side failures of the storage layer.
///
/// Client-caused failures are [`ValidationError`](crate::ValidationError)s
/// and never appear here.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Region or credential resolution failed while building clients.
    #[error("failed to load AWS configuration: {message}")]
    ConfigLoad {
        /// What could not be resolved.
        message: String,
        /// Underlying failure, if any.
        #[source]
        source: Option<BoxError>,
    },

    /// The signing capability failed to produce a URL.
    #[error("failed to issue presigned URL for s3://{bucket}/{key}")]
    Issuance {
        /// Target bucket.
        bucket: String,
        /// Target key.
        key: String,
        /// Underlying failure.
        #[source]
        source: BoxError,
    },
}

impl StorageError {
    /// Configuration failure without an underlying cause.
    #[must_use]
    pub fn config_load(message: impl Into<String>) -> Self {
        Self::ConfigLoad {
            message: message.into(),
            source: None,
        }
    }
}

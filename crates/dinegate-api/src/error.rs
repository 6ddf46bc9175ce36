//! Conversions from collaborator errors to [`ApiError`].

use dinegate_admin::AdminServiceError;
use dinegate_model::error::ApiError;
use dinegate_storage::{StorageError, ValidationError};

pub(crate) fn from_validation(err: ValidationError) -> ApiError {
    ApiError::validation(err.to_string()).with_source(err)
}

pub(crate) fn from_storage(err: StorageError) -> ApiError {
    ApiError::internal_error(format!("failed to generate presigned URL: {err}")).with_source(err)
}

/// Admin failures are server errors, except an unknown id which may be
/// reported as 404.
pub(crate) fn from_admin(err: AdminServiceError, context: &str, not_found_as_404: bool) -> ApiError {
    let message = format!("{context}: {err}");
    match err {
        AdminServiceError::NotFound(_) if not_found_as_404 => {
            ApiError::not_found(message).with_source(err)
        }
        _ => ApiError::internal_error(message).with_source(err),
    }
}

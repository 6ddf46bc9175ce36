//! Presigned URL issuance.

use std::time::Duration;

use chrono::{TimeDelta, Utc};
use dinegate_model::output::PresignedUrlResponse;

use crate::error::StorageError;
use crate::presign::Presigner;
use crate::validation::ValidatedPresignRequest;

/// Sign `request` and assemble the wire response.
///
/// Every call signs anew; nothing is cached. `expiresAt` is the signing time
/// plus `expires_in`.
///
/// # Errors
///
/// Returns [`StorageError::Issuance`] when the presigner fails or returns an
/// empty URL.
pub async fn issue_presigned_url(
    presigner: &dyn Presigner,
    request: ValidatedPresignRequest,
    expires_in: Duration,
) -> Result<PresignedUrlResponse, StorageError> {
    let signed_at = Utc::now();

    let signed = presigner
        .presign(&request, expires_in)
        .await
        .map_err(|source| StorageError::Issuance {
            bucket: request.bucket().to_owned(),
            key: request.key().to_owned(),
            source,
        })?;

    if signed.url.is_empty() {
        return Err(StorageError::Issuance {
            bucket: request.bucket().to_owned(),
            key: request.key().to_owned(),
            source: "presigner returned an empty URL".into(),
        });
    }

    let window = TimeDelta::from_std(expires_in).unwrap_or(TimeDelta::MAX);
    let expires_at = signed_at.checked_add_signed(window).unwrap_or(signed_at);

    tracing::debug!(
        bucket = request.bucket(),
        key = request.key(),
        operation = %request.operation(),
        %expires_at,
        "issued presigned url"
    );

    Ok(PresignedUrlResponse {
        url: signed.url,
        expires_at,
        method: signed.method,
        headers: signed.headers,
        bucket: request.bucket().to_owned(),
        key: request.key().to_owned(),
    })
}

//! The presign capability.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use dinegate_model::types::OperationKind;

use crate::error::BoxError;
use crate::validation::ValidatedPresignRequest;

/// A signed request, ready to hand to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignedObject {
    /// Full URL including the signature query string.
    pub url: String,
    /// HTTP method the signature covers.
    pub method: String,
    /// Signed headers the client must send unchanged.
    pub headers: BTreeMap<String, String>,
}

/// Something that can sign object-storage requests.
///
/// Implementations must be cheap to share; one instance serves every request
/// for the life of the process.
#[async_trait]
pub trait Presigner: Send + Sync + std::fmt::Debug {
    /// Sign `request` for `expires_in`.
    async fn presign(
        &self,
        request: &ValidatedPresignRequest,
        expires_in: Duration,
    ) -> Result<PresignedObject, BoxError>;
}

/// [`Presigner`] backed by the AWS S3 SDK.
#[derive(Debug, Clone)]
pub struct S3Presigner {
    client: aws_sdk_s3::Client,
}

impl S3Presigner {
    /// Bind a presigner to an S3 client.
    #[must_use]
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Presigner for S3Presigner {
    async fn presign(
        &self,
        request: &ValidatedPresignRequest,
        expires_in: Duration,
    ) -> Result<PresignedObject, BoxError> {
        let presigning = PresigningConfig::expires_in(expires_in)?;

        let signed = match request.operation() {
            OperationKind::Upload => {
                self.client
                    .put_object()
                    .bucket(request.bucket())
                    .key(request.key())
                    .content_type(request.content_type())
                    .presigned(presigning)
                    .await?
            }
            OperationKind::Download => {
                self.client
                    .get_object()
                    .bucket(request.bucket())
                    .key(request.key())
                    .presigned(presigning)
                    .await?
            }
        };

        Ok(PresignedObject {
            url: signed.uri().to_owned(),
            method: signed.method().to_owned(),
            headers: signed
                .headers()
                .map(|(name, value)| (name.to_owned(), value.to_owned()))
                .collect(),
        })
    }
}

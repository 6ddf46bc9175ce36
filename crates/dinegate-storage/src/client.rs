//! S3 client construction.
//!
//! Clients are built once per process (per cold start on Lambda) and shared.

use std::fmt;
use std::sync::Arc;

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_credential_types::provider::ProvideCredentials;
use dinegate_core::AppConfig;

use crate::error::StorageError;
use crate::presign::S3Presigner;

const STATIC_PROVIDER_NAME: &str = "dinegate-static";

/// Where the S3 client gets its credentials from.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Explicit key pair from configuration. No session token.
    Static {
        /// Access key id.
        access_key_id: String,
        /// Secret access key.
        secret_access_key: String,
    },
    /// The SDK default provider chain (env, profile, role).
    Ambient,
}

impl CredentialSource {
    /// `Static` iff both the key id and the secret are non-empty.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        if config.has_static_credentials() {
            Self::Static {
                access_key_id: config.access_key_id.clone(),
                secret_access_key: config.secret_access_key.clone(),
            }
        } else {
            Self::Ambient
        }
    }

    /// Short label for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Static { .. } => "static",
            Self::Ambient => "ambient",
        }
    }
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static { access_key_id, .. } => f
                .debug_struct("Static")
                .field("access_key_id", access_key_id)
                .field("secret_access_key", &"***")
                .finish(),
            Self::Ambient => f.write_str("Ambient"),
        }
    }
}

/// The presigner bound to the process-wide S3 client.
#[derive(Debug, Clone)]
pub struct StorageClients {
    presigner: Arc<S3Presigner>,
}

impl StorageClients {
    /// Shared presigner.
    #[must_use]
    pub fn presigner(&self) -> Arc<S3Presigner> {
        Arc::clone(&self.presigner)
    }
}

/// Build the S3 client from configuration.
///
/// With static credentials the default chain is never consulted. In ambient
/// mode the chain is asked for credentials once up front so a broken
/// environment fails here rather than on the first request.
///
/// # Errors
///
/// Returns [`StorageError::ConfigLoad`] when the region is malformed or the
/// ambient chain cannot produce credentials.
pub async fn build_clients(config: &AppConfig) -> Result<StorageClients, StorageError> {
    config
        .region
        .validate()
        .map_err(|e| StorageError::ConfigLoad {
            message: format!("invalid region '{}'", config.region),
            source: Some(Box::new(e)),
        })?;

    let credential_source = CredentialSource::from_config(config);
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.as_str().to_owned()));

    if let CredentialSource::Static {
        access_key_id,
        secret_access_key,
    } = &credential_source
    {
        loader = loader.credentials_provider(Credentials::new(
            access_key_id,
            secret_access_key,
            None,
            None,
            STATIC_PROVIDER_NAME,
        ));
    }

    let sdk_config = loader.load().await;

    if credential_source == CredentialSource::Ambient {
        let provider = sdk_config
            .credentials_provider()
            .ok_or_else(|| StorageError::config_load("no credentials provider available"))?;
        provider
            .provide_credentials()
            .await
            .map_err(|e| StorageError::ConfigLoad {
                message: "unable to resolve ambient credentials".to_owned(),
                source: Some(Box::new(e)),
            })?;
    }

    let client = aws_sdk_s3::Client::new(&sdk_config);
    tracing::info!(
        region = %config.region,
        credentials = credential_source.kind(),
        "S3 client initialized"
    );

    Ok(StorageClients {
        presigner: Arc::new(S3Presigner::new(client)),
    })
}

//! Application configuration.
//!
//! Provides [`AppConfig`], loaded once from environment variables at process
//! start and then shared read-only with every component that needs it.
//! Loading is total: malformed numeric values fall back to their defaults
//! instead of failing the process.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::types::AwsRegion;

/// Default upper bound for a declared upload size (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10_485_760;

/// Default validity window for issued URLs, in seconds.
pub const DEFAULT_PRESIGN_EXPIRES_SECS: u64 = 900;

/// Longest validity window S3 accepts for a SigV4 presigned URL (7 days).
const MAX_PRESIGN_EXPIRES_SECS: u64 = 604_800;

/// Dinegate configuration.
///
/// # Examples
///
/// ```
/// use dinegate_core::AppConfig;
///
/// let config = AppConfig::default();
/// assert_eq!(config.region.as_str(), "ap-northeast-2");
/// assert_eq!(config.default_max_file_size, 10_485_760);
/// assert_eq!(config.environment, "dev");
/// ```
#[derive(Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// AWS region for the S3 client.
    #[builder(default)]
    pub region: AwsRegion,

    /// Explicit access key id. Empty means "use ambient credentials".
    #[builder(default)]
    pub access_key_id: String,

    /// Explicit secret access key. Empty means "use ambient credentials".
    #[serde(skip_serializing)]
    #[builder(default)]
    pub secret_access_key: String,

    /// Bucket used when a request does not name one. May be empty.
    #[builder(default)]
    pub default_bucket: String,

    /// Largest declared size (bytes) accepted for a presign request.
    #[builder(default = DEFAULT_MAX_FILE_SIZE)]
    pub default_max_file_size: u64,

    /// Deployment environment name (`dev`, `prod`, ...).
    #[builder(default = String::from("dev"))]
    pub environment: String,

    /// Bind address for the standalone server.
    #[builder(default = String::from("0.0.0.0:3000"))]
    pub gateway_listen: String,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,

    /// Validity window for issued URLs, in seconds.
    #[builder(default = DEFAULT_PRESIGN_EXPIRES_SECS)]
    pub presign_expires_secs: u64,

    /// Report unknown admin request ids as 404 (`true`) or 500 (`false`).
    #[builder(default = true)]
    pub admin_not_found_as_404: bool,

    /// Value of the `Access-Control-Allow-Origin` response header.
    #[builder(default = String::from("*"))]
    pub allowed_origin: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &if self.secret_access_key.is_empty() { "" } else { "***" },
            )
            .field("default_bucket", &self.default_bucket)
            .field("default_max_file_size", &self.default_max_file_size)
            .field("environment", &self.environment)
            .field("gateway_listen", &self.gateway_listen)
            .field("log_level", &self.log_level)
            .field("presign_expires_secs", &self.presign_expires_secs)
            .field("admin_not_found_as_404", &self.admin_not_found_as_404)
            .field("allowed_origin", &self.allowed_origin)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_REGION` | `ap-northeast-2` |
    /// | `AWS_ACCESS_KEY_ID` | *(empty)* |
    /// | `AWS_SECRET_ACCESS_KEY` | *(empty)* |
    /// | `DEFAULT_BUCKET` | *(empty)* |
    /// | `DEFAULT_MAX_FILE_SIZE` | `10485760` |
    /// | `ENV` | `dev` |
    /// | `GATEWAY_LISTEN` | `0.0.0.0:3000` |
    /// | `LOG_LEVEL` | `info` |
    /// | `PRESIGN_EXPIRES_SECS` | `900` |
    /// | `ADMIN_NOT_FOUND_AS_404` | `true` |
    /// | `ALLOWED_ORIGIN` | `*` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Applies exactly the rules of [`AppConfig::from_env`]. Empty values are
    /// treated as unset.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(v) = get("AWS_REGION") {
            config.region = AwsRegion::new(v);
        }
        if let Some(v) = get("AWS_ACCESS_KEY_ID") {
            config.access_key_id = v;
        }
        if let Some(v) = get("AWS_SECRET_ACCESS_KEY") {
            config.secret_access_key = v;
        }
        if let Some(v) = get("DEFAULT_BUCKET") {
            config.default_bucket = v;
        }
        if let Some(v) = get("DEFAULT_MAX_FILE_SIZE") {
            match v.trim().parse::<u64>() {
                Ok(n) => config.default_max_file_size = n,
                Err(_) => tracing::debug!(
                    value = %v,
                    default = DEFAULT_MAX_FILE_SIZE,
                    "unparseable DEFAULT_MAX_FILE_SIZE, using default"
                ),
            }
        }
        if let Some(v) = get("ENV") {
            config.environment = v;
        }
        if let Some(v) = get("GATEWAY_LISTEN") {
            config.gateway_listen = v;
        }
        if let Some(v) = get("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Some(v) = get("PRESIGN_EXPIRES_SECS") {
            if let Ok(n) = v.trim().parse::<u64>() {
                if (1..=MAX_PRESIGN_EXPIRES_SECS).contains(&n) {
                    config.presign_expires_secs = n;
                }
            }
        }
        if let Some(v) = get("ADMIN_NOT_FOUND_AS_404") {
            config.admin_not_found_as_404 = parse_bool(&v);
        }
        if let Some(v) = get("ALLOWED_ORIGIN") {
            config.allowed_origin = v;
        }

        config
    }

    /// Whether both halves of an explicit key pair are configured.
    #[must_use]
    pub fn has_static_credentials(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }
}

/// Parse a string as a boolean, accepting `"1"`, `"true"` and `"yes"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes")
}

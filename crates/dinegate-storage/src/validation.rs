//! Presign request validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. bucket (after defaulting)
//! 2. file name
//! 3. content type (present, and a legal header value)
//! 4. size
//! 5. operation
//!
//! A successful check yields a [`ValidatedPresignRequest`]. Its fields are
//! private and it has no public constructor, so the issuer can only ever
//! sign a request that went through [`validate_presign_request`].

use dinegate_core::AppConfig;
use dinegate_model::input::PresignedUrlRequest;
use dinegate_model::types::OperationKind;

/// Client-caused presign request failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Neither the request nor the configuration names a bucket.
    #[error("no bucket available: request has no bucket and no default is configured")]
    NoBucket,
    /// `fileName` is empty.
    #[error("fileName is required")]
    MissingFileName,
    /// `contentType` is empty.
    #[error("contentType is required")]
    MissingContentType,
    /// `contentType` cannot be sent as an HTTP header value.
    #[error("contentType is not a valid header value")]
    InvalidContentType,
    /// `size` is not in `1..=max`.
    #[error("invalid file size {size}: must be between 1 and {max} bytes")]
    InvalidSize {
        /// Declared size.
        size: i64,
        /// Configured upper bound.
        max: u64,
    },
    /// `operation` is neither `upload` nor `download`.
    #[error("unsupported operation '{0}': expected 'upload' or 'download'")]
    UnsupportedOperation(String),
}

/// Limits applied to every presign request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Bucket used when the request leaves it empty.
    pub default_bucket: String,
    /// Largest accepted declared size in bytes.
    pub max_file_size: u64,
}

impl UploadPolicy {
    /// Policy derived from the process configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            default_bucket: config.default_bucket.clone(),
            max_file_size: config.default_max_file_size,
        }
    }
}

/// A presign request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPresignRequest {
    bucket: String,
    key: String,
    content_type: String,
    size: u64,
    operation: OperationKind,
}

impl ValidatedPresignRequest {
    /// Target bucket, never empty.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Object key, never empty.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Content type, never empty.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Declared size, within `1..=max_file_size`.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Operation the URL will be signed for.
    #[must_use]
    pub fn operation(&self) -> OperationKind {
        self.operation
    }
}

/// Validate and normalize a presign request against `policy`.
///
/// # Errors
///
/// Returns the first [`ValidationError`] in check order.
pub fn validate_presign_request(
    request: PresignedUrlRequest,
    policy: &UploadPolicy,
) -> Result<ValidatedPresignRequest, ValidationError> {
    let bucket = match request.bucket {
        Some(bucket) if !bucket.is_empty() => bucket,
        _ => policy.default_bucket.clone(),
    };
    if bucket.is_empty() {
        return Err(ValidationError::NoBucket);
    }

    if request.file_name.is_empty() {
        return Err(ValidationError::MissingFileName);
    }

    if request.content_type.is_empty() {
        return Err(ValidationError::MissingContentType);
    }
    if http::HeaderValue::from_str(&request.content_type).is_err() {
        return Err(ValidationError::InvalidContentType);
    }

    let size = u64::try_from(request.size)
        .ok()
        .filter(|size| (1..=policy.max_file_size).contains(size))
        .ok_or(ValidationError::InvalidSize {
            size: request.size,
            max: policy.max_file_size,
        })?;

    let operation = match request.operation.as_deref() {
        None | Some("") => OperationKind::default(),
        Some(name) => OperationKind::from_name(name)
            .ok_or_else(|| ValidationError::UnsupportedOperation(name.to_owned()))?,
    };

    Ok(ValidatedPresignRequest {
        bucket,
        key: request.file_name,
        content_type: request.content_type,
        size,
        operation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u64 = 10 * 1024 * 1024;

    fn policy(default_bucket: &str) -> UploadPolicy {
        UploadPolicy {
            default_bucket: default_bucket.to_owned(),
            max_file_size: MAX,
        }
    }

    fn request() -> PresignedUrlRequest {
        PresignedUrlRequest {
            bucket: Some("media".to_owned()),
            file_name: "menus/lunch.png".to_owned(),
            content_type: "image/png".to_owned(),
            size: 2048,
            operation: None,
        }
    }

    #[test]
    fn test_should_accept_complete_request() {
        let validated = validate_presign_request(request(), &policy("")).unwrap();
        assert_eq!(validated.bucket(), "media");
        assert_eq!(validated.key(), "menus/lunch.png");
        assert_eq!(validated.content_type(), "image/png");
        assert_eq!(validated.size(), 2048);
        assert_eq!(validated.operation(), OperationKind::Upload);
    }

    #[test]
    fn test_should_fill_default_bucket() {
        let req = PresignedUrlRequest {
            bucket: None,
            ..request()
        };
        let validated = validate_presign_request(req, &policy("uploads")).unwrap();
        assert_eq!(validated.bucket(), "uploads");

        let req = PresignedUrlRequest {
            bucket: Some(String::new()),
            ..request()
        };
        let validated = validate_presign_request(req, &policy("uploads")).unwrap();
        assert_eq!(validated.bucket(), "uploads");
    }

    #[test]
    fn test_should_keep_explicit_bucket_over_default() {
        let validated = validate_presign_request(request(), &policy("uploads")).unwrap();
        assert_eq!(validated.bucket(), "media");
    }

    #[test]
    fn test_should_fail_without_any_bucket() {
        let req = PresignedUrlRequest {
            bucket: None,
            ..request()
        };
        assert_eq!(
            validate_presign_request(req, &policy("")),
            Err(ValidationError::NoBucket)
        );
    }

    #[test]
    fn test_should_require_file_name_and_content_type() {
        let req = PresignedUrlRequest {
            file_name: String::new(),
            ..request()
        };
        assert_eq!(
            validate_presign_request(req, &policy("")),
            Err(ValidationError::MissingFileName)
        );

        let req = PresignedUrlRequest {
            content_type: String::new(),
            ..request()
        };
        assert_eq!(
            validate_presign_request(req, &policy("")),
            Err(ValidationError::MissingContentType)
        );
    }

    #[test]
    fn test_should_reject_content_type_unusable_as_header() {
        for content_type in ["image/png\n", "image/png\r\nx-injected: 1", "text/\u{7f}plain"] {
            let req = PresignedUrlRequest {
                content_type: content_type.to_owned(),
                ..request()
            };
            assert_eq!(
                validate_presign_request(req, &policy("")),
                Err(ValidationError::InvalidContentType),
                "content type {content_type:?}"
            );
        }

        let req = PresignedUrlRequest {
            content_type: "application/json; charset=utf-8".to_owned(),
            ..request()
        };
        assert!(validate_presign_request(req, &policy("")).is_ok());
    }

    #[test]
    fn test_should_check_content_type_before_size() {
        let req = PresignedUrlRequest {
            content_type: "image/png\n".to_owned(),
            size: 0,
            ..request()
        };
        assert_eq!(
            validate_presign_request(req, &policy("")),
            Err(ValidationError::InvalidContentType)
        );
    }

    #[test]
    fn test_should_enforce_size_bounds() {
        for size in [0, -1, i64::MIN] {
            let req = PresignedUrlRequest { size, ..request() };
            assert_eq!(
                validate_presign_request(req, &policy("")),
                Err(ValidationError::InvalidSize { size, max: MAX }),
                "size {size}"
            );
        }

        let at_limit = PresignedUrlRequest {
            size: 10_485_760,
            ..request()
        };
        assert!(validate_presign_request(at_limit, &policy("")).is_ok());

        let over = PresignedUrlRequest {
            size: 10_485_761,
            ..request()
        };
        let err = validate_presign_request(over, &policy("")).unwrap_err();
        assert!(err.to_string().contains("10485760"));
    }

    #[test]
    fn test_should_parse_operation() {
        let req = PresignedUrlRequest {
            operation: Some("download".to_owned()),
            ..request()
        };
        let validated = validate_presign_request(req, &policy("")).unwrap();
        assert_eq!(validated.operation(), OperationKind::Download);

        let req = PresignedUrlRequest {
            operation: Some("delete".to_owned()),
            ..request()
        };
        assert_eq!(
            validate_presign_request(req, &policy("")),
            Err(ValidationError::UnsupportedOperation("delete".to_owned()))
        );
    }

    #[test]
    fn test_should_report_first_failure_in_order() {
        let req = PresignedUrlRequest {
            bucket: None,
            file_name: String::new(),
            content_type: String::new(),
            size: 0,
            operation: Some("delete".to_owned()),
        };
        assert_eq!(
            validate_presign_request(req.clone(), &policy("")),
            Err(ValidationError::NoBucket)
        );
        assert_eq!(
            validate_presign_request(req.clone(), &policy("uploads")),
            Err(ValidationError::MissingFileName)
        );

        let req = PresignedUrlRequest {
            file_name: "a.png".to_owned(),
            ..req
        };
        assert_eq!(
            validate_presign_request(req.clone(), &policy("uploads")),
            Err(ValidationError::MissingContentType)
        );

        let req = PresignedUrlRequest {
            content_type: "image/png".to_owned(),
            ..req
        };
        assert!(matches!(
            validate_presign_request(req, &policy("uploads")),
            Err(ValidationError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_should_build_policy_from_config() {
        let config = AppConfig::builder()
            .default_bucket("uploads".to_owned())
            .default_max_file_size(42)
            .build();
        let policy = UploadPolicy::from_config(&config);
        assert_eq!(policy.default_bucket, "uploads");
        assert_eq!(policy.max_file_size, 42);
    }
}

//! Request bodies.

use serde::{Deserialize, Serialize};

use crate::types::Decision;

/// Body of `POST /presigned-url`.
///
/// Every field defaults when absent. `operation` stays a raw string here; the
/// validator decides whether it names a supported [`OperationKind`].
///
/// [`OperationKind`]: crate::types::OperationKind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresignedUrlRequest {
    /// Target bucket; the configured default bucket is used when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    /// Object key.
    pub file_name: String,
    /// MIME type the uploader will send.
    pub content_type: String,
    /// Declared size in bytes.
    pub size: i64,
    /// `"upload"` or `"download"`; `upload` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

/// Body of `POST /admin/restaurant-requests/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRestaurantRequestInput {
    /// The decision to apply.
    pub action: Decision,
    /// Free-text explanation, shown to the applicant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

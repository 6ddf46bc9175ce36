//! Response payloads (the `data` member of the success envelope).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::RestaurantRequest;

/// Payload of a successful `POST /presigned-url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUrlResponse {
    /// The signed URL.
    pub url: String,
    /// Instant after which the signature is rejected.
    pub expires_at: DateTime<Utc>,
    /// HTTP method the URL was signed for.
    pub method: String,
    /// Headers the caller must send verbatim with the request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Bucket the URL targets (after defaulting).
    pub bucket: String,
    /// Object key the URL targets.
    pub key: String,
}

/// Payload of `GET /admin/restaurant-requests`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRestaurantRequestsOutput {
    /// Requests as returned by the admin service.
    pub requests: Vec<RestaurantRequest>,
    /// Number of entries in `requests`.
    pub total: usize,
}

impl From<Vec<RestaurantRequest>> for ListRestaurantRequestsOutput {
    fn from(requests: Vec<RestaurantRequest>) -> Self {
        Self {
            total: requests.len(),
            requests,
        }
    }
}

/// Payload of `POST /admin/restaurant-requests/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRestaurantRequestOutput {
    /// The request after the decision was applied.
    pub request: RestaurantRequest,
}

/// Payload of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthOutput {
    /// Always `"running"` when the process answers.
    pub status: String,
    /// Deployment environment name.
    pub environment: String,
    /// Crate version of the serving binary.
    pub version: String,
}

//! Dinegate operations.

use std::sync::Arc;
use std::time::Duration;

use dinegate_admin::AdminService;
use dinegate_core::AppConfig;
use dinegate_model::error::ApiError;
use dinegate_model::input::{PresignedUrlRequest, ProcessRestaurantRequestInput};
use dinegate_model::output::{
    HealthOutput, ListRestaurantRequestsOutput, PresignedUrlResponse,
    ProcessRestaurantRequestOutput,
};
use dinegate_model::types::Decision;
use dinegate_storage::{Presigner, UploadPolicy, issue_presigned_url, validate_presign_request};

use crate::error::{from_admin, from_storage, from_validation};

/// Longest accepted decision reason, in characters.
pub const MAX_REASON_CHARS: usize = 500;

/// Business logic provider.
///
/// Built once per process; every field is read-only after construction.
#[derive(Debug)]
pub struct DinegateProvider {
    config: Arc<AppConfig>,
    policy: UploadPolicy,
    presigner: Arc<dyn Presigner>,
    admin: Arc<dyn AdminService>,
}

impl DinegateProvider {
    /// Create a provider over the given collaborators.
    #[must_use]
    pub fn new(
        config: Arc<AppConfig>,
        presigner: Arc<dyn Presigner>,
        admin: Arc<dyn AdminService>,
    ) -> Self {
        Self {
            policy: UploadPolicy::from_config(&config),
            config,
            presigner,
            admin,
        }
    }

    /// Handle `POST /presigned-url`.
    ///
    /// # Errors
    ///
    /// `VALIDATION_ERROR` when the request fails validation (the presigner
    /// is not called), `INTERNAL_SERVER_ERROR` when signing fails.
    pub async fn handle_create_presigned_url(
        &self,
        input: PresignedUrlRequest,
    ) -> Result<PresignedUrlResponse, ApiError> {
        let request = validate_presign_request(input, &self.policy).map_err(from_validation)?;
        let expires_in = Duration::from_secs(self.config.presign_expires_secs);

        issue_presigned_url(self.presigner.as_ref(), request, expires_in)
            .await
            .map_err(from_storage)
    }

    /// Handle `GET /admin/restaurant-requests`: requests awaiting a decision.
    ///
    /// # Errors
    ///
    /// `INTERNAL_SERVER_ERROR` when the admin service fails.
    pub async fn handle_list_restaurant_requests(
        &self,
    ) -> Result<ListRestaurantRequestsOutput, ApiError> {
        let requests = self.admin.list_pending_requests().await.map_err(|e| {
            from_admin(
                e,
                "failed to list restaurant requests",
                self.config.admin_not_found_as_404,
            )
        })?;
        Ok(requests.into())
    }

    /// Handle `POST /admin/restaurant-requests/{id}`.
    ///
    /// # Errors
    ///
    /// `BAD_REQUEST` for an empty id, `VALIDATION_ERROR` for a malformed
    /// decision, otherwise whatever the admin service reports.
    pub async fn handle_process_restaurant_request(
        &self,
        id: &str,
        input: ProcessRestaurantRequestInput,
    ) -> Result<ProcessRestaurantRequestOutput, ApiError> {
        require_request_id(Some(id))?;
        validate_decision(&input)?;

        let request = self
            .admin
            .process_restaurant_request(id, &input)
            .await
            .map_err(|e| {
                from_admin(
                    e,
                    "failed to process restaurant request",
                    self.config.admin_not_found_as_404,
                )
            })?;
        Ok(ProcessRestaurantRequestOutput { request })
    }

    /// Handle `GET /health`.
    #[must_use]
    pub fn handle_health(&self) -> HealthOutput {
        HealthOutput {
            status: "running".to_owned(),
            environment: self.config.environment.clone(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

/// Reject a missing or empty request id.
///
/// # Errors
///
/// `BAD_REQUEST` when `id` is absent or empty.
pub fn require_request_id(id: Option<&str>) -> Result<&str, ApiError> {
    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ApiError::bad_request("invalid request id")),
    }
}

fn validate_decision(input: &ProcessRestaurantRequestInput) -> Result<(), ApiError> {
    let reason = input.reason.as_deref().unwrap_or_default();
    if reason.chars().count() > MAX_REASON_CHARS {
        return Err(ApiError::validation(format!(
            "reason must be at most {MAX_REASON_CHARS} characters"
        )));
    }
    if input.action == Decision::Reject && reason.trim().is_empty() {
        return Err(ApiError::validation("reason is required when rejecting"));
    }
    Ok(())
}

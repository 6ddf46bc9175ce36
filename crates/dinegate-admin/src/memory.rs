//! In-memory admin service for local development and tests.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dinegate_model::input::ProcessRestaurantRequestInput;
use dinegate_model::types::{RequestStatus, RestaurantRequest};

use crate::error::AdminServiceError;
use crate::service::AdminService;

/// [`AdminService`] keeping requests in a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryAdminService {
    requests: DashMap<String, RestaurantRequest>,
}

impl InMemoryAdminService {
    /// Create an empty service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service pre-populated with `requests`.
    #[must_use]
    pub fn with_requests(requests: impl IntoIterator<Item = RestaurantRequest>) -> Self {
        let service = Self::new();
        for request in requests {
            service.requests.insert(request.id.clone(), request);
        }
        service
    }
}

#[async_trait]
impl AdminService for InMemoryAdminService {
    async fn list_pending_requests(&self) -> Result<Vec<RestaurantRequest>, AdminServiceError> {
        let mut requests: Vec<RestaurantRequest> = self
            .requests
            .iter()
            .filter(|entry| entry.status == RequestStatus::Pending)
            .map(|entry| entry.value().clone())
            .collect();
        requests.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(requests)
    }

    async fn process_restaurant_request(
        &self,
        id: &str,
        input: &ProcessRestaurantRequestInput,
    ) -> Result<RestaurantRequest, AdminServiceError> {
        let mut entry = self
            .requests
            .get_mut(id)
            .ok_or_else(|| AdminServiceError::NotFound(id.to_owned()))?;

        if entry.status != RequestStatus::Pending {
            return Err(AdminServiceError::AlreadyProcessed {
                id: id.to_owned(),
                status: entry.status.to_string(),
            });
        }

        entry.status = input.action.resulting_status();
        entry.reason.clone_from(&input.reason);
        entry.processed_at = Some(Utc::now());

        tracing::info!(id, status = %entry.status, "restaurant request processed");
        Ok(entry.clone())
    }
}

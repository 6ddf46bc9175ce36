//! The admin service contract.

use async_trait::async_trait;
use dinegate_model::input::ProcessRestaurantRequestInput;
use dinegate_model::types::RestaurantRequest;

use crate::error::AdminServiceError;

/// Storage and decision logic for restaurant-creation requests.
///
/// The gateway performs no business checks of its own beyond payload shape;
/// whatever this service returns is passed through.
#[async_trait]
pub trait AdminService: Send + Sync + std::fmt::Debug {
    /// Requests still awaiting a decision, oldest first.
    async fn list_pending_requests(&self) -> Result<Vec<RestaurantRequest>, AdminServiceError>;

    /// Apply a decision to the request with id `id`.
    async fn process_restaurant_request(
        &self,
        id: &str,
        input: &ProcessRestaurantRequestInput,
    ) -> Result<RestaurantRequest, AdminServiceError>;
}

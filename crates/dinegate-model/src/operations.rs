//! Dinegate operation enum.

use std::fmt;

/// All routable Dinegate operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    /// Issue a pre-signed upload or download URL.
    CreatePresignedUrl,
    /// List restaurant-creation requests.
    ListRestaurantRequests,
    /// Approve or reject one restaurant-creation request.
    ProcessRestaurantRequest,
    /// CORS preflight on any known route.
    Preflight,
    /// Liveness check.
    HealthCheck,
}

impl ApiOperation {
    /// Returns the operation name used in logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatePresignedUrl => "CreatePresignedUrl",
            Self::ListRestaurantRequests => "ListRestaurantRequests",
            Self::ProcessRestaurantRequest => "ProcessRestaurantRequest",
            Self::Preflight => "Preflight",
            Self::HealthCheck => "HealthCheck",
        }
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Handler bridging the HTTP layer to [`DinegateProvider`].

use std::sync::Arc;

use bytes::Bytes;

use dinegate_http::body::ApiResponseBody;
use dinegate_http::dispatch::{ApiHandler, HandlerFuture};
use dinegate_http::response::{empty_response, success_response};
use dinegate_http::router::RouteParams;
use dinegate_model::error::ApiError;
use dinegate_model::operations::ApiOperation;

use crate::provider::{DinegateProvider, require_request_id};

/// Routes operations to the provider and renders their results.
#[derive(Debug)]
pub struct DinegateHandler {
    provider: Arc<DinegateProvider>,
}

impl DinegateHandler {
    /// Create a new handler wrapping a provider.
    #[must_use]
    pub fn new(provider: Arc<DinegateProvider>) -> Self {
        Self { provider }
    }
}

impl ApiHandler for DinegateHandler {
    fn handle_operation(&self, op: ApiOperation, params: RouteParams, body: Bytes) -> HandlerFuture {
        let provider = Arc::clone(&self.provider);
        Box::pin(async move { dispatch(provider.as_ref(), op, params, &body).await })
    }
}

async fn dispatch(
    provider: &DinegateProvider,
    op: ApiOperation,
    params: RouteParams,
    body: &[u8],
) -> Result<http::Response<ApiResponseBody>, ApiError> {
    match op {
        ApiOperation::CreatePresignedUrl => {
            tracing::debug!(body = %String::from_utf8_lossy(body), "presign request body");
            let input = deserialize(body)?;
            let output = provider.handle_create_presigned_url(input).await?;
            serialize(&output)
        }
        ApiOperation::ListRestaurantRequests => {
            let output = provider.handle_list_restaurant_requests().await?;
            serialize(&output)
        }
        ApiOperation::ProcessRestaurantRequest => {
            // The id is checked before the body is even parsed.
            let id = require_request_id(params.id.as_deref())?;
            let input = deserialize(body)?;
            let output = provider.handle_process_restaurant_request(id, input).await?;
            serialize(&output)
        }
        ApiOperation::HealthCheck => serialize(&provider.handle_health()),
        ApiOperation::Preflight => Ok(empty_response()),
    }
}

/// Deserialize a JSON request body into the input type.
fn deserialize<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::bad_request(format!("invalid request format: {e}")).with_source(e))
}

fn serialize<T: serde::Serialize>(output: &T) -> Result<http::Response<ApiResponseBody>, ApiError> {
    success_response(http::StatusCode::OK, output)
}

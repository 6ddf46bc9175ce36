//! Dinegate handler trait and operation dispatch.

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;

use dinegate_model::error::ApiError;
use dinegate_model::operations::ApiOperation;

use crate::body::ApiResponseBody;
use crate::router::RouteParams;

/// Boxed future returned by [`ApiHandler::handle_operation`].
pub type HandlerFuture =
    Pin<Box<dyn Future<Output = Result<http::Response<ApiResponseBody>, ApiError>> + Send>>;

/// Trait that the Dinegate business logic provider must implement.
///
/// The handler receives a routed operation, its path parameters and the raw
/// body bytes, and returns a complete HTTP response. This trait is the
/// boundary between the HTTP transport layer and the business logic layer.
/// Preflight requests are answered by the service and never reach it.
pub trait ApiHandler: Send + Sync + 'static {
    /// Handle an operation and produce an HTTP response.
    fn handle_operation(&self, op: ApiOperation, params: RouteParams, body: Bytes)
    -> HandlerFuture;
}

/// Dispatch an operation to the handler.
pub async fn dispatch_operation<H: ApiHandler + ?Sized>(
    handler: &H,
    op: ApiOperation,
    params: RouteParams,
    body: Bytes,
) -> Result<http::Response<ApiResponseBody>, ApiError> {
    tracing::debug!(operation = %op, "dispatching operation");
    handler.handle_operation(op, params, body).await
}

//! Dinegate HTTP service implementing the hyper `Service` trait.
//!
//! [`ApiHttpService::handle`] runs the full pipeline on an already-buffered
//! request, so the Lambda adapter can reuse it without going through hyper.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::body::Incoming;
use tracing::Instrument;

use dinegate_model::error::ApiError;
use dinegate_model::operations::ApiOperation;

use crate::body::ApiResponseBody;
use crate::dispatch::{ApiHandler, dispatch_operation};
use crate::response::{CONTENT_TYPE, empty_response, error_to_response};
use crate::router::resolve_route;

/// Configuration for the Dinegate HTTP service.
#[derive(Debug, Clone)]
pub struct ApiHttpConfig {
    /// Value of the `Access-Control-Allow-Origin` header.
    pub allowed_origin: String,
}

impl Default for ApiHttpConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "*".to_owned(),
        }
    }
}

/// Hyper `Service` implementation for Dinegate.
///
/// Wraps an [`ApiHandler`] implementation and routes incoming HTTP requests
/// to the appropriate operation.
#[derive(Debug)]
pub struct ApiHttpService<H: ApiHandler> {
    handler: Arc<H>,
    config: Arc<ApiHttpConfig>,
}

impl<H: ApiHandler> ApiHttpService<H> {
    /// Create a new `ApiHttpService`.
    pub fn new(handler: Arc<H>, config: ApiHttpConfig) -> Self {
        Self {
            handler,
            config: Arc::new(config),
        }
    }

    /// Run one buffered request through routing, dispatch and header decoration.
    pub async fn handle(
        &self,
        parts: http::request::Parts,
        body: Bytes,
    ) -> http::Response<ApiResponseBody> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let span = tracing::info_span!(
            "request",
            request_id = %request_id,
            method = %parts.method,
            path = %parts.uri.path(),
        );

        async {
            let started = Instant::now();
            let response = process_request(&parts, body, self.handler.as_ref()).await;
            tracing::info!(
                status = response.status().as_u16(),
                elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                "request completed"
            );
            add_common_headers(response, &request_id, &self.config)
        }
        .instrument(span)
        .await
    }
}

impl<H: ApiHandler> Clone for ApiHttpService<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            config: Arc::clone(&self.config),
        }
    }
}

impl<H: ApiHandler> hyper::service::Service<http::Request<Incoming>> for ApiHttpService<H> {
    type Response = http::Response<ApiResponseBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<Incoming>) -> Self::Future {
        let svc = self.clone();

        Box::pin(async move {
            let (parts, incoming) = req.into_parts();
            let body = match collect_body(incoming).await {
                Ok(body) => body,
                Err(err) => return Ok(error_to_response(&err)),
            };
            Ok(svc.handle(parts, body).await)
        })
    }
}

/// Process a single request through the full pipeline.
async fn process_request<H: ApiHandler>(
    parts: &http::request::Parts,
    body: Bytes,
    handler: &H,
) -> http::Response<ApiResponseBody> {
    // 1. Route.
    let (op, params) = match resolve_route(&parts.method, parts.uri.path()) {
        Ok(route) => route,
        Err(err) => return error_to_response(&err),
    };

    // 2. Preflight never reaches the handler.
    if op == ApiOperation::Preflight {
        return empty_response();
    }

    // 3. Dispatch to handler.
    match dispatch_operation(handler, op, params, body).await {
        Ok(response) => response,
        Err(err) => {
            if err.status_code.is_server_error() {
                tracing::error!(
                    operation = %op,
                    code = %err.code,
                    error = %err.message,
                    cause = %source_chain(&err),
                    "operation failed"
                );
            } else {
                tracing::warn!(operation = %op, code = %err.code, error = %err.message, "request rejected");
            }
            error_to_response(&err)
        }
    }
}

/// Render every `source()` below `err`, outermost first, joined by `": "`.
fn source_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut causes = Vec::new();
    let mut current = err.source();
    while let Some(cause) = current {
        causes.push(cause.to_string());
        current = cause.source();
    }
    causes.join(": ")
}

/// Collect the incoming body into a single `Bytes` buffer.
async fn collect_body(incoming: Incoming) -> Result<Bytes, ApiError> {
    incoming
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .map_err(|e| ApiError::bad_request(format!("failed to read request body: {e}")))
}

/// Add common response headers to every response.
fn add_common_headers(
    mut response: http::Response<ApiResponseBody>,
    request_id: &str,
    config: &ApiHttpConfig,
) -> http::Response<ApiResponseBody> {
    let has_body = response.body().has_content();
    let headers = response.headers_mut();

    if let Ok(hv) = http::HeaderValue::from_str(request_id) {
        headers.entry("x-request-id").or_insert(hv);
    }

    if has_body {
        headers
            .entry("content-type")
            .or_insert(http::HeaderValue::from_static(CONTENT_TYPE));
    }

    // CORS headers.
    if let Ok(hv) = http::HeaderValue::from_str(&config.allowed_origin) {
        headers.insert("access-control-allow-origin", hv);
    }
    headers.insert(
        "access-control-allow-methods",
        http::HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        "access-control-allow-headers",
        http::HeaderValue::from_static("Content-Type, Authorization, X-Requested-With"),
    );

    response
}

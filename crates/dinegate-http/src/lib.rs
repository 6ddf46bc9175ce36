//! HTTP service layer for Dinegate.
//!
//! - **Router**: maps `(method, path)` to an [`ApiOperation`] and path parameters
//! - **Handler trait**: the boundary between HTTP and business logic
//! - **Service**: hyper `Service` implementation, also callable directly by the Lambda adapter
//! - **Response helpers**: `{status, data}` / `{status, error}` envelopes
//!
//! [`ApiOperation`]: dinegate_model::ApiOperation
#![allow(missing_docs)]

pub mod body;
pub mod dispatch;
pub mod response;
pub mod router;
pub mod service;

pub use body::ApiResponseBody;
pub use dispatch::ApiHandler;
pub use router::RouteParams;
pub use service::{ApiHttpConfig, ApiHttpService};

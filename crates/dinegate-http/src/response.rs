//! Response envelopes.
//!
//! Success:
//!
//! ```json
//! { "status": "success", "data": { ... } }
//! ```
//!
//! Failure:
//!
//! ```json
//! { "status": "error", "error": { "code": "VALIDATION_ERROR", "message": "..." } }
//! ```

use dinegate_model::error::ApiError;
use serde::Serialize;

use crate::body::ApiResponseBody;

/// Content type for all JSON responses.
pub const CONTENT_TYPE: &str = "application/json";

/// Serialize an error into the error envelope.
#[must_use]
pub fn error_to_json(error: &ApiError) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "status": "error",
        "error": {
            "code": error.code.as_str(),
            "message": error.message,
        },
    }))
    .expect("JSON serialization of error cannot fail")
}

/// Convert an `ApiError` into a complete HTTP error response.
#[must_use]
pub fn error_to_response(error: &ApiError) -> http::Response<ApiResponseBody> {
    let body = ApiResponseBody::from_json(error_to_json(error));

    http::Response::builder()
        .status(error.status_code)
        .header("content-type", CONTENT_TYPE)
        .body(body)
        .expect("valid error response")
}

#[derive(Serialize)]
struct SuccessEnvelope<'a, T> {
    status: &'static str,
    data: &'a T,
}

/// Wrap a payload in the success envelope and build the response.
pub fn success_response<T: Serialize>(
    status: http::StatusCode,
    data: &T,
) -> Result<http::Response<ApiResponseBody>, ApiError> {
    let json = serde_json::to_vec(&SuccessEnvelope {
        status: "success",
        data,
    })
    .map_err(|e| ApiError::internal_error(format!("failed to serialize response: {e}")))?;

    Ok(json_response(status, json))
}

/// Build a response from already-serialized JSON bytes.
#[must_use]
pub fn json_response(status: http::StatusCode, json: Vec<u8>) -> http::Response<ApiResponseBody> {
    http::Response::builder()
        .status(status)
        .header("content-type", CONTENT_TYPE)
        .body(ApiResponseBody::from_json(json))
        .expect("valid JSON response")
}

/// A bodiless `200 OK`, used for CORS preflight.
#[must_use]
pub fn empty_response() -> http::Response<ApiResponseBody> {
    http::Response::builder()
        .status(http::StatusCode::OK)
        .body(ApiResponseBody::empty())
        .expect("valid empty response")
}

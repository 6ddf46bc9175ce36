//! Dinegate request router.
//!
//! The route table is small and fixed:
//!
//! ```text
//! POST    /presigned-url                      CreatePresignedUrl
//! GET     /admin/restaurant-requests          ListRestaurantRequests
//! POST    /admin/restaurant-requests/{id}     ProcessRestaurantRequest
//! GET     /health                             HealthCheck
//! OPTIONS <any of the above>                  Preflight
//! ```
//!
//! `POST /admin/restaurant-requests/` resolves with an empty id so that the
//! handler, not the router, reports the missing id. The `{id}` segment is
//! percent-decoded; a segment that does not decode to UTF-8 matches nothing.

use dinegate_model::error::ApiError;
use dinegate_model::operations::ApiOperation;

const PRESIGN_PATH: &str = "/presigned-url";
const RESTAURANT_REQUESTS_PATH: &str = "/admin/restaurant-requests";
const HEALTH_PATH: &str = "/health";

/// Parameters captured from the request path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    /// The `{id}` segment of an admin request route.
    pub id: Option<String>,
}

/// Which route a path belongs to, before the method is considered.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PathMatch {
    Presign,
    RestaurantRequests,
    RestaurantRequest(String),
    Health,
}

fn match_path(path: &str) -> Option<PathMatch> {
    if path == PRESIGN_PATH || path == "/presigned-url/" {
        return Some(PathMatch::Presign);
    }
    if path == HEALTH_PATH {
        return Some(PathMatch::Health);
    }
    if path == RESTAURANT_REQUESTS_PATH {
        return Some(PathMatch::RestaurantRequests);
    }
    let id = path
        .strip_prefix(RESTAURANT_REQUESTS_PATH)?
        .strip_prefix('/')?;
    if id.contains('/') {
        return None;
    }
    let id = percent_encoding::percent_decode_str(id).decode_utf8().ok()?;
    Some(PathMatch::RestaurantRequest(id.into_owned()))
}

/// Resolve an operation and its path parameters from method and path.
///
/// Unknown paths yield `NOT_FOUND`; known paths with an unsupported method
/// yield `METHOD_NOT_ALLOWED`.
pub fn resolve_route(
    method: &http::Method,
    path: &str,
) -> Result<(ApiOperation, RouteParams), ApiError> {
    let matched = match_path(path).ok_or_else(|| ApiError::route_not_found(path))?;

    if *method == http::Method::OPTIONS {
        return Ok((ApiOperation::Preflight, RouteParams::default()));
    }

    let op = match (&matched, method) {
        (PathMatch::Presign, &http::Method::POST) => ApiOperation::CreatePresignedUrl,
        (PathMatch::RestaurantRequests, &http::Method::GET) => ApiOperation::ListRestaurantRequests,
        (PathMatch::RestaurantRequest(id), &http::Method::GET) if id.is_empty() => {
            ApiOperation::ListRestaurantRequests
        }
        (PathMatch::RestaurantRequest(_), &http::Method::POST) => {
            ApiOperation::ProcessRestaurantRequest
        }
        (PathMatch::Health, &http::Method::GET) => ApiOperation::HealthCheck,
        _ => return Err(ApiError::method_not_allowed(method, path)),
    };

    let params = match matched {
        PathMatch::RestaurantRequest(id) if op == ApiOperation::ProcessRestaurantRequest => {
            RouteParams { id: Some(id) }
        }
        _ => RouteParams::default(),
    };

    Ok((op, params))
}

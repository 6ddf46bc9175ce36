//! Admin route integration tests.

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{http_client, send_json, url};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_list_requests() {
        let (status, body) = send_json(http_client().get(url("/admin/restaurant-requests"))).await;

        assert_eq!(status, reqwest::StatusCode::OK);
        let requests = body["data"]["requests"].as_array().unwrap();
        assert_eq!(body["data"]["total"], requests.len());
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_empty_request_id() {
        let (status, body) = send_json(
            http_client()
                .post(url("/admin/restaurant-requests/"))
                .json(&json!({"action": "approve"})),
        )
        .await;

        assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_report_unknown_request() {
        let id = uuid::Uuid::new_v4().to_string();
        let (status, body) = send_json(
            http_client()
                .post(url(&format!("/admin/restaurant-requests/{id}")))
                .json(&json!({"action": "approve"})),
        )
        .await;

        assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_require_reason_for_rejection() {
        let (status, body) = send_json(
            http_client()
                .post(url("/admin/restaurant-requests/req-1"))
                .json(&json!({"action": "reject"})),
        )
        .await;

        assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}

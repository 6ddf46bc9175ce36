//! Health and routing integration tests.

#[cfg(test)]
mod tests {
    use crate::{http_client, send_json, url};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_report_running() {
        let (status, body) = send_json(http_client().get(url("/health"))).await;

        assert_eq!(status, reqwest::StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["status"], "running");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_not_found_envelope() {
        let (status, body) = send_json(http_client().get(url("/does-not-exist"))).await;

        assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_method_not_allowed() {
        let (status, body) = send_json(http_client().get(url("/presigned-url"))).await;

        assert_eq!(status, reqwest::StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"]["code"], "METHOD_NOT_ALLOWED");
    }
}

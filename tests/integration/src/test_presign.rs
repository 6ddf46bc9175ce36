//! Presigned URL integration tests.

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{http_client, send_json, test_file_name, url};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_issue_upload_url() {
        let file_name = test_file_name("upload");
        let (status, body) = send_json(http_client().post(url("/presigned-url")).json(&json!({
            "bucket": "dinegate-it",
            "fileName": file_name,
            "contentType": "image/png",
            "size": 1024,
        })))
        .await;

        assert_eq!(status, reqwest::StatusCode::OK, "body: {body}");
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["method"], "PUT");
        assert_eq!(body["data"]["key"], file_name.as_str());
        let signed = body["data"]["url"].as_str().unwrap();
        assert!(signed.contains("X-Amz-Signature="));
        assert!(body["data"]["expiresAt"].is_string());
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_issue_download_url() {
        let (status, body) = send_json(http_client().post(url("/presigned-url")).json(&json!({
            "bucket": "dinegate-it",
            "fileName": test_file_name("download"),
            "contentType": "image/png",
            "size": 1,
            "operation": "download",
        })))
        .await;

        assert_eq!(status, reqwest::StatusCode::OK, "body: {body}");
        assert_eq!(body["data"]["method"], "GET");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_oversize_upload() {
        let (status, body) = send_json(http_client().post(url("/presigned-url")).json(&json!({
            "bucket": "dinegate-it",
            "fileName": test_file_name("big"),
            "contentType": "image/png",
            "size": 10_485_761,
        })))
        .await;

        assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_malformed_body() {
        let (status, body) = send_json(
            http_client()
                .post(url("/presigned-url"))
                .header("content-type", "application/json")
                .body("{not json"),
        )
        .await;

        assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_answer_preflight() {
        let resp = http_client()
            .request(reqwest::Method::OPTIONS, url("/presigned-url"))
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        assert!(resp.headers().contains_key("access-control-allow-origin"));
        assert!(resp.bytes().await.unwrap().is_empty());
    }
}

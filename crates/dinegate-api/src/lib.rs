//! Dinegate business logic.
//!
//! [`DinegateProvider`] implements the operations on top of the injected
//! presigner and admin service. [`DinegateHandler`] adapts it to the
//! [`ApiHandler`](dinegate_http::ApiHandler) seam of the HTTP layer, and
//! [`build_http_service`] wires the whole stack for a binary.

mod error;
pub mod handler;
pub mod provider;

use std::sync::Arc;

use dinegate_admin::AdminService;
use dinegate_core::AppConfig;
use dinegate_http::{ApiHttpConfig, ApiHttpService};
use dinegate_storage::Presigner;

pub use handler::DinegateHandler;
pub use provider::DinegateProvider;

/// Assemble the HTTP service shared by the server and Lambda binaries.
#[must_use]
pub fn build_http_service(
    config: Arc<AppConfig>,
    presigner: Arc<dyn Presigner>,
    admin: Arc<dyn AdminService>,
) -> ApiHttpService<DinegateHandler> {
    let http_config = ApiHttpConfig {
        allowed_origin: config.allowed_origin.clone(),
    };
    let provider = DinegateProvider::new(config, presigner, admin);
    ApiHttpService::new(Arc::new(DinegateHandler::new(Arc::new(provider))), http_config)
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use dinegate_admin::InMemoryAdminService;
    use http_body_util::BodyExt;

    use super::*;
    use crate::provider::tests::CountingPresigner;

    fn service(config: AppConfig) -> (ApiHttpService<DinegateHandler>, Arc<CountingPresigner>) {
        let presigner = Arc::new(CountingPresigner::default());
        let svc = build_http_service(
            Arc::new(config),
            Arc::clone(&presigner) as Arc<dyn Presigner>,
            Arc::new(InMemoryAdminService::new()),
        );
        (svc, presigner)
    }

    fn request(method: http::Method, path: &str) -> http::request::Parts {
        let (parts, ()) = http::Request::builder()
            .method(method)
            .uri(path)
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    async fn json(resp: http::Response<dinegate_http::ApiResponseBody>) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_should_serve_presign_end_to_end() {
        let (svc, presigner) = service(
            AppConfig::builder()
                .default_bucket("uploads".to_owned())
                .allowed_origin("https://app.example.com".to_owned())
                .build(),
        );

        let resp = svc
            .handle(
                request(http::Method::POST, "/presigned-url"),
                Bytes::from_static(br#"{"fileName":"a.png","contentType":"image/png","size":1024}"#),
            )
            .await;

        assert_eq!(resp.status(), http::StatusCode::OK);
        assert_eq!(
            resp.headers().get("access-control-allow-origin").unwrap(),
            "https://app.example.com"
        );
        let body = json(resp).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["method"], "PUT");
        assert_eq!(presigner.calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_should_render_validation_error_envelope() {
        let (svc, presigner) = service(AppConfig::builder().default_bucket("uploads".to_owned()).build());

        let resp = svc
            .handle(
                request(http::Method::POST, "/presigned-url"),
                Bytes::from_static(
                    br#"{"fileName":"a.png","contentType":"image/png","size":10485761}"#,
                ),
            )
            .await;

        assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);
        let body = json(resp).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(presigner.calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_should_reject_content_type_with_line_break() {
        let (svc, presigner) = service(AppConfig::builder().default_bucket("uploads".to_owned()).build());

        let resp = svc
            .handle(
                request(http::Method::POST, "/presigned-url"),
                Bytes::from_static(br#"{"fileName":"a.png","contentType":"image/png\n","size":10}"#),
            )
            .await;

        assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);
        let body = json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "contentType is not a valid header value");
        assert_eq!(presigner.calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_should_answer_admin_preflight() {
        let (svc, _) = service(AppConfig::default());

        let resp = svc
            .handle(request(http::Method::OPTIONS, "/admin/restaurant-requests/req-1"), Bytes::new())
            .await;

        assert_eq!(resp.status(), http::StatusCode::OK);
        assert!(resp.headers().get("content-type").is_none());
        assert_eq!(
            resp.headers().get("access-control-allow-methods").unwrap(),
            "GET, POST, OPTIONS"
        );
    }

    #[tokio::test]
    async fn test_should_report_unknown_admin_id_as_404() {
        let (svc, _) = service(AppConfig::default());

        let resp = svc
            .handle(
                request(http::Method::POST, "/admin/restaurant-requests/missing"),
                Bytes::from_static(br#"{"action":"approve"}"#),
            )
            .await;

        assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);
        let body = json(resp).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}

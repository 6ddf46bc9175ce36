//! Conversion between API Gateway events and the shared HTTP pipeline.

use bytes::Bytes;
use dinegate_http::ApiResponseBody;
use http_body_util::BodyExt;
use lambda_http::{Body, Error, Request, Response};

/// Split an API Gateway event into request parts and a buffered body.
pub fn split_event(event: Request) -> (http::request::Parts, Bytes) {
    let (parts, body) = event.into_parts();
    (parts, Bytes::copy_from_slice(body.as_ref()))
}

/// Buffer a pipeline response into an API Gateway response.
///
/// UTF-8 payloads are returned as text so API Gateway does not base64 them.
pub async fn into_lambda_response(
    response: http::Response<ApiResponseBody>,
) -> Result<Response<Body>, Error> {
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await?.to_bytes();

    let body = if bytes.is_empty() {
        Body::Empty
    } else {
        match String::from_utf8(bytes.to_vec()) {
            Ok(text) => Body::Text(text),
            Err(e) => Body::Binary(e.into_bytes()),
        }
    };

    Ok(Response::from_parts(parts, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_split_text_event() {
        let event = http::Request::builder()
            .method(http::Method::POST)
            .uri("/presigned-url")
            .body(Body::from("{\"size\":1}"))
            .unwrap();

        let (parts, body) = split_event(event);

        assert_eq!(parts.method, http::Method::POST);
        assert_eq!(parts.uri.path(), "/presigned-url");
        assert_eq!(body.as_ref(), b"{\"size\":1}");
    }

    #[test]
    fn test_should_split_empty_event() {
        let event = http::Request::builder()
            .method(http::Method::OPTIONS)
            .uri("/presigned-url")
            .body(Body::Empty)
            .unwrap();

        let (_, body) = split_event(event);

        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_should_convert_json_response_to_text() {
        let response = http::Response::builder()
            .status(http::StatusCode::BAD_REQUEST)
            .header("content-type", "application/json")
            .body(ApiResponseBody::from_json(b"{\"status\":\"error\"}".to_vec()))
            .unwrap();

        let converted = into_lambda_response(response).await.unwrap();

        assert_eq!(converted.status(), http::StatusCode::BAD_REQUEST);
        assert_eq!(converted.headers().get("content-type").unwrap(), "application/json");
        match converted.body() {
            Body::Text(text) => assert_eq!(text, "{\"status\":\"error\"}"),
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_should_keep_preflight_empty() {
        let response = http::Response::builder()
            .status(http::StatusCode::OK)
            .body(ApiResponseBody::empty())
            .unwrap();

        let converted = into_lambda_response(response).await.unwrap();

        assert!(matches!(converted.body(), Body::Empty));
    }
}

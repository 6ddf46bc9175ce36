//! Dinegate Lambda - API Gateway proxy integration.
//!
//! Configuration and S3 clients are built once per cold start; every
//! invocation then runs through the same routing and handlers as the
//! standalone server.
//!
//! REST API stages prefix the path with the stage name unless
//! `AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH=true` is set on the function.

mod adapter;

use std::sync::Arc;

use lambda_http::{Error, Request, service_fn};
use tracing_subscriber::EnvFilter;

use dinegate_admin::InMemoryAdminService;
use dinegate_api::build_http_service;
use dinegate_core::AppConfig;
use dinegate_storage::build_clients;

use crate::adapter::{into_lambda_response, split_event};

/// JSON logs without timestamps; CloudWatch records its own.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = AppConfig::from_env();
    init_tracing(&config.log_level);

    tracing::info!(
        region = %config.region,
        default_bucket = %config.default_bucket,
        environment = %config.environment,
        "initializing Dinegate lambda"
    );

    let clients = build_clients(&config).await?;
    let service = build_http_service(
        Arc::new(config),
        clients.presigner(),
        Arc::new(InMemoryAdminService::new()),
    );

    lambda_http::run(service_fn(move |event: Request| {
        let service = service.clone();
        async move {
            let (parts, body) = split_event(event);
            let response = service.handle(parts, body).await;
            into_lambda_response(response).await
        }
    }))
    .await
}

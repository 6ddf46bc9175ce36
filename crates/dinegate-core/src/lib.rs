//! Core configuration and shared types for Dinegate.
//!
//! This crate holds the process-wide, read-only building blocks that every
//! other Dinegate crate receives by injection: the environment-driven
//! [`AppConfig`] and the [`AwsRegion`] identifier.

mod config;
mod error;
mod types;

pub use config::{AppConfig, DEFAULT_MAX_FILE_SIZE, DEFAULT_PRESIGN_EXPIRES_SECS};
pub use error::{CoreError, CoreResult};
pub use types::AwsRegion;

//! Object-storage side of Dinegate.
//!
//! The request path through this crate is strictly ordered:
//!
//! 1. [`validate_presign_request`] normalizes an inbound
//!    [`PresignedUrlRequest`] into a [`ValidatedPresignRequest`], the only
//!    type the issuer accepts.
//! 2. [`issue_presigned_url`] asks a [`Presigner`] to sign it and assembles
//!    the response.
//!
//! [`build_clients`] constructs the S3 client and its [`S3Presigner`] once
//! per process.
//!
//! [`PresignedUrlRequest`]: dinegate_model::input::PresignedUrlRequest

pub mod client;
pub mod error;
pub mod issuer;
pub mod presign;
pub mod validation;

pub use client::{CredentialSource, StorageClients, build_clients};
pub use error::StorageError;
pub use issuer::issue_presigned_url;
pub use presign::{PresignedObject, Presigner, S3Presigner};
pub use validation::{UploadPolicy, ValidatedPresignRequest, ValidationError, validate_presign_request};

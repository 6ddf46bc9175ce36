//! Wire types and error taxonomy for the Dinegate API.
//!
//! Request and response bodies are camelCase JSON. Input types are lenient
//! (missing fields deserialize to empty values) so that semantic checks
//! happen in one place and produce precise messages.
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use error::{ApiError, ApiErrorCode};
pub use operations::ApiOperation;

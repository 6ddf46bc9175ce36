//! Common AWS type definitions shared across crates.

use std::fmt;

use crate::error::{CoreError, CoreResult};

/// AWS Region identifier.
///
/// Construction never fails so that configuration loading stays total;
/// call [`AwsRegion::validate`] where a malformed region must be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AwsRegion(String);

impl AwsRegion {
    /// Default region for Dinegate deployments (Seoul).
    pub const DEFAULT: &str = "ap-northeast-2";

    /// Create a new region.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check that the region looks like an AWS region code.
    ///
    /// Accepts `partition-area-N` style identifiers such as `ap-northeast-2`
    /// or `us-gov-west-1`: lowercase ASCII segments separated by single
    /// hyphens, at least three segments, the last one numeric.
    ///
    /// # Examples
    ///
    /// ```
    /// use dinegate_core::AwsRegion;
    ///
    /// assert!(AwsRegion::new("eu-west-1").validate().is_ok());
    /// assert!(AwsRegion::new("Seoul").validate().is_err());
    /// ```
    pub fn validate(&self) -> CoreResult<()> {
        let segments: Vec<&str> = self.0.split('-').collect();
        let Some((last, head)) = segments.split_last() else {
            return Err(CoreError::InvalidRegion(self.0.clone()));
        };

        let head_ok = head
            .iter()
            .all(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase()));
        let last_ok = !last.is_empty() && last.bytes().all(|b| b.is_ascii_digit());

        if segments.len() >= 3 && head_ok && last_ok {
            Ok(())
        } else {
            Err(CoreError::InvalidRegion(self.0.clone()))
        }
    }
}

impl Default for AwsRegion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

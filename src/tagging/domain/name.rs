//! Validated canonical service name type.

use super::TaggingDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, lowercase alphanumeric-plus-underscores service identifier.
///
/// Service names key the service registry and identify the vendor behind a
/// client instance (e.g. `yahoo`, `open_calais`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    /// Creates a validated service name.
    ///
    /// The input is trimmed and lowercased. Only characters in `[a-z0-9_]`
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`TaggingDomainError::EmptyServiceName`] when the value is
    /// empty after trimming, or [`TaggingDomainError::InvalidServiceName`]
    /// when it contains characters outside `[a-z0-9_]`.
    pub fn new(value: impl Into<String>) -> Result<Self, TaggingDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(TaggingDomainError::EmptyServiceName);
        }

        let is_valid = normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if !is_valid {
            return Err(TaggingDomainError::InvalidServiceName(raw));
        }

        Ok(Self(normalized))
    }

    /// Creates a name from a value already in canonical form.
    ///
    /// Callers must pass lowercase `[a-z0-9_]` values; vendor adapters and
    /// the built-in registry use this for their fixed names.
    pub(crate) fn from_canonical(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the service name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

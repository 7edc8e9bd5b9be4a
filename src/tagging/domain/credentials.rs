//! Authentication settings value objects.

use super::CredentialsViolation;
use std::collections::BTreeMap;

/// Validated vendor API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a validated API key.
    ///
    /// The value is stored as given; only emptiness is checked.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsViolation::EmptyApiKey`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, CredentialsViolation> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(CredentialsViolation::EmptyApiKey);
        }
        Ok(Self(raw))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Username and password pair required by services without API keys.
///
/// The pair is carried verbatim from the descriptor's settings mapping; no
/// normalization is applied to either field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates a credentials pair.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsViolation::EmptyField`] when either field is
    /// empty after trimming.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, CredentialsViolation> {
        let pair = Self {
            username: username.into(),
            password: password.into(),
        };
        if pair.username.trim().is_empty() || pair.password.trim().is_empty() {
            return Err(CredentialsViolation::EmptyField);
        }
        Ok(pair)
    }

    /// Extracts the single pair from a descriptor settings mapping.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsViolation::NotSinglePair`] when the mapping does
    /// not hold exactly one entry, or [`CredentialsViolation::EmptyField`]
    /// when either side of the pair is empty.
    pub(crate) fn from_pairs(
        pairs: &BTreeMap<String, String>,
    ) -> Result<Self, CredentialsViolation> {
        let mut entries = pairs.iter();
        match (entries.next(), entries.next()) {
            (Some((username, password)), None) => Self::new(username, password),
            _ => Err(CredentialsViolation::NotSinglePair(pairs.len())),
        }
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

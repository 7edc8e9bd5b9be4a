//! Service descriptor configuration value objects.

use super::{ApiKey, Credentials, CredentialsViolation, ServiceName, TaggingDomainError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Settings attached to a configured service entry.
///
/// A string value is interpreted as an API key; a mapping value is
/// interpreted as a single username to password pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceSettings {
    /// Bare API-key string.
    ApiKey(String),
    /// Username to password mapping.
    Credentials(BTreeMap<String, String>),
}

/// One configuration entry naming a tagging service and optional settings.
///
/// Descriptors come in two shapes: a bare service name, or a mapping from
/// exactly one service name to its settings. The untagged serde
/// representation lets configuration lists such as
/// `["yahoo", {"open_calais": "jqk145"}]` deserialize directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceDescriptor {
    /// Bare service name with no settings.
    Name(String),
    /// Mapping from a single service name to its settings.
    Configured(BTreeMap<String, ServiceSettings>),
}

impl ServiceDescriptor {
    /// Creates a bare-name descriptor.
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Creates a descriptor carrying an API key for the named service.
    #[must_use]
    pub fn with_api_key(name: impl Into<String>, key: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(name.into(), ServiceSettings::ApiKey(key.into()));
        Self::Configured(entries)
    }

    /// Creates a descriptor carrying a username to password pair for the
    /// named service.
    #[must_use]
    pub fn with_credentials(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let mut pair = BTreeMap::new();
        pair.insert(username.into(), password.into());
        let mut entries = BTreeMap::new();
        entries.insert(name.into(), ServiceSettings::Credentials(pair));
        Self::Configured(entries)
    }

    /// Resolves the canonical service name this descriptor addresses.
    ///
    /// Bare descriptors name themselves; configured descriptors name their
    /// single key. The descriptor is never mutated.
    ///
    /// # Errors
    ///
    /// Returns [`TaggingDomainError::AmbiguousDescriptor`] when a configured
    /// descriptor does not hold exactly one entry, and name validation
    /// errors from [`ServiceName::new`].
    pub fn service_name(&self) -> Result<ServiceName, TaggingDomainError> {
        match self {
            Self::Name(raw) => ServiceName::new(raw),
            Self::Configured(entries) => {
                let (raw, _) = Self::single_entry(entries)?;
                ServiceName::new(raw)
            }
        }
    }

    /// Returns the settings value, when the descriptor carries exactly one.
    #[must_use]
    pub fn settings(&self) -> Option<&ServiceSettings> {
        match self {
            Self::Name(_) => None,
            Self::Configured(entries) => {
                Self::single_entry(entries).ok().map(|(_, settings)| settings)
            }
        }
    }

    /// Extracts the API key carried by this descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`TaggingDomainError::InvalidCredentials`] when the
    /// descriptor is a bare name, when the settings value is a mapping
    /// rather than a string, or when the key is empty, and
    /// [`TaggingDomainError::AmbiguousDescriptor`] when the descriptor does
    /// not hold exactly one entry.
    pub fn api_key(&self) -> Result<ApiKey, TaggingDomainError> {
        match self {
            Self::Name(raw) => Err(invalid_credentials(raw, CredentialsViolation::BareName)),
            Self::Configured(entries) => {
                let (raw, settings) = Self::single_entry(entries)?;
                match settings {
                    ServiceSettings::ApiKey(key) => {
                        ApiKey::new(key).map_err(|violation| invalid_credentials(raw, violation))
                    }
                    ServiceSettings::Credentials(_) => {
                        Err(invalid_credentials(raw, CredentialsViolation::ExpectedApiKey))
                    }
                }
            }
        }
    }

    /// Extracts the credentials pair carried by this descriptor, verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`TaggingDomainError::InvalidCredentials`] when the
    /// descriptor is a bare name, when the settings value is a string rather
    /// than a mapping, or when the mapping does not hold exactly one
    /// non-empty pair, and [`TaggingDomainError::AmbiguousDescriptor`] when
    /// the descriptor does not hold exactly one entry.
    pub fn credentials(&self) -> Result<Credentials, TaggingDomainError> {
        match self {
            Self::Name(raw) => Err(invalid_credentials(raw, CredentialsViolation::BareName)),
            Self::Configured(entries) => {
                let (raw, settings) = Self::single_entry(entries)?;
                match settings {
                    ServiceSettings::ApiKey(_) => Err(invalid_credentials(
                        raw,
                        CredentialsViolation::ExpectedPairMapping,
                    )),
                    ServiceSettings::Credentials(pairs) => Credentials::from_pairs(pairs)
                        .map_err(|violation| invalid_credentials(raw, violation)),
                }
            }
        }
    }

    fn single_entry(
        entries: &BTreeMap<String, ServiceSettings>,
    ) -> Result<(&String, &ServiceSettings), TaggingDomainError> {
        let mut iter = entries.iter();
        match (iter.next(), iter.next()) {
            (Some(entry), None) => Ok(entry),
            _ => Err(TaggingDomainError::AmbiguousDescriptor(entries.len())),
        }
    }
}

fn invalid_credentials(service: &str, violation: CredentialsViolation) -> TaggingDomainError {
    TaggingDomainError::InvalidCredentials {
        service: service.to_owned(),
        violation,
    }
}

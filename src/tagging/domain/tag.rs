//! Tag value object.

use super::EmptyTagError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A label produced by a tagging service for a piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Creates a tag from a label, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTagError`] when the label is empty after trimming.
    pub fn new(label: impl Into<String>) -> Result<Self, EmptyTagError> {
        let trimmed = label.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(EmptyTagError);
        }
        Ok(Self(trimmed))
    }

    /// Returns the tag label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Package identifiers.

use serde::Deserialize;

/// Errors produced when constructing a [`PackageId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PackageIdError {
    /// The identifier was empty or contained only whitespace.
    #[error("Package identifier must not be empty")]
    Empty,
}

/// An installed application unit on the device, addressed by a
/// reverse-DNS style identifier (e.g. `com.facebook.katana`).
///
/// The identifier is opaque: beyond trimming surrounding whitespace and
/// rejecting empty input, no validation is performed. Case is preserved
/// because the device's package manager treats identifiers case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct PackageId(String);

impl PackageId {
    /// Create a new package identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PackageIdError::Empty`] if `id` is empty after trimming.
    pub fn new(id: &str) -> Result<Self, PackageIdError> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(PackageIdError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for PackageId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for PackageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PackageId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PackageId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<&str> for PackageId {
    type Error = PackageIdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for PackageId {
    type Error = PackageIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

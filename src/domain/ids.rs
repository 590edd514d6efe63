//! Domain identifier types with validation
//!
//! This module provides the newtype wrapper for the Village-Level-Entrepreneur
//! identifier. The type ensures the identifier is trimmed and non-empty at
//! construction time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// VLE identifier newtype wrapper
///
/// Represents the identifier of the Village-Level Entrepreneur a report is
/// digitized for. The identifier is free text; the only constraint enforced
/// here is that it is non-empty after trimming. Surrounding whitespace is
/// stripped at construction.
///
/// # Examples
///
/// ```
/// use krishi::domain::ids::VleId;
/// use std::str::FromStr;
///
/// let vle_id = VleId::from_str("  VLE123 ").unwrap();
/// assert_eq!(vle_id.as_str(), "VLE123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VleId(String);

impl VleId {
    /// Creates a new VleId from a string
    ///
    /// The input is trimmed before validation; the stored value never
    /// carries surrounding whitespace.
    ///
    /// # Arguments
    ///
    /// * `id` - The VLE identifier string
    ///
    /// # Returns
    ///
    /// Returns `Ok(VleId)` if the identifier is non-empty after trimming,
    /// `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err("VLE ID cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the VLE ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for VleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for VleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

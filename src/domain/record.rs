//! Digitized record domain model
//!
//! A [`DigitizedRecord`] is a total mapping from every key of a
//! [`FieldSchema`] to a string value. Totality is enforced at construction
//! and preserved by every mutation: a record always contains exactly the
//! schema's keys, in schema order, regardless of whether it came from the
//! extraction service or from a manual edit.

use super::errors::{EditError, ExtractionError};
use super::schema::FieldSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single field of a digitized record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    /// Schema key the value belongs to
    pub key: String,

    /// Extracted or manually corrected value
    pub value: String,
}

/// Structured values digitized from one paper report
///
/// Field order follows the schema the record was built against.
///
/// # Examples
///
/// ```
/// use krishi::domain::record::DigitizedRecord;
/// use krishi::domain::schema::FieldSchema;
/// use std::collections::HashMap;
///
/// let schema = FieldSchema::vle_report();
/// let mut extracted = HashMap::new();
/// extracted.insert("VLE ID".to_string(), "VLE123".to_string());
/// extracted.insert("Machine Type".to_string(), "Thresher".to_string());
/// extracted.insert("Hours Used".to_string(), "5".to_string());
/// extracted.insert("Earnings (INR)".to_string(), "1250".to_string());
///
/// let record = DigitizedRecord::from_extracted(&schema, extracted).unwrap();
/// assert_eq!(record.get("Machine Type"), Some("Thresher"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitizedRecord {
    fields: Vec<FieldValue>,
}

impl DigitizedRecord {
    /// Builds a record from raw extraction output, enforcing schema totality
    ///
    /// Every schema key must be covered: a missing required field fails the
    /// whole extraction, a missing optional field receives an empty-string
    /// placeholder. Keys outside the schema are dropped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::IncompleteExtraction`] listing the required
    /// schema keys absent from `extracted`.
    pub fn from_extracted(
        schema: &FieldSchema,
        mut extracted: HashMap<String, String>,
    ) -> Result<Self, ExtractionError> {
        let mut fields = Vec::with_capacity(schema.len());
        let mut missing = Vec::new();

        for def in schema.fields() {
            match extracted.remove(&def.key) {
                Some(value) => fields.push(FieldValue {
                    key: def.key.clone(),
                    value,
                }),
                None if def.required => missing.push(def.key.clone()),
                None => fields.push(FieldValue {
                    key: def.key.clone(),
                    value: String::new(),
                }),
            }
        }

        if !missing.is_empty() {
            return Err(ExtractionError::IncompleteExtraction { missing });
        }

        for key in extracted.keys() {
            tracing::warn!(key = %key, "Dropping extracted value outside the report schema");
        }

        Ok(Self { fields })
    }

    /// Returns the value for `key`, if the key is part of the record
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }

    /// Replaces the value at `key`, leaving all other fields untouched
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownField`] if `key` is not part of the
    /// record's schema.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), EditError> {
        match self.fields.iter_mut().find(|f| f.key == key) {
            Some(field) => {
                field.value = value.into();
                Ok(())
            }
            None => Err(EditError::UnknownField(key.to_string())),
        }
    }

    /// Iterates `(key, value)` pairs in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|f| (f.key.as_str(), f.value.as_str()))
    }

    /// Number of fields in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Checks that the record carries exactly the schema's key set, in order
    pub fn matches_schema(&self, schema: &FieldSchema) -> bool {
        self.fields.len() == schema.len()
            && self
                .fields
                .iter()
                .zip(schema.keys())
                .all(|(field, key)| field.key == key)
    }

    /// Returns the required schema keys whose values are empty
    ///
    /// Used as the fully-populated precondition for submission.
    pub fn unpopulated_required(&self, schema: &FieldSchema) -> Vec<String> {
        schema
            .fields()
            .iter()
            .filter(|def| def.required)
            .filter(|def| self.get(&def.key).is_none_or(|v| v.trim().is_empty()))
            .map(|def| def.key.clone())
            .collect()
    }
}

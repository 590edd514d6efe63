//! Report field schema
//!
//! This module defines the canonical ordered set of fields a digitized VLE
//! report contains. The schema is the single source of truth for record key
//! membership and order: every component that constructs or validates a
//! [`DigitizedRecord`](crate::domain::record::DigitizedRecord) resolves keys
//! against it, which prevents silent field drift between extraction, editing
//! and submission.

use serde::{Deserialize, Serialize};

/// Key of the field carrying the VLE identifier in the canonical schema
pub const VLE_ID_FIELD: &str = "VLE ID";

/// Definition of a single extractable report field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Human-readable field label, unique within a schema
    pub key: String,

    /// Whether the field must carry a non-empty value for submission
    pub required: bool,
}

impl FieldDef {
    /// Creates a new field definition
    pub fn new(key: impl Into<String>, required: bool) -> Self {
        Self {
            key: key.into(),
            required,
        }
    }
}

/// Ordered, duplicate-free set of report field definitions
///
/// Pure and immutable for the process lifetime. Keys are stable across a
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    fields: Vec<FieldDef>,
}

impl FieldSchema {
    /// Creates a schema from an ordered list of field definitions
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or contains duplicate keys.
    pub fn new(fields: Vec<FieldDef>) -> Result<Self, String> {
        if fields.is_empty() {
            return Err("Field schema cannot be empty".to_string());
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.key == field.key) {
                return Err(format!("Duplicate field key in schema: {}", field.key));
            }
        }
        Ok(Self { fields })
    }

    /// The canonical schema for a digitized VLE machine-usage report
    ///
    /// Field order matches the order values are presented for verification.
    pub fn vle_report() -> Self {
        Self {
            fields: vec![
                FieldDef::new(VLE_ID_FIELD, true),
                FieldDef::new("Machine Type", true),
                FieldDef::new("Hours Used", true),
                FieldDef::new("Earnings (INR)", true),
            ],
        }
    }

    /// Returns the field definitions in schema order
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Returns the field keys in schema order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }

    /// Returns true if `key` is a member of the schema
    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|f| f.key == key)
    }

    /// Looks up a field definition by key
    pub fn get(&self, key: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Number of fields in the schema
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no fields
    ///
    /// Always false for schemas built through [`FieldSchema::new`], which
    /// rejects empty field lists.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vle_report_schema_order() {
        let schema = FieldSchema::vle_report();
        let keys: Vec<&str> = schema.keys().collect();
        assert_eq!(
            keys,
            vec!["VLE ID", "Machine Type", "Hours Used", "Earnings (INR)"]
        );
    }

    #[test]
    fn test_vle_report_schema_all_required() {
        let schema = FieldSchema::vle_report();
        assert!(schema.fields().iter().all(|f| f.required));
    }

    #[test]
    fn test_schema_rejects_duplicates() {
        let result = FieldSchema::new(vec![
            FieldDef::new("VLE ID", true),
            FieldDef::new("VLE ID", false),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_rejects_empty() {
        assert!(FieldSchema::new(vec![]).is_err());
    }

    #[test]
    fn test_schema_contains() {
        let schema = FieldSchema::vle_report();
        assert!(schema.contains("Machine Type"));
        assert!(!schema.contains("Rainfall"));
    }

    #[test]
    fn test_schema_get() {
        let schema = FieldSchema::vle_report();
        let field = schema.get("Hours Used").unwrap();
        assert!(field.required);
        assert!(schema.get("Rainfall").is_none());
    }

    #[test]
    fn test_schema_len() {
        assert_eq!(FieldSchema::vle_report().len(), 4);
    }

    #[test]
    fn test_schema_serialization() {
        let schema = FieldSchema::vle_report();
        let json = serde_json::to_string(&schema).unwrap();
        let deserialized: FieldSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(schema, deserialized);
    }
}

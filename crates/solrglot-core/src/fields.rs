//! Typed document fields.
//!
//! Every field stored in the backend carries a type, and the type decides
//! the suffix of the field name on the wire (`meta_indexed_translation`
//! becomes `meta_indexed_translation_b`). Filters and documents must agree
//! on these names, so both go through [`FieldType::typed_name`].
//!
//! # Reserved names
//!
//! | Name | Type | Meaning |
//! |------|------|---------|
//! | `document_type` | Identifier | `content` or `location` |
//! | `content_id` | Identifier | Owning item id |
//! | `location_id` | Identifier | Location id (location documents only) |
//! | `location_parent_id` | Identifier | Parent location id (location documents only) |
//! | `content_language_codes` | MultipleString | All languages the item is translated into |
//! | `meta_indexed_language_code` | String | Language of this translation document |
//! | `meta_indexed_is_main_translation` | Boolean | Translation is the item's main one |
//! | `meta_indexed_is_main_translation_and_always_available` | Boolean | Main and always available |
//! | `meta_indexed_translation` | Boolean | Regular placement flag |
//! | `meta_indexed_main_translation` | Boolean | Main placement flag |

use serde::{Deserialize, Serialize};

/// Document type discriminator field.
pub const DOCUMENT_TYPE: &str = "document_type";
/// Owning item id.
pub const CONTENT_ID: &str = "content_id";
/// Location id, present on location documents.
pub const LOCATION_ID: &str = "location_id";
/// Parent location id, present on location documents below the root.
pub const LOCATION_PARENT_ID: &str = "location_parent_id";
/// Display name of the translation.
pub const CONTENT_NAME: &str = "content_name";
/// All language codes the owning item is translated into.
pub const CONTENT_LANGUAGE_CODES: &str = "content_language_codes";
/// Language code of the translation this document represents.
pub const INDEXED_LANGUAGE_CODE: &str = "meta_indexed_language_code";
/// Whether the translation is the item's main translation.
pub const INDEXED_IS_MAIN_TRANSLATION: &str = "meta_indexed_is_main_translation";
/// Whether the translation is main and the item is always available.
pub const INDEXED_ALWAYS_AVAILABLE: &str = "meta_indexed_is_main_translation_and_always_available";
/// Regular placement flag.
pub const INDEXED_TRANSLATION: &str = "meta_indexed_translation";
/// Main placement flag.
pub const INDEXED_MAIN_TRANSLATION: &str = "meta_indexed_main_translation";

/// Backend field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Exact-match identifier.
    Identifier,
    /// Single exact-match string.
    String,
    /// Multi-valued exact-match string.
    MultipleString,
    /// Boolean flag.
    Boolean,
    /// Signed integer.
    Integer,
    /// Tokenized full text.
    Text,
}

impl FieldType {
    /// Suffix appended to field names of this type.
    pub fn suffix(&self) -> &'static str {
        match self {
            FieldType::Identifier => "id",
            FieldType::String => "s",
            FieldType::MultipleString => "ms",
            FieldType::Boolean => "b",
            FieldType::Integer => "i",
            FieldType::Text => "t",
        }
    }

    /// Name of the field as stored in the backend.
    pub fn typed_name(&self, name: &str) -> String {
        format!("{name}_{}", self.suffix())
    }
}

/// A field value before wire marshalling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Single string value.
    String(String),
    /// Multiple string values.
    Strings(Vec<String>),
}

impl FieldValue {
    /// Backend string representation(s) of the value.
    ///
    /// Multi-valued fields produce one entry per value; all other kinds
    /// produce exactly one.
    pub fn wire_values(&self) -> Vec<String> {
        match self {
            FieldValue::Bool(b) => vec![b.to_string()],
            FieldValue::Int(i) => vec![i.to_string()],
            FieldValue::String(s) => vec![s.clone()],
            FieldValue::Strings(values) => values.clone(),
        }
    }

    /// Whether any wire value equals `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            FieldValue::Bool(b) => needle == if *b { "true" } else { "false" },
            FieldValue::Int(i) => needle.parse::<i64>().is_ok_and(|n| n == *i),
            FieldValue::String(s) => s == needle,
            FieldValue::Strings(values) => values.iter().any(|v| v == needle),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::Strings(value)
    }
}

/// A named, typed field on a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Untyped field name.
    pub name: String,
    /// Field value.
    pub value: FieldValue,
    /// Field type, decides the stored name suffix.
    pub field_type: FieldType,
}

impl Field {
    /// Create a field.
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            field_type,
        }
    }

    /// Create a boolean field.
    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Self::new(name, value, FieldType::Boolean)
    }

    /// Create an identifier field.
    pub fn identifier(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, FieldValue::String(value.into()), FieldType::Identifier)
    }

    /// Create a single-valued string field.
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, FieldValue::String(value.into()), FieldType::String)
    }

    /// Create a multi-valued string field.
    pub fn strings(name: impl Into<String>, values: Vec<String>) -> Self {
        Self::new(name, values, FieldType::MultipleString)
    }

    /// Name as stored in the backend.
    pub fn typed_name(&self) -> String {
        self.field_type.typed_name(&self.name)
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Translation document representation.
//!
//! A [`Document`] is one (item, language) pair ready for bulk indexing: an
//! id, typed fields and nested child documents (one per location) that share
//! the parent's placement. Placement is attached by the indexer, never by the
//! content mapping.
//!
//! # Creating Documents
//!
//! ```rust
//! use solrglot_core::{Document, DocumentType, Field};
//!
//! let doc = Document::builder()
//!     .id("content42eng-gb")
//!     .document_type(DocumentType::Content)
//!     .translation("eng-GB", true, true)
//!     .field(Field::string("content_name", "Welcome"))
//!     .build();
//!
//! assert_eq!(doc.language_code.as_deref(), Some("eng-GB"));
//! assert!(doc.placement.is_none());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fields::{
    Field, FieldType, DOCUMENT_TYPE, INDEXED_ALWAYS_AVAILABLE, INDEXED_IS_MAIN_TRANSLATION,
    INDEXED_LANGUAGE_CODE,
};
use crate::placement::Placement;

/// Kind of document stored in the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// One translation of an item.
    #[default]
    Content,
    /// One translation of an item at one location.
    Location,
}

impl DocumentType {
    /// Identifier stored in the `document_type` field.
    pub fn identifier(&self) -> &'static str {
        match self {
            DocumentType::Content => "content",
            DocumentType::Location => "location",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for DocumentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "content" => Ok(DocumentType::Content),
            "location" => Ok(DocumentType::Location),
            other => Err(Error::invalid_argument(format!(
                "unknown document type '{other}'"
            ))),
        }
    }
}

/// A document to be indexed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Backend document id.
    pub id: String,
    /// Document type discriminator.
    pub document_type: DocumentType,
    /// Language of the translation, if this is a translation document.
    pub language_code: Option<String>,
    /// Whether this is the item's main translation.
    pub is_main_translation: bool,
    /// Main translation of an always-available item.
    pub always_available: bool,
    /// Content fields, in insertion order.
    pub fields: Vec<Field>,
    /// Nested child documents.
    pub documents: Vec<Document>,
    /// Placement, attached at index time.
    pub placement: Option<Placement>,
}

impl Document {
    /// Create a new document builder.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// Set the placement on this document and every nested child.
    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = Some(placement);
        for child in &mut self.documents {
            child.set_placement(placement);
        }
    }

    /// Consuming form of [`Document::set_placement`].
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.set_placement(placement);
        self
    }

    /// Content fields followed by placement fields, if placed.
    pub fn all_fields(&self) -> Vec<Field> {
        let mut fields = self.fields.clone();
        if let Some(placement) = self.placement {
            fields.extend(placement.fields());
        }
        fields
    }

    /// Whether the field stored as `typed_name` holds `value`.
    pub fn has_value(&self, typed_name: &str, value: &str) -> bool {
        let in_fields = self
            .fields
            .iter()
            .any(|f| f.typed_name() == typed_name && f.value.contains(value));

        in_fields
            || self.placement.is_some_and(|p| {
                p.fields()
                    .iter()
                    .any(|f| f.typed_name() == typed_name && f.value.contains(value))
            })
    }

    /// This document followed by all nested children, depth first.
    pub fn flatten(&self) -> Vec<&Document> {
        let mut out = vec![self];
        for child in &self.documents {
            out.extend(child.flatten());
        }
        out
    }
}

/// Builder for Document.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    doc: Document,
}

impl DocumentBuilder {
    /// Set the document ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.doc.id = id.into();
        self
    }

    /// Set the document type and its discriminator field.
    pub fn document_type(mut self, document_type: DocumentType) -> Self {
        self.doc.document_type = document_type;
        self.doc.fields.retain(|f| f.name != DOCUMENT_TYPE);
        self.doc
            .fields
            .push(Field::identifier(DOCUMENT_TYPE, document_type.identifier()));
        self
    }

    /// Mark the document as a translation and add its meta fields.
    ///
    /// `always_available` only holds for a main translation.
    pub fn translation(
        mut self,
        language_code: impl Into<String>,
        is_main_translation: bool,
        always_available: bool,
    ) -> Self {
        let language_code = language_code.into();
        let always_available = is_main_translation && always_available;

        self.doc.fields.push(Field::string(
            INDEXED_LANGUAGE_CODE,
            language_code.clone(),
        ));
        self.doc.fields.push(Field::new(
            INDEXED_IS_MAIN_TRANSLATION,
            is_main_translation,
            FieldType::Boolean,
        ));
        self.doc.fields.push(Field::new(
            INDEXED_ALWAYS_AVAILABLE,
            always_available,
            FieldType::Boolean,
        ));

        self.doc.language_code = Some(language_code);
        self.doc.is_main_translation = is_main_translation;
        self.doc.always_available = always_available;
        self
    }

    /// Append a field.
    pub fn field(mut self, field: Field) -> Self {
        self.doc.fields.push(field);
        self
    }

    /// Append several fields.
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.doc.fields.extend(fields);
        self
    }

    /// Append a nested child document.
    pub fn child(mut self, child: Document) -> Self {
        self.doc.documents.push(child);
        self
    }

    /// Build the document.
    pub fn build(self) -> Document {
        self.doc
    }
}

// ============================================================================
// Tests
// ============================================================================

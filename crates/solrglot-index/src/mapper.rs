//! Item to translation document mapping.
//!
//! The indexer does not know the shape of the items it indexes. A
//! [`DocumentMapper`] turns one item into its translation documents, one per
//! language, each carrying nested location documents.
//! [`NativeDocumentMapper`] is the mapper for the minimal [`ContentItem`]
//! model shipped with this crate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use solrglot_core::fields::{
    CONTENT_ID, CONTENT_LANGUAGE_CODES, CONTENT_NAME, LOCATION_ID, LOCATION_PARENT_ID,
};
use solrglot_core::{Document, DocumentType, Error, Field, Result};

/// Maps an item to its translation documents.
pub trait DocumentMapper: Send + Sync {
    /// The item type this mapper understands.
    type Item: Send + Sync;

    /// One document per translation of `item`, in a stable order.
    ///
    /// Every returned document must have a language code and correct
    /// main-translation and always-available flags, and exactly one of
    /// them must be the main translation.
    fn map_content_block(&self, item: &Self::Item) -> Result<Vec<Document>>;
}

/// A multilingual content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Item id.
    pub id: u64,
    /// Language code of the main translation.
    pub main_language_code: String,
    /// Whether the main translation is a fallback for any language.
    #[serde(default)]
    pub always_available: bool,
    /// Translated names keyed by language code.
    pub names: BTreeMap<String, String>,
    /// Locations of the item in the content tree.
    #[serde(default)]
    pub locations: Vec<LocationItem>,
}

/// A location of a content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationItem {
    /// Location id.
    pub id: u64,
    /// Parent location id; absent for the root.
    #[serde(default)]
    pub parent_id: Option<u64>,
}

/// Id of the content document for a translation.
pub fn content_document_id(content_id: u64, language_code: &str) -> String {
    format!("content{content_id}{language_code}").to_lowercase()
}

/// Id of the location document for a translation.
pub fn location_document_id(location_id: u64, language_code: &str) -> String {
    format!("location{location_id}{language_code}").to_lowercase()
}

/// Mapper for [`ContentItem`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDocumentMapper;

impl NativeDocumentMapper {
    /// Create a mapper.
    pub fn new() -> Self {
        Self
    }

    fn location_document(
        &self,
        item: &ContentItem,
        location: &LocationItem,
        language_code: &str,
        language_codes: &[String],
        is_main_translation: bool,
    ) -> Document {
        let mut builder = Document::builder()
            .id(location_document_id(location.id, language_code))
            .document_type(DocumentType::Location)
            .field(Field::identifier(CONTENT_ID, item.id.to_string()))
            .field(Field::identifier(LOCATION_ID, location.id.to_string()));

        if let Some(parent_id) = location.parent_id {
            builder = builder.field(Field::identifier(LOCATION_PARENT_ID, parent_id.to_string()));
        }

        builder
            .field(Field::strings(CONTENT_LANGUAGE_CODES, language_codes.to_vec()))
            .translation(language_code, is_main_translation, item.always_available)
            .build()
    }
}

impl DocumentMapper for NativeDocumentMapper {
    type Item = ContentItem;

    fn map_content_block(&self, item: &ContentItem) -> Result<Vec<Document>> {
        if item.names.is_empty() {
            return Err(Error::invalid_argument(format!(
                "content {} has no translations",
                item.id
            )));
        }
        if !item.names.contains_key(&item.main_language_code) {
            return Err(Error::invalid_argument(format!(
                "content {} has no translation in its main language '{}'",
                item.id, item.main_language_code
            )));
        }

        let language_codes: Vec<String> = item.names.keys().cloned().collect();
        let mut documents = Vec::with_capacity(item.names.len());

        for (language_code, name) in &item.names {
            let is_main_translation = *language_code == item.main_language_code;

            let mut builder = Document::builder()
                .id(content_document_id(item.id, language_code))
                .document_type(DocumentType::Content)
                .field(Field::identifier(CONTENT_ID, item.id.to_string()))
                .field(Field::strings(CONTENT_LANGUAGE_CODES, language_codes.clone()))
                .translation(language_code.as_str(), is_main_translation, item.always_available)
                .field(Field::string(CONTENT_NAME, name.as_str()));

            for location in &item.locations {
                builder = builder.child(self.location_document(
                    item,
                    location,
                    language_code,
                    &language_codes,
                    is_main_translation,
                ));
            }

            documents.push(builder.build());
        }

        log::trace!(
            "mapped content {} into {} translation documents",
            item.id,
            documents.len()
        );
        Ok(documents)
    }
}

// ============================================================================
// Tests
// ============================================================================

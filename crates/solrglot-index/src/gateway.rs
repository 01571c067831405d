//! Transport to the search backend.
//!
//! A [`Gateway`] receives fully resolved endpoints and fully built filters;
//! it owns wire encoding and network I/O. [`MemoryGateway`](crate::MemoryGateway)
//! is an in-process implementation.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solrglot_core::{Document, DocumentType, Result};
use solrglot_endpoint::Endpoint;
use solrglot_query::{Criterion, Query};

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Backend document id.
    pub id: String,

    /// Name of the endpoint the document is stored on.
    pub endpoint: String,

    /// Document type.
    pub document_type: DocumentType,

    /// Language of the matched translation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl SearchHit {
    /// Hit for `document` stored on `endpoint`.
    pub fn from_document(document: &Document, endpoint: &str) -> Self {
        Self {
            id: document.id.clone(),
            endpoint: endpoint.to_string(),
            document_type: document.document_type,
            language_code: document.language_code.clone(),
        }
    }
}

/// Collection of search hits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// Hits in the requested page.
    pub hits: Vec<SearchHit>,

    /// Total number of matching documents (may be > hits.len() if limited).
    pub total: usize,

    /// Backend that executed the search.
    pub backend: String,
}

impl SearchResults {
    /// Create empty results.
    pub fn empty(backend: &str) -> Self {
        Self {
            hits: Vec::new(),
            total: 0,
            backend: backend.to_string(),
        }
    }
}

/// Abstract transport to a multi-core backend.
///
/// All methods are async; implementations must be `Send + Sync` so a
/// gateway can be shared between tasks.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Run `query` through `entry`, distributed over `targets`.
    async fn find(
        &self,
        query: &Query,
        entry: &Endpoint,
        targets: &[Arc<Endpoint>],
    ) -> Result<SearchResults>;

    /// Send `documents` to `endpoint` for indexing.
    async fn bulk_index_documents(&self, documents: &[Document], endpoint: &Endpoint)
    -> Result<()>;

    /// Delete documents matching `criterion` on every endpoint.
    async fn delete_by_query(&self, criterion: &Criterion, endpoints: &[Arc<Endpoint>])
    -> Result<()>;

    /// Delete every document on every endpoint.
    async fn purge_index(&self, endpoints: &[Arc<Endpoint>]) -> Result<()>;

    /// Make pending changes visible; `flush` requests a hard commit.
    async fn commit(&self, endpoints: &[Arc<Endpoint>], flush: bool) -> Result<()>;

    /// Get the gateway name (for logging/debugging).
    fn name(&self) -> &str;
}

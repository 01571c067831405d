//! In-process gateway.
//!
//! Keeps one document store per endpoint name. Indexed documents are staged
//! until the next commit, as on a real backend; commits upsert by id.
//! Searches evaluate criteria directly against stored documents, nested
//! children included.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use solrglot_core::{Document, Error, Result};
use solrglot_endpoint::Endpoint;
use solrglot_query::{Criterion, Query};
use tokio::sync::RwLock;

use crate::gateway::{Gateway, SearchHit, SearchResults};

const BACKEND_NAME: &str = "memory";

#[derive(Debug, Default)]
struct CoreStore {
    committed: Vec<Document>,
    staged: Vec<Document>,
}

impl CoreStore {
    fn commit(&mut self) {
        for document in self.staged.drain(..) {
            match self.committed.iter_mut().find(|d| d.id == document.id) {
                Some(existing) => *existing = document,
                None => self.committed.push(document),
            }
        }
    }

    fn delete(&mut self, criterion: &Criterion) -> usize {
        let before = self.committed.len();
        self.committed.retain(|d| !criterion.matches(d));
        let mut removed = before - self.committed.len();
        for document in &mut self.committed {
            removed += remove_matching_children(document, criterion);
        }
        removed
    }
}

fn remove_matching_children(document: &mut Document, criterion: &Criterion) -> usize {
    let before = document.documents.len();
    document.documents.retain(|d| !criterion.matches(d));
    let mut removed = before - document.documents.len();
    for child in &mut document.documents {
        removed += remove_matching_children(child, criterion);
    }
    removed
}

/// Gateway that stores documents in memory.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    cores: RwLock<BTreeMap<String, CoreStore>>,
}

impl MemoryGateway {
    /// Create an empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed top-level documents on `endpoint`.
    pub async fn documents(&self, endpoint: &str) -> Vec<Document> {
        self.cores
            .read()
            .await
            .get(endpoint)
            .map(|core| core.committed.clone())
            .unwrap_or_default()
    }

    /// Number of committed top-level documents on `endpoint`.
    pub async fn document_count(&self, endpoint: &str) -> usize {
        self.cores
            .read()
            .await
            .get(endpoint)
            .map_or(0, |core| core.committed.len())
    }

    /// Number of staged, uncommitted documents on `endpoint`.
    pub async fn pending_count(&self, endpoint: &str) -> usize {
        self.cores
            .read()
            .await
            .get(endpoint)
            .map_or(0, |core| core.staged.len())
    }
}

#[async_trait]
impl Gateway for MemoryGateway {
    async fn find(
        &self,
        query: &Query,
        entry: &Endpoint,
        targets: &[Arc<Endpoint>],
    ) -> Result<SearchResults> {
        if targets.is_empty() {
            return Ok(SearchResults::empty(BACKEND_NAME));
        }

        let cores = self.cores.read().await;
        let mut matches: Vec<SearchHit> = Vec::new();

        for target in targets {
            let Some(core) = cores.get(&target.name) else {
                continue;
            };
            for stored in &core.committed {
                for document in stored.flatten() {
                    if query.filter.matches(document) {
                        matches.push(SearchHit::from_document(document, &target.name));
                    }
                }
            }
        }

        log::debug!(
            "search via '{}' over {} endpoints matched {} documents",
            entry.name,
            targets.len(),
            matches.len()
        );

        let total = matches.len();
        let hits = matches
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .collect();

        Ok(SearchResults {
            hits,
            total,
            backend: BACKEND_NAME.to_string(),
        })
    }

    async fn bulk_index_documents(
        &self,
        documents: &[Document],
        endpoint: &Endpoint,
    ) -> Result<()> {
        if let Some(document) = documents.iter().find(|d| d.id.is_empty()) {
            return Err(Error::backend(
                &endpoint.name,
                format!("{} document without id", document.document_type),
            ));
        }

        let mut cores = self.cores.write().await;
        cores
            .entry(endpoint.name.clone())
            .or_default()
            .staged
            .extend_from_slice(documents);
        log::debug!(
            "staged {} documents on '{}'",
            documents.len(),
            endpoint.name
        );
        Ok(())
    }

    async fn delete_by_query(
        &self,
        criterion: &Criterion,
        endpoints: &[Arc<Endpoint>],
    ) -> Result<()> {
        let mut cores = self.cores.write().await;
        for endpoint in endpoints {
            if let Some(core) = cores.get_mut(&endpoint.name) {
                let removed = core.delete(criterion);
                log::debug!("deleted {removed} documents on '{}'", endpoint.name);
            }
        }
        Ok(())
    }

    async fn purge_index(&self, endpoints: &[Arc<Endpoint>]) -> Result<()> {
        let mut cores = self.cores.write().await;
        for endpoint in endpoints {
            cores.remove(&endpoint.name);
            log::debug!("purged '{}'", endpoint.name);
        }
        Ok(())
    }

    async fn commit(&self, endpoints: &[Arc<Endpoint>], flush: bool) -> Result<()> {
        let mut cores = self.cores.write().await;
        for endpoint in endpoints {
            if let Some(core) = cores.get_mut(&endpoint.name) {
                core.commit();
            }
            log::debug!(
                "{} commit on '{}'",
                if flush { "hard" } else { "soft" },
                endpoint.name
            );
        }
        Ok(())
    }

    fn name(&self) -> &str {
        BACKEND_NAME
    }
}

// ============================================================================
// Tests
// ============================================================================

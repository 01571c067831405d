//! Search and indexing orchestration.

use std::fmt;
use std::sync::Arc;

use solrglot_core::{Config, DocumentType, LanguageSettings, Result};
use solrglot_endpoint::{EndpointResolver, NativeEndpointResolver};
use solrglot_index::{DocumentIndexer, DocumentMapper, EndpointDocumentMap, Gateway, SearchResults};
use solrglot_query::{CoreFilter, Criterion, NativeCoreFilter, Query};

/// Entry point for searching and indexing translated content.
///
/// Searches are sent to the entry endpoint and cover the endpoints the
/// requested languages need. Writes go to every endpoint.
pub struct Handler<M: DocumentMapper> {
    resolver: Arc<dyn EndpointResolver>,
    core_filter: Arc<dyn CoreFilter>,
    gateway: Arc<dyn Gateway>,
    indexer: DocumentIndexer<M>,
}

impl<M: DocumentMapper> Handler<M> {
    /// Create a handler from its parts.
    pub fn new(
        resolver: Arc<dyn EndpointResolver>,
        core_filter: Arc<dyn CoreFilter>,
        gateway: Arc<dyn Gateway>,
        mapper: M,
    ) -> Self {
        let indexer = DocumentIndexer::new(mapper, resolver.clone(), gateway.clone());
        Self {
            resolver,
            core_filter,
            gateway,
            indexer,
        }
    }

    /// Build a handler with the native resolver and core filter.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` does not validate.
    pub fn from_config(config: &Config, gateway: Arc<dyn Gateway>, mapper: M) -> Result<Self> {
        let resolver: Arc<dyn EndpointResolver> =
            Arc::new(NativeEndpointResolver::from_config(config)?);
        let core_filter = Arc::new(NativeCoreFilter::new(resolver.clone()));
        Ok(Self::new(resolver, core_filter, gateway, mapper))
    }

    /// The endpoint resolver.
    pub fn resolver(&self) -> &Arc<dyn EndpointResolver> {
        &self.resolver
    }

    /// The indexer.
    pub fn indexer(&self) -> &DocumentIndexer<M> {
        &self.indexer
    }

    /// Find content documents, one translation per item.
    pub async fn find_content(
        &self,
        query: Query,
        settings: &LanguageSettings,
    ) -> Result<SearchResults> {
        self.find(query, settings, DocumentType::Content).await
    }

    /// Find location documents, one translation per item and location.
    pub async fn find_locations(
        &self,
        query: Query,
        settings: &LanguageSettings,
    ) -> Result<SearchResults> {
        self.find(query, settings, DocumentType::Location).await
    }

    async fn find(
        &self,
        mut query: Query,
        settings: &LanguageSettings,
        document_type: DocumentType,
    ) -> Result<SearchResults> {
        self.core_filter.apply(&mut query, settings, document_type);

        let entry = self.resolver.entry_endpoint()?;
        let targets = self.resolver.search_targets(settings)?;
        log::debug!(
            "searching {} via '{}' on {} endpoints",
            document_type,
            entry.name,
            targets.len()
        );

        self.gateway.find(&query, &entry, &targets).await
    }

    /// Index `items`; visible after the next commit.
    pub async fn index_content(&self, items: &[M::Item]) -> Result<EndpointDocumentMap> {
        self.indexer.bulk_index_content(items).await
    }

    /// Delete every stored document of `content_id` on all endpoints.
    pub async fn delete_content(&self, content_id: &str) -> Result<()> {
        let endpoints = self.resolver.all_endpoints()?;
        let criterion = Criterion::ContentId(vec![content_id.to_string()]);
        self.gateway.delete_by_query(&criterion, &endpoints).await?;
        log::info!("deleted content {content_id} on {} endpoints", endpoints.len());
        Ok(())
    }

    /// Delete every document on all endpoints.
    pub async fn purge_index(&self) -> Result<()> {
        let endpoints = self.resolver.all_endpoints()?;
        self.gateway.purge_index(&endpoints).await?;
        log::info!("purged {} endpoints", endpoints.len());
        Ok(())
    }

    /// Commit pending changes on all endpoints.
    pub async fn commit(&self, flush: bool) -> Result<()> {
        let endpoints = self.resolver.all_endpoints()?;
        self.gateway.commit(&endpoints, flush).await
    }
}

impl<M: DocumentMapper> fmt::Debug for Handler<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("gateway", &self.gateway.name())
            .field(
                "main_languages_endpoint",
                &self.resolver.has_main_languages_endpoint(),
            )
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

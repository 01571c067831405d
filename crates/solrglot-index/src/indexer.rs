//! Per-endpoint document indexing.
//!
//! The indexer maps items to translation documents, routes each language to
//! its endpoint and attaches placement. Main translations that are not stored
//! on the main-languages endpoint get a dedicated copy there, so the
//! always-available fallback can be answered by that single core.

use std::fmt;
use std::sync::Arc;

use solrglot_core::{Document, Error, Placement, Result};
use solrglot_endpoint::{Endpoint, EndpointResolver};

use crate::gateway::Gateway;
use crate::main_translation::derive_main_translation_copy;
use crate::mapper::DocumentMapper;

/// Documents grouped by destination endpoint, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EndpointDocumentMap {
    entries: Vec<(Arc<Endpoint>, Vec<Document>)>,
}

impl EndpointDocumentMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `documents` on `endpoint`, after anything already queued there.
    pub fn append(&mut self, endpoint: Arc<Endpoint>, documents: Vec<Document>) {
        match self.entries.iter_mut().find(|(e, _)| e.name == endpoint.name) {
            Some((_, queued)) => queued.extend(documents),
            None => self.entries.push((endpoint, documents)),
        }
    }

    /// Documents queued on the endpoint named `name`.
    pub fn get(&self, name: &str) -> Option<&[Document]> {
        self.entries
            .iter()
            .find(|(e, _)| e.name == name)
            .map(|(_, documents)| documents.as_slice())
    }

    /// Endpoints and their documents, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<Endpoint>, &[Document])> {
        self.entries
            .iter()
            .map(|(endpoint, documents)| (endpoint, documents.as_slice()))
    }

    /// Number of endpoints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no endpoint has documents queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of top-level documents over all endpoints.
    pub fn document_count(&self) -> usize {
        self.entries.iter().map(|(_, documents)| documents.len()).sum()
    }
}

/// Maps items to documents and sends them to their endpoints.
pub struct DocumentIndexer<M: DocumentMapper> {
    mapper: M,
    resolver: Arc<dyn EndpointResolver>,
    gateway: Arc<dyn Gateway>,
}

impl<M: DocumentMapper> DocumentIndexer<M> {
    /// Create an indexer.
    pub fn new(mapper: M, resolver: Arc<dyn EndpointResolver>, gateway: Arc<dyn Gateway>) -> Self {
        Self {
            mapper,
            resolver,
            gateway,
        }
    }

    /// The item mapper.
    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    /// Map `items` to placed documents grouped by endpoint.
    ///
    /// Languages are routed in the order they are first seen. Nothing is
    /// sent to the backend.
    ///
    /// # Errors
    ///
    /// Fails if the mapper fails, if a mapped document has no language code
    /// or if a language has no endpoint.
    pub fn map_documents(&self, items: &[M::Item]) -> Result<EndpointDocumentMap> {
        let mut by_language: Vec<(String, Vec<Document>)> = Vec::new();
        for item in items {
            for document in self.mapper.map_content_block(item)? {
                let language_code = document.language_code.clone().ok_or_else(|| {
                    Error::invalid_argument(format!(
                        "document '{}' has no language code",
                        document.id
                    ))
                })?;
                match by_language.iter_mut().find(|(code, _)| *code == language_code) {
                    Some((_, documents)) => documents.push(document),
                    None => by_language.push((language_code, vec![document])),
                }
            }
        }

        let main = self.resolver.main_languages_endpoint()?;
        let mut map = EndpointDocumentMap::new();
        let mut main_translation_copies = Vec::new();

        for (language_code, mut documents) in by_language {
            let target = self.resolver.indexing_target(&language_code)?;
            let on_main = main.as_ref().is_some_and(|m| m.name == target.name);

            for document in &mut documents {
                document.set_placement(Placement::for_endpoint(
                    on_main,
                    document.is_main_translation,
                ));
                if main.is_some() && !on_main && document.is_main_translation {
                    main_translation_copies.push(derive_main_translation_copy(document));
                }
            }

            log::trace!(
                "routing {} '{}' documents to '{}'",
                documents.len(),
                language_code,
                target.name
            );
            map.append(target, documents);
        }

        if let Some(main) = main {
            if !main_translation_copies.is_empty() {
                log::trace!(
                    "routing {} main translation copies to '{}'",
                    main_translation_copies.len(),
                    main.name
                );
                map.append(main, main_translation_copies);
            }
        }

        Ok(map)
    }

    /// Map `items` and send each endpoint its documents.
    ///
    /// Returns the map that was sent. Changes become visible after the next
    /// commit.
    pub async fn bulk_index_content(&self, items: &[M::Item]) -> Result<EndpointDocumentMap> {
        let map = self.map_documents(items)?;

        for (endpoint, documents) in map.iter() {
            self.gateway.bulk_index_documents(documents, endpoint).await?;
        }

        log::info!(
            "indexed {} items as {} documents on {} endpoints via {}",
            items.len(),
            map.document_count(),
            map.len(),
            self.gateway.name()
        );
        Ok(map)
    }
}

impl<M: DocumentMapper + fmt::Debug> fmt::Debug for DocumentIndexer<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentIndexer")
            .field("mapper", &self.mapper)
            .field("gateway", &self.gateway.name())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use proptest::prelude::*;
    use solrglot_endpoint::{EndpointRegistry, NativeEndpointResolver};

    use crate::mapper::{ContentItem, LocationItem, NativeDocumentMapper};
    use crate::memory::MemoryGateway;

    fn resolver(
        map: &[(&str, &str)],
        default: Option<&str>,
        main: Option<&str>,
    ) -> Arc<NativeEndpointResolver> {
        let mut registry = EndpointRegistry::new();
        for name in ["E1", "E2", "M"] {
            registry.register(name, Endpoint::with_core(name, format!("core_{name}")));
        }
        let endpoint_map: BTreeMap<String, String> = map
            .iter()
            .map(|(lang, name)| (lang.to_string(), name.to_string()))
            .collect();
        Arc::new(NativeEndpointResolver::new(
            Arc::new(registry),
            vec!["E1".to_string()],
            endpoint_map,
            default.map(str::to_string),
            main.map(str::to_string),
        ))
    }

    fn indexer(resolver: Arc<NativeEndpointResolver>) -> DocumentIndexer<NativeDocumentMapper> {
        DocumentIndexer::new(
            NativeDocumentMapper::new(),
            resolver,
            Arc::new(MemoryGateway::new()),
        )
    }

    fn item(id: u64, main: &str, always_available: bool, languages: &[&str]) -> ContentItem {
        ContentItem {
            id,
            main_language_code: main.to_string(),
            always_available,
            names: languages
                .iter()
                .map(|l| (l.to_string(), format!("name {id} {l}")))
                .collect(),
            locations: vec![LocationItem {
                id: id * 10,
                parent_id: Some(1),
            }],
        }
    }

    fn ids(documents: &[Document]) -> Vec<&str> {
        documents.iter().map(|d| d.id.as_str()).collect()
    }

    // ------------------------------------------------------------------------
    // EndpointDocumentMap tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_map_append_merges_by_name() {
        let e1 = Arc::new(Endpoint::with_core("E1", "core_E1"));
        let e2 = Arc::new(Endpoint::with_core("E2", "core_E2"));
        let doc = |id: &str| Document::builder().id(id).build();

        let mut map = EndpointDocumentMap::new();
        map.append(e2.clone(), vec![doc("a")]);
        map.append(e1.clone(), vec![doc("b")]);
        map.append(e2.clone(), vec![doc("c"), doc("d")]);

        assert_eq!(map.len(), 2);
        assert_eq!(map.document_count(), 4);
        assert_eq!(ids(map.get("E2").unwrap()), vec!["a", "c", "d"]);
        let names: Vec<_> = map.iter().map(|(e, _)| e.name.as_str()).collect();
        assert_eq!(names, vec!["E2", "E1"]);
        assert!(map.get("M").is_none());
    }

    // ------------------------------------------------------------------------
    // Routing and placement tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_main_translation_copied_to_main_endpoint() {
        let indexer = indexer(resolver(
            &[("eng-GB", "E1"), ("ger-DE", "E2")],
            None,
            Some("M"),
        ));
        let map = indexer
            .map_documents(&[item(1, "eng-GB", true, &["eng-GB", "ger-DE"])])
            .unwrap();

        let names: Vec<_> = map.iter().map(|(e, _)| e.name.as_str()).collect();
        assert_eq!(names, vec!["E1", "E2", "M"]);

        let regular = &map.get("E1").unwrap()[0];
        assert_eq!(regular.id, "content1eng-gb");
        for d in regular.flatten() {
            assert_eq!(d.placement, Some(Placement::Regular));
        }

        let copy = &map.get("M").unwrap()[0];
        assert_eq!(copy.id, "content1eng-gbmt");
        assert_eq!(copy.documents[0].id, "location10eng-gbmt");
        for d in copy.flatten() {
            assert_eq!(d.placement, Some(Placement::Main));
        }

        let german = &map.get("E2").unwrap()[0];
        assert_eq!(german.placement, Some(Placement::Regular));
        assert_eq!(map.document_count(), 3);
    }

    #[test]
    fn test_main_translation_on_main_endpoint_is_shared() {
        let indexer = indexer(resolver(
            &[("eng-GB", "M"), ("ger-DE", "M")],
            None,
            Some("M"),
        ));
        let map = indexer
            .map_documents(&[item(1, "eng-GB", true, &["eng-GB", "ger-DE"])])
            .unwrap();

        assert_eq!(map.len(), 1);
        let documents = map.get("M").unwrap();
        assert_eq!(ids(documents), vec!["content1eng-gb", "content1ger-de"]);
        assert_eq!(documents[0].placement, Some(Placement::Shared));
        assert_eq!(documents[1].placement, Some(Placement::Regular));
    }

    #[test]
    fn test_copies_merge_after_documents_queued_on_main() {
        let indexer = indexer(resolver(
            &[("eng-GB", "E1"), ("ger-DE", "M")],
            None,
            Some("M"),
        ));
        let map = indexer
            .map_documents(&[item(1, "eng-GB", false, &["eng-GB", "ger-DE"])])
            .unwrap();

        assert_eq!(
            ids(map.get("M").unwrap()),
            vec!["content1ger-de", "content1eng-gbmt"]
        );
    }

    #[test]
    fn test_no_copies_without_main_endpoint() {
        let indexer = indexer(resolver(&[("eng-GB", "E1")], Some("E2"), None));
        let map = indexer
            .map_documents(&[item(1, "eng-GB", true, &["eng-GB", "ger-DE"])])
            .unwrap();

        assert_eq!(map.document_count(), 2);
        assert!(map.get("M").is_none());
        assert_eq!(ids(map.get("E2").unwrap()), vec!["content1ger-de"]);
    }

    #[test]
    fn test_languages_grouped_across_items() {
        let indexer = indexer(resolver(
            &[("eng-GB", "E1"), ("ger-DE", "E2")],
            None,
            None,
        ));
        let map = indexer
            .map_documents(&[
                item(1, "ger-DE", false, &["ger-DE"]),
                item(2, "eng-GB", false, &["eng-GB", "ger-DE"]),
            ])
            .unwrap();

        let names: Vec<_> = map.iter().map(|(e, _)| e.name.as_str()).collect();
        assert_eq!(names, vec!["E2", "E1"]);
        assert_eq!(
            ids(map.get("E2").unwrap()),
            vec!["content1ger-de", "content2ger-de"]
        );
    }

    #[test]
    fn test_unmapped_language_fails() {
        let indexer = indexer(resolver(&[("eng-GB", "E1")], None, Some("M")));
        let err = indexer
            .map_documents(&[item(1, "eng-GB", true, &["eng-GB", "fre-FR"])])
            .unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("fre-FR"));
    }

    #[test]
    fn test_empty_batch() {
        let indexer = indexer(resolver(&[], Some("E1"), Some("M")));
        let map = indexer.map_documents(&[]).unwrap();
        assert!(map.is_empty());
    }

    #[tokio::test]
    async fn test_bulk_index_stages_on_gateway() {
        let gateway = Arc::new(MemoryGateway::new());
        let indexer = DocumentIndexer::new(
            NativeDocumentMapper::new(),
            resolver(&[("eng-GB", "E1")], None, Some("M")),
            gateway.clone(),
        );

        let map = indexer
            .bulk_index_content(&[item(1, "eng-GB", true, &["eng-GB"])])
            .await
            .unwrap();
        assert_eq!(map.document_count(), 2);
        assert_eq!(gateway.pending_count("E1").await, 1);
        assert_eq!(gateway.pending_count("M").await, 1);
        assert_eq!(gateway.document_count("E1").await, 0);
    }

    // ------------------------------------------------------------------------
    // Property tests
    // ------------------------------------------------------------------------

    const LANGUAGES: [&str; 4] = ["eng-GB", "ger-DE", "fre-FR", "nor-NO"];

    fn any_item() -> impl Strategy<Value = ContentItem> {
        (
            1u64..1000,
            proptest::sample::subsequence(LANGUAGES.to_vec(), 1..=LANGUAGES.len()),
            any::<prop::sample::Index>(),
            any::<bool>(),
        )
            .prop_map(|(id, languages, main, always_available)| {
                let main_language = languages[main.index(languages.len())];
                item(id, main_language, always_available, &languages)
            })
    }

    fn any_routing() -> impl Strategy<Value = (Vec<&'static str>, bool)> {
        (
            proptest::collection::vec(
                prop_oneof![Just("E1"), Just("E2"), Just("M")],
                LANGUAGES.len(),
            ),
            any::<bool>(),
        )
    }

    proptest! {
        #[test]
        fn test_every_document_is_placed(
            items in proptest::collection::vec(any_item(), 0..5),
            (targets, with_main) in any_routing(),
        ) {
            let map_pairs: Vec<(&str, &str)> = LANGUAGES
                .iter()
                .copied()
                .zip(targets.iter().copied())
                .collect();
            let indexer = indexer(resolver(&map_pairs, None, with_main.then_some("M")));
            let map = indexer.map_documents(&items).unwrap();

            for (_, documents) in map.iter() {
                for document in documents {
                    for d in document.flatten() {
                        let placement = d.placement.unwrap();
                        prop_assert!(placement.is_regular() || placement.is_main());
                    }
                }
            }
        }

        #[test]
        fn test_one_main_placement_per_item(
            item in any_item(),
            (targets, with_main) in any_routing(),
        ) {
            let map_pairs: Vec<(&str, &str)> = LANGUAGES
                .iter()
                .copied()
                .zip(targets.iter().copied())
                .collect();
            let indexer = indexer(resolver(&map_pairs, None, with_main.then_some("M")));
            let map = indexer.map_documents(std::slice::from_ref(&item)).unwrap();

            let main_placed: Vec<&Document> = map
                .iter()
                .flat_map(|(_, documents)| documents.iter())
                .filter(|d| d.placement.is_some_and(|p| p.is_main()))
                .collect();
            let regular_placed = map
                .iter()
                .flat_map(|(_, documents)| documents.iter())
                .filter(|d| d.placement.is_some_and(|p| p.is_regular()))
                .count();

            prop_assert_eq!(regular_placed, item.names.len());
            if with_main {
                prop_assert_eq!(main_placed.len(), 1);
                prop_assert!(main_placed[0].is_main_translation);
                prop_assert!(map.get("M").unwrap().iter().any(|d| d.id == main_placed[0].id));
            } else {
                prop_assert!(main_placed.is_empty());
            }
        }
    }
}

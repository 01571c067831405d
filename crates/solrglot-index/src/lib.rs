//! Translation document indexing for Solrglot.
//!
//! Items are mapped to one document per translation by a
//! [`DocumentMapper`]. The [`DocumentIndexer`] routes each language to its
//! endpoint, marks every stored document with its placement and adds a
//! dedicated copy of each main translation to the main-languages endpoint.
//! The [`Gateway`] trait is the transport to the backend; [`MemoryGateway`]
//! keeps everything in process.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use solrglot_core::{Config, Placement};
//! use solrglot_endpoint::NativeEndpointResolver;
//! use solrglot_index::{ContentItem, DocumentIndexer, MemoryGateway, NativeDocumentMapper};
//!
//! let config = Config::from_toml_str(r#"
//! main_languages_endpoint = "main"
//!
//! [endpoint_map]
//! "eng-GB" = "en"
//!
//! [endpoints.en]
//! core = "collection_en"
//!
//! [endpoints.main]
//! core = "collection_main"
//! "#).unwrap();
//!
//! let indexer = DocumentIndexer::new(
//!     NativeDocumentMapper::new(),
//!     Arc::new(NativeEndpointResolver::from_config(&config).unwrap()),
//!     Arc::new(MemoryGateway::new()),
//! );
//!
//! let item: ContentItem = serde_json::from_str(
//!     r#"{"id": 1, "mainLanguageCode": "eng-GB", "names": {"eng-GB": "Home"}}"#,
//! ).unwrap();
//!
//! let map = indexer.map_documents(&[item]).unwrap();
//! assert_eq!(map.get("en").unwrap()[0].placement, Some(Placement::Regular));
//! assert_eq!(map.get("main").unwrap()[0].id, "content1eng-gbmt");
//! ```

pub mod gateway;
pub mod indexer;
pub mod main_translation;
pub mod mapper;
pub mod memory;

pub use gateway::{Gateway, SearchHit, SearchResults};
pub use indexer::{DocumentIndexer, EndpointDocumentMap};
pub use main_translation::{derive_main_translation_copy, MAIN_TRANSLATION_ID_SUFFIX};
pub use mapper::{ContentItem, DocumentMapper, LocationItem, NativeDocumentMapper};
pub use memory::MemoryGateway;

//! Endpoint registry and language-aware endpoint resolution for Solrglot.
//!
//! Translations are sharded across backend cores by language. This crate
//! answers the routing questions: which core stores a language, which core
//! receives search requests, and which cores a search has to cover for a
//! given set of prioritized languages.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                solrglot-endpoint                 │
//! ├──────────────────────────────────────────────────┤
//! │  Endpoint (core coordinates, identity by name)   │
//! │  EndpointRegistry (name → Arc<Endpoint>)         │
//! ├──────────────────────────────────────────────────┤
//! │  EndpointResolver trait                          │
//! │  └── NativeEndpointResolver (language map,       │
//! │      default and main-languages endpoints)       │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use solrglot_core::{Config, LanguageSettings};
//! use solrglot_endpoint::{EndpointResolver, NativeEndpointResolver};
//!
//! let config = Config::from_toml_str(r#"
//! entry_endpoints = ["en"]
//!
//! [endpoint_map]
//! "eng-GB" = "en"
//! "ger-DE" = "de"
//!
//! [endpoints.en]
//! core = "collection_en"
//!
//! [endpoints.de]
//! core = "collection_de"
//! "#).unwrap();
//!
//! let resolver = NativeEndpointResolver::from_config(&config).unwrap();
//! assert_eq!(resolver.indexing_target("ger-DE").unwrap().core, "collection_de");
//!
//! let settings = LanguageSettings::new(["ger-DE"]).with_always_available(false);
//! let targets = resolver.search_targets(&settings).unwrap();
//! assert_eq!(targets.len(), 1);
//! ```

pub mod endpoint;
pub mod registry;
pub mod resolver;

pub use endpoint::Endpoint;
pub use registry::EndpointRegistry;
pub use resolver::{EndpointResolver, NativeEndpointResolver};

//! Filter criteria and language-aware core filtering for Solrglot.
//!
//! [`Criterion`] models the filters this workspace builds: reserved
//! translation fields, placement flags, generic field matches and boolean
//! combinators. [`CoreFilter`] adds the condition that makes a search over
//! several cores return exactly one translation per item.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use solrglot_core::{Config, DocumentType, LanguageSettings};
//! use solrglot_endpoint::NativeEndpointResolver;
//! use solrglot_query::{CoreFilter, Criterion, NativeCoreFilter, Query};
//!
//! let config = Config::from_toml_str(r#"
//! default_endpoint = "endpoint0"
//!
//! [endpoints.endpoint0]
//! core = "collection0"
//! "#).unwrap();
//!
//! let resolver = Arc::new(NativeEndpointResolver::from_config(&config).unwrap());
//! let core_filter = NativeCoreFilter::new(resolver);
//!
//! let mut query = Query::new(Criterion::MatchAll);
//! core_filter.apply(&mut query, &LanguageSettings::default(), DocumentType::Content);
//! assert_eq!(
//!     query.filter.render(),
//!     "(document_type_id:\"content\" AND *:* AND meta_indexed_is_main_translation_b:true)"
//! );
//! ```

pub mod core_filter;
pub mod criterion;
pub mod query;

pub use core_filter::{CoreFilter, NativeCoreFilter};
pub use criterion::{CorePlacement, Criterion};
pub use query::Query;

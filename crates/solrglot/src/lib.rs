//! Solrglot: language-aware search over a multi-core Solr backend.
//!
//! This crate re-exports the Solrglot components and adds [`Handler`],
//! which wires endpoint resolution, core filtering, indexing and the
//! transport together.

#![forbid(unsafe_code)]

pub mod handler;

pub use solrglot_core as core;
pub use solrglot_endpoint as endpoint;
pub use solrglot_index as index;
pub use solrglot_query as query;

pub use handler::Handler;
pub use solrglot_core::{Config, Error, LanguageSettings, Result};

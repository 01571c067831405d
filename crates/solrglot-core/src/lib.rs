//! Solrglot Core: shared types, errors, configuration and document model.
//!
//! This crate provides the foundational types used across all Solrglot
//! crates. It has no internal Solrglot dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: Endpoint definitions and language routing configuration
//! - [`language`]: Requested languages and fallback flags
//! - [`fields`]: Typed fields and reserved field names
//! - [`placement`]: Regular/main placement of stored translations
//! - [`document`]: Translation documents and their builder

#![forbid(unsafe_code)]

pub mod config;
pub mod document;
pub mod error;
pub mod fields;
pub mod language;
pub mod placement;

// Re-export key types at crate root for convenience
pub use config::{Config, EndpointSettings};
pub use document::{Document, DocumentBuilder, DocumentType};
pub use error::{Error, Result};
pub use fields::{Field, FieldType, FieldValue};
pub use language::LanguageSettings;
pub use placement::Placement;

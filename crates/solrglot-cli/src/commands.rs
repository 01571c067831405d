//! Command implementations.
//!
//! Every command renders its output to a string so `main` only prints.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use solrglot::Config;
use solrglot::core::{DocumentType, LanguageSettings};
use solrglot::endpoint::{Endpoint, EndpointResolver, NativeEndpointResolver};
use solrglot::index::{ContentItem, DocumentIndexer, MemoryGateway, NativeDocumentMapper};
use solrglot::query::{CoreFilter, Criterion, NativeCoreFilter, Query};

/// Load the configuration from `explicit`, the environment or the default file.
pub fn load_config(explicit: Option<&str>) -> Result<Config> {
    let path = Config::resolve_path(explicit);
    tracing::debug!(path = %path.display(), "loading configuration");
    let config = Config::load(&path)
        .with_context(|| format!("cannot load configuration from {}", path.display()))?;
    Ok(config)
}

fn resolver(config: &Config) -> Result<NativeEndpointResolver> {
    Ok(NativeEndpointResolver::from_config(config)?)
}

/// List every endpoint with its URL and roles.
pub fn endpoints(config: &Config) -> Result<String> {
    let resolver = resolver(config)?;
    let entry = config.entry_endpoints.first();

    let mut out = String::new();
    for name in resolver.registry().names() {
        let endpoint = resolver.registry().get(name)?;
        let mut roles = Vec::new();
        if entry.is_some_and(|e| e == name) {
            roles.push("entry");
        }
        if config.default_endpoint.as_deref() == Some(name) {
            roles.push("default");
        }
        if config.main_languages_endpoint.as_deref() == Some(name) {
            roles.push("main");
        }
        let languages: Vec<&str> = config
            .endpoint_map
            .iter()
            .filter(|(_, target)| target.as_str() == name)
            .map(|(code, _)| code.as_str())
            .collect();

        write!(out, "{name}\t{}", endpoint.url())?;
        if !roles.is_empty() {
            write!(out, "\t[{}]", roles.join(", "))?;
        }
        if !languages.is_empty() {
            write!(out, "\t{}", languages.join(" "))?;
        }
        writeln!(out)?;
    }
    Ok(out)
}

/// Endpoint a language is indexed into.
pub fn target(config: &Config, language_code: &str) -> Result<String> {
    let endpoint = resolver(config)?.indexing_target(language_code)?;
    Ok(format!("{endpoint}\n"))
}

/// Endpoints a search with `settings` covers.
pub fn search_targets(config: &Config, settings: &LanguageSettings, json: bool) -> Result<String> {
    let targets = resolver(config)?.search_targets(settings)?;

    if json {
        let endpoints: Vec<&Endpoint> = targets.iter().map(Arc::as_ref).collect();
        return Ok(format!("{}\n", serde_json::to_string_pretty(&endpoints)?));
    }

    let mut out = String::new();
    for endpoint in &targets {
        writeln!(out, "{endpoint}")?;
    }
    Ok(out)
}

/// Rendered filter for a search with `settings`.
pub fn filter(
    config: &Config,
    settings: &LanguageSettings,
    document_type: DocumentType,
) -> Result<String> {
    let core_filter = NativeCoreFilter::new(Arc::new(resolver(config)?));
    let mut query = Query::new(Criterion::MatchAll);
    core_filter.apply(&mut query, settings, document_type);
    Ok(format!("{}\n", query.filter))
}

/// Validate the configuration and report what it defines.
pub fn check(config: &Config) -> Result<String> {
    let resolver = resolver(config)?;
    let entry = resolver.entry_endpoint()?;
    let all = resolver.all_endpoints()?;

    let mut out = String::new();
    writeln!(out, "configuration ok")?;
    writeln!(out, "  endpoints:        {}", resolver.registry().len())?;
    writeln!(out, "  mapped languages: {}", config.endpoint_map.len())?;
    writeln!(out, "  entry endpoint:   {}", entry.name)?;
    writeln!(
        out,
        "  default endpoint: {}",
        config.default_endpoint.as_deref().unwrap_or("-")
    )?;
    writeln!(
        out,
        "  main languages:   {}",
        config.main_languages_endpoint.as_deref().unwrap_or("-")
    )?;
    writeln!(out, "  routed endpoints: {}", all.len())?;
    Ok(out)
}

#[derive(Debug, Serialize)]
struct PlannedEndpoint<'a> {
    endpoint: &'a str,
    documents: Vec<PlannedDocument<'a>>,
}

#[derive(Debug, Serialize)]
struct PlannedDocument<'a> {
    id: &'a str,
    language_code: Option<&'a str>,
    placement: Option<&'static str>,
    children: usize,
}

/// Where the items in a JSON file would be indexed, without sending them.
pub fn plan(config: &Config, items_path: &Path, json: bool) -> Result<String> {
    let content = std::fs::read_to_string(items_path)
        .with_context(|| format!("cannot read {}", items_path.display()))?;
    let items: Vec<ContentItem> = serde_json::from_str(&content)
        .with_context(|| format!("cannot parse items from {}", items_path.display()))?;

    let indexer = DocumentIndexer::new(
        NativeDocumentMapper::new(),
        Arc::new(resolver(config)?),
        Arc::new(MemoryGateway::new()),
    );
    let map = indexer.map_documents(&items)?;

    let planned: Vec<PlannedEndpoint<'_>> = map
        .iter()
        .map(|(endpoint, documents)| PlannedEndpoint {
            endpoint: endpoint.name.as_str(),
            documents: documents
                .iter()
                .map(|d| PlannedDocument {
                    id: d.id.as_str(),
                    language_code: d.language_code.as_deref(),
                    placement: d.placement.map(|p| p.as_str()),
                    children: d.documents.len(),
                })
                .collect(),
        })
        .collect();

    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&planned)?));
    }

    let mut out = String::new();
    for entry in &planned {
        writeln!(out, "{}:", entry.endpoint)?;
        for document in &entry.documents {
            writeln!(
                out,
                "  {}\t{}\t{} children",
                document.id,
                document.placement.unwrap_or("-"),
                document.children
            )?;
        }
    }
    writeln!(
        out,
        "{} items, {} documents, {} endpoints",
        items.len(),
        map.document_count(),
        map.len()
    )?;
    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================

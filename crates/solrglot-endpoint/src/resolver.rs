//! Language-aware endpoint resolution.
//!
//! A translation is stored on the endpoint its language maps to, falling
//! back to the default endpoint. Searching is less direct: the
//! always-available fallback can surface the main translation of an item
//! in any language, so unless a dedicated main-languages endpoint holds a
//! copy of every main translation, all endpoints have to be searched.
//!
//! | Main-languages endpoint | Languages | Always available | Targets |
//! |---|---|---|---|
//! | no | any | yes | all endpoints |
//! | no | none | any | all endpoints |
//! | no | some | no | endpoints of the languages |
//! | yes | none | any | main-languages endpoint |
//! | yes | some | yes | endpoints of the languages + main-languages endpoint |
//! | yes | some | no | endpoints of the languages |

use std::collections::BTreeMap;
use std::sync::Arc;

use solrglot_core::{Config, Error, LanguageSettings, Result};

use crate::endpoint::Endpoint;
use crate::registry::EndpointRegistry;

/// Answers routing questions over static configuration.
///
/// Implementations must be safe to share between threads; all methods are
/// read-only.
pub trait EndpointResolver: Send + Sync {
    /// Endpoint used to issue search requests.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error if no entry endpoint is configured.
    fn entry_endpoint(&self) -> Result<Arc<Endpoint>>;

    /// Endpoint that stores translations in `language_code`.
    ///
    /// # Errors
    ///
    /// Fails with `UnmappedLanguage` if the language is not mapped and no
    /// default endpoint is configured.
    fn indexing_target(&self, language_code: &str) -> Result<Arc<Endpoint>>;

    /// Whether a dedicated main-languages endpoint is configured.
    fn has_main_languages_endpoint(&self) -> bool;

    /// The dedicated main-languages endpoint, if configured.
    fn main_languages_endpoint(&self) -> Result<Option<Arc<Endpoint>>>;

    /// Endpoints that must be searched to honour `settings`.
    ///
    /// The result never contains the same endpoint twice.
    fn search_targets(&self, settings: &LanguageSettings) -> Result<Vec<Arc<Endpoint>>>;

    /// Every distinct endpoint referenced by the routing configuration.
    fn all_endpoints(&self) -> Result<Vec<Arc<Endpoint>>>;
}

/// Resolver over an endpoint registry and a language map.
#[derive(Debug, Clone)]
pub struct NativeEndpointResolver {
    registry: Arc<EndpointRegistry>,
    entry_endpoints: Vec<String>,
    endpoint_map: BTreeMap<String, String>,
    default_endpoint: Option<String>,
    main_languages_endpoint: Option<String>,
}

impl NativeEndpointResolver {
    /// Create a resolver.
    ///
    /// Names are looked up in `registry` lazily; a name missing from the
    /// registry surfaces as `EndpointNotFound` when it is first needed.
    pub fn new(
        registry: Arc<EndpointRegistry>,
        entry_endpoints: Vec<String>,
        endpoint_map: BTreeMap<String, String>,
        default_endpoint: Option<String>,
        main_languages_endpoint: Option<String>,
    ) -> Self {
        Self {
            registry,
            entry_endpoints,
            endpoint_map,
            default_endpoint,
            main_languages_endpoint,
        }
    }

    /// Validate `config` and build a resolver with its own registry.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let registry = Arc::new(EndpointRegistry::from_config(config));
        Ok(Self::new(
            registry,
            config.entry_endpoints.clone(),
            config.endpoint_map.clone(),
            config.default_endpoint.clone(),
            config.main_languages_endpoint.clone(),
        ))
    }

    /// The registry endpoints are looked up in.
    pub fn registry(&self) -> &Arc<EndpointRegistry> {
        &self.registry
    }

    fn target_name(&self, language_code: &str) -> Result<&str> {
        self.endpoint_map
            .get(language_code)
            .or(self.default_endpoint.as_ref())
            .map(String::as_str)
            .ok_or_else(|| Error::unmapped_language(language_code))
    }

    fn all_endpoint_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        let candidates = self
            .endpoint_map
            .values()
            .chain(self.default_endpoint.iter())
            .chain(self.main_languages_endpoint.iter());
        for name in candidates {
            push_unique(&mut names, name);
        }
        names
    }

    fn lookup_all(&self, names: &[&str]) -> Result<Vec<Arc<Endpoint>>> {
        names.iter().map(|name| self.registry.get(name)).collect()
    }
}

fn push_unique<'a>(names: &mut Vec<&'a str>, name: &'a str) {
    if !names.contains(&name) {
        names.push(name);
    }
}

impl EndpointResolver for NativeEndpointResolver {
    fn entry_endpoint(&self) -> Result<Arc<Endpoint>> {
        let name = self
            .entry_endpoints
            .first()
            .ok_or_else(|| Error::config("no entry endpoints defined"))?;
        self.registry.get(name)
    }

    fn indexing_target(&self, language_code: &str) -> Result<Arc<Endpoint>> {
        let name = self.target_name(language_code)?;
        self.registry.get(name)
    }

    fn has_main_languages_endpoint(&self) -> bool {
        self.main_languages_endpoint.is_some()
    }

    fn main_languages_endpoint(&self) -> Result<Option<Arc<Endpoint>>> {
        self.main_languages_endpoint
            .as_deref()
            .map(|name| self.registry.get(name))
            .transpose()
    }

    fn search_targets(&self, settings: &LanguageSettings) -> Result<Vec<Arc<Endpoint>>> {
        let languages = settings.distinct_languages();
        let use_always_available = settings.use_always_available;

        // Without a dedicated main-languages endpoint, main translations
        // may live anywhere.
        if (use_always_available || languages.is_empty())
            && self.main_languages_endpoint.is_none()
        {
            let targets = self.all_endpoints()?;
            log::debug!(
                "searching all {} endpoints for languages {:?}",
                targets.len(),
                languages
            );
            return Ok(targets);
        }

        let mut names: Vec<&str> = Vec::new();
        for language_code in &languages {
            push_unique(&mut names, self.target_name(language_code)?);
        }

        if let Some(main) = self.main_languages_endpoint.as_deref() {
            if use_always_available || names.is_empty() {
                push_unique(&mut names, main);
            }
        }

        if names.is_empty() {
            return Err(Error::config(
                "no endpoints defined for given language settings",
            ));
        }

        log::debug!("search targets for languages {languages:?}: {names:?}");
        self.lookup_all(&names)
    }

    fn all_endpoints(&self) -> Result<Vec<Arc<Endpoint>>> {
        let names = self.all_endpoint_names();
        if names.is_empty() {
            return Err(Error::config("no endpoints defined"));
        }
        self.lookup_all(&names)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EN: &str = "endpoint_en_GB";
    const DE: &str = "endpoint_de_DE";
    const DEFAULT: &str = "default_endpoint";
    const MAIN: &str = "main_languages_endpoint";

    fn resolver(
        entry: &[&str],
        map: &[(&str, &str)],
        default: Option<&str>,
        main: Option<&str>,
    ) -> NativeEndpointResolver {
        let mut registry = EndpointRegistry::new();
        let names = entry
            .iter()
            .chain(map.iter().map(|(_, name)| name))
            .chain(default.iter())
            .chain(main.iter());
        for name in names {
            registry.register(*name, Endpoint::with_core(*name, *name));
        }

        NativeEndpointResolver::new(
            Arc::new(registry),
            entry.iter().map(|s| s.to_string()).collect(),
            map.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            default.map(String::from),
            main.map(String::from),
        )
    }

    fn names(endpoints: &[Arc<Endpoint>]) -> Vec<&str> {
        endpoints.iter().map(|e| e.name.as_str()).collect()
    }

    // ------------------------------------------------------------------------
    // Entry endpoint
    // ------------------------------------------------------------------------

    #[test]
    fn test_entry_endpoint_is_first() {
        let resolver = resolver(&["endpoint2", "endpoint0", "endpoint1"], &[], None, None);
        assert_eq!(resolver.entry_endpoint().unwrap().name, "endpoint2");
    }

    #[test]
    fn test_entry_endpoint_missing() {
        let resolver = resolver(&[], &[("eng-GB", EN)], None, None);
        let err = resolver.entry_endpoint().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("no entry endpoints defined"));
    }

    // ------------------------------------------------------------------------
    // Indexing target
    // ------------------------------------------------------------------------

    #[test]
    fn test_indexing_target_mapped() {
        let resolver = resolver(&[], &[("eng-GB", EN), ("ger-DE", DE)], Some(DEFAULT), None);
        assert_eq!(resolver.indexing_target("ger-DE").unwrap().name, DE);
    }

    #[test]
    fn test_indexing_target_default() {
        let resolver = resolver(&[], &[], Some(DEFAULT), None);
        assert_eq!(resolver.indexing_target("eng-GB").unwrap().name, DEFAULT);
    }

    #[test]
    fn test_indexing_target_ignores_main_languages_endpoint() {
        let resolver = resolver(&[], &[], None, Some(MAIN));
        let err = resolver.indexing_target("eng-GB").unwrap_err();
        assert!(matches!(err, Error::UnmappedLanguage { .. }));
    }

    #[test]
    fn test_indexing_target_unregistered_name() {
        let resolver = NativeEndpointResolver::new(
            Arc::new(EndpointRegistry::new()),
            Vec::new(),
            [("eng-GB".to_string(), "ghost".to_string())].into(),
            None,
            None,
        );
        let err = resolver.indexing_target("eng-GB").unwrap_err();
        assert!(matches!(err, Error::EndpointNotFound { .. }));
    }

    // ------------------------------------------------------------------------
    // Main languages endpoint
    // ------------------------------------------------------------------------

    #[test]
    fn test_main_languages_endpoint() {
        let resolver = resolver(&[], &[], None, Some(MAIN));
        assert!(resolver.has_main_languages_endpoint());
        assert_eq!(resolver.main_languages_endpoint().unwrap().unwrap().name, MAIN);
    }

    #[test]
    fn test_no_main_languages_endpoint() {
        let resolver = resolver(&[], &[("eng-GB", EN)], None, None);
        assert!(!resolver.has_main_languages_endpoint());
        assert!(resolver.main_languages_endpoint().unwrap().is_none());
    }

    // ------------------------------------------------------------------------
    // Search targets
    // ------------------------------------------------------------------------

    struct TargetCase {
        map: &'static [(&'static str, &'static str)],
        default: Option<&'static str>,
        main: Option<&'static str>,
        languages: Option<&'static [&'static str]>,
        use_always_available: bool,
        expected: &'static [&'static str],
    }

    const BOTH: &[(&str, &str)] = &[("eng-GB", EN), ("ger-DE", DE)];
    const EN_ONLY: &[(&str, &str)] = &[("eng-GB", EN)];
    const NONE: &[(&str, &str)] = &[];
    const EN_DE: &[&str] = &["eng-GB", "ger-DE"];
    const ENG: &[&str] = &["eng-GB"];
    const GER: &[&str] = &["ger-DE"];
    const NO_LANGUAGES: &[&str] = &[];

    const fn case(
        map: &'static [(&'static str, &'static str)],
        default: Option<&'static str>,
        main: Option<&'static str>,
        languages: Option<&'static [&'static str]>,
        use_always_available: bool,
        expected: &'static [&'static str],
    ) -> TargetCase {
        TargetCase {
            map,
            default,
            main,
            languages,
            use_always_available,
            expected,
        }
    }

    // `languages: None` means default settings.
    const TARGET_CASES: &[TargetCase] = &[
        // All endpoints: always-available fallback without main languages endpoint
        case(BOTH, None, None, Some(EN_DE), true, &[EN, DE]),
        case(BOTH, None, None, Some(GER), true, &[EN, DE]),
        case(EN_ONLY, None, None, Some(ENG), true, &[EN]),
        case(BOTH, Some(DEFAULT), None, Some(EN_DE), true, &[EN, DE, DEFAULT]),
        case(BOTH, Some(DEFAULT), None, Some(ENG), true, &[EN, DE, DEFAULT]),
        // Language endpoints plus main languages endpoint
        case(BOTH, Some(DEFAULT), Some(MAIN), Some(EN_DE), true, &[EN, DE, MAIN]),
        case(BOTH, Some(DEFAULT), Some(MAIN), Some(GER), true, &[DE, MAIN]),
        case(BOTH, None, Some(MAIN), Some(EN_DE), true, &[EN, DE, MAIN]),
        case(BOTH, None, Some(MAIN), Some(ENG), true, &[EN, MAIN]),
        // Language endpoints only
        case(BOTH, None, None, Some(EN_DE), false, &[EN, DE]),
        case(BOTH, None, None, Some(ENG), false, &[EN]),
        case(BOTH, Some(DEFAULT), None, Some(EN_DE), false, &[EN, DE]),
        case(BOTH, Some(DEFAULT), None, Some(ENG), false, &[EN]),
        case(BOTH, Some(DEFAULT), Some(MAIN), Some(EN_DE), false, &[EN, DE]),
        case(BOTH, Some(DEFAULT), Some(MAIN), Some(GER), false, &[DE]),
        case(BOTH, None, Some(MAIN), Some(GER), false, &[DE]),
        case(BOTH, None, Some(MAIN), Some(EN_DE), false, &[EN, DE]),
        // All endpoints: no languages, no main languages endpoint
        case(BOTH, None, None, Some(NO_LANGUAGES), true, &[EN, DE]),
        case(BOTH, None, None, None, true, &[EN, DE]),
        case(BOTH, Some(DEFAULT), None, Some(NO_LANGUAGES), true, &[EN, DE, DEFAULT]),
        case(BOTH, Some(DEFAULT), None, None, true, &[EN, DE, DEFAULT]),
        // Main languages endpoint only: no languages
        case(BOTH, Some(DEFAULT), Some(MAIN), Some(NO_LANGUAGES), true, &[MAIN]),
        case(BOTH, Some(DEFAULT), Some(MAIN), None, true, &[MAIN]),
        case(BOTH, None, Some(MAIN), Some(NO_LANGUAGES), true, &[MAIN]),
        case(BOTH, None, Some(MAIN), None, true, &[MAIN]),
        case(BOTH, None, None, Some(NO_LANGUAGES), false, &[EN, DE]),
        case(BOTH, None, None, None, true, &[EN, DE]),
        case(BOTH, Some(DEFAULT), None, Some(NO_LANGUAGES), false, &[EN, DE, DEFAULT]),
        case(BOTH, Some(DEFAULT), None, None, true, &[EN, DE, DEFAULT]),
        case(BOTH, Some(DEFAULT), Some(MAIN), Some(NO_LANGUAGES), false, &[MAIN]),
        case(BOTH, Some(DEFAULT), Some(MAIN), None, true, &[MAIN]),
        case(BOTH, None, Some(MAIN), Some(NO_LANGUAGES), false, &[MAIN]),
        case(BOTH, None, Some(MAIN), None, true, &[MAIN]),
        // Empty language map
        case(NONE, Some(DEFAULT), None, None, true, &[DEFAULT]),
        case(NONE, None, Some(MAIN), None, true, &[MAIN]),
        case(NONE, Some(DEFAULT), Some(MAIN), None, true, &[MAIN]),
        case(NONE, Some(DEFAULT), None, Some(NO_LANGUAGES), true, &[DEFAULT]),
        case(NONE, Some(DEFAULT), Some(MAIN), Some(NO_LANGUAGES), true, &[MAIN]),
        case(NONE, None, Some(MAIN), Some(NO_LANGUAGES), true, &[MAIN]),
        case(NONE, Some(DEFAULT), None, Some(NO_LANGUAGES), false, &[DEFAULT]),
        case(NONE, Some(DEFAULT), Some(MAIN), Some(NO_LANGUAGES), false, &[MAIN]),
        case(NONE, None, Some(MAIN), Some(NO_LANGUAGES), false, &[MAIN]),
    ];

    #[test]
    fn test_search_targets_table() {
        for (index, case) in TARGET_CASES.iter().enumerate() {
            let resolver = resolver(&[], case.map, case.default, case.main);
            let settings = match case.languages {
                Some(languages) => LanguageSettings::new(languages.iter().copied())
                    .with_always_available(case.use_always_available),
                None => LanguageSettings::default(),
            };

            let targets = resolver.search_targets(&settings);
            assert!(targets.is_ok(), "case {index}: {:?}", targets.as_ref().err());
            assert_eq!(names(&targets.unwrap()), case.expected, "case {index}");
        }
    }

    #[test]
    fn test_search_targets_errors() {
        let cases: &[(Option<&str>, Option<&[&str]>, bool, &str)] = &[
            (None, None, true, "no endpoints defined"),
            (None, Some(NO_LANGUAGES), true, "no endpoints defined"),
            (None, Some(NO_LANGUAGES), false, "no endpoints defined"),
            (None, Some(ENG), true, "no endpoints defined"),
            (None, Some(ENG), false, "language 'eng-GB' is not mapped"),
            (Some(MAIN), Some(ENG), true, "language 'eng-GB' is not mapped"),
            (Some(MAIN), Some(ENG), false, "language 'eng-GB' is not mapped"),
        ];

        for (index, (main, languages, use_always_available, message)) in cases.iter().enumerate() {
            let resolver = resolver(&[], NONE, None, *main);
            let settings = match languages {
                Some(languages) => LanguageSettings::new(languages.iter().copied())
                    .with_always_available(*use_always_available),
                None => LanguageSettings::default(),
            };

            let err = resolver.search_targets(&settings).unwrap_err();
            assert!(err.is_configuration(), "case {index}");
            assert!(
                err.to_string().contains(message),
                "case {index}: {err}"
            );
        }
    }

    #[test]
    fn test_search_targets_duplicate_languages() {
        let resolver = resolver(&[], BOTH, None, Some(MAIN));
        let settings = LanguageSettings::new(["ger-DE", "ger-DE", "eng-GB", "ger-DE"]);
        let targets = resolver.search_targets(&settings).unwrap();
        assert_eq!(names(&targets), vec![DE, EN, MAIN]);
    }

    #[test]
    fn test_search_targets_scan_all_without_resolving_languages() {
        let resolver = resolver(&[], &[("eng-GB", EN)], None, None);
        let settings = LanguageSettings::new(["ger-DE"]);

        let targets = resolver.search_targets(&settings).unwrap();
        assert_eq!(names(&targets), vec![EN]);
        assert!(resolver.indexing_target("ger-DE").is_err());
    }

    #[test]
    fn test_search_targets_shared_endpoint() {
        let resolver = resolver(
            &[],
            &[("eng-GB", EN), ("eng-US", EN), ("ger-DE", DE)],
            None,
            None,
        );
        let settings = LanguageSettings::new(["eng-US", "eng-GB"]).with_always_available(false);
        let targets = resolver.search_targets(&settings).unwrap();
        assert_eq!(names(&targets), vec![EN]);
    }

    // ------------------------------------------------------------------------
    // All endpoints
    // ------------------------------------------------------------------------

    #[test]
    fn test_all_endpoints() {
        let cases: &[(&[(&str, &str)], Option<&str>, Option<&str>, &[&str])] = &[
            (EN_ONLY, None, None, &[EN]),
            (EN_ONLY, Some(DEFAULT), None, &[EN, DEFAULT]),
            (EN_ONLY, Some(DEFAULT), Some(MAIN), &[EN, DEFAULT, MAIN]),
            (NONE, Some(DEFAULT), None, &[DEFAULT]),
            (NONE, None, Some(MAIN), &[MAIN]),
            (NONE, Some(DEFAULT), Some(MAIN), &[DEFAULT, MAIN]),
        ];

        for (map, default, main, expected) in cases {
            let resolver = resolver(&[], map, *default, *main);
            assert_eq!(names(&resolver.all_endpoints().unwrap()), *expected);
        }
    }

    #[test]
    fn test_all_endpoints_deduplicates() {
        let resolver = resolver(
            &[],
            &[("eng-GB", EN), ("eng-US", EN), ("ger-DE", DEFAULT)],
            Some(DEFAULT),
            Some(EN),
        );
        assert_eq!(names(&resolver.all_endpoints().unwrap()), vec![EN, DEFAULT]);
    }

    #[test]
    fn test_all_endpoints_empty() {
        let resolver = resolver(&["entry"], NONE, None, None);
        let err = resolver.all_endpoints().unwrap_err();
        assert!(err.to_string().contains("no endpoints defined"));
    }

    // ------------------------------------------------------------------------
    // From config
    // ------------------------------------------------------------------------

    #[test]
    fn test_from_config() {
        let config = Config::from_toml_str(
            r#"
entry_endpoints = ["endpoint0"]
main_languages_endpoint = "main"

[endpoint_map]
"eng-GB" = "endpoint0"

[endpoints.endpoint0]
core = "collection0"

[endpoints.main]
core = "main"
"#,
        )
        .unwrap();

        let resolver = NativeEndpointResolver::from_config(&config).unwrap();
        assert_eq!(resolver.entry_endpoint().unwrap().core, "collection0");
        assert_eq!(resolver.registry().len(), 2);
        assert!(resolver.has_main_languages_endpoint());
    }

    #[test]
    fn test_from_config_rejects_dangling_reference() {
        let config = Config::from_toml_str("default_endpoint = \"ghost\"\n").unwrap();
        let err = NativeEndpointResolver::from_config(&config).unwrap_err();
        assert!(err.is_configuration());
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    const POOL: &[&str] = &["eng-GB", "ger-DE", "fre-FR", "nor-NO", "pol-PL"];

    fn arb_routing() -> impl Strategy<Value = (Vec<(String, String)>, bool, bool)> {
        (
            proptest::collection::vec((0..POOL.len(), 0..3usize), 0..POOL.len()),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(entries, with_default, with_main)| {
                let map = entries
                    .into_iter()
                    .map(|(l, e)| (POOL[l].to_string(), format!("endpoint{e}")))
                    .collect();
                (map, with_default, with_main)
            })
    }

    fn build(map: &[(String, String)], with_default: bool, with_main: bool) -> NativeEndpointResolver {
        let map: Vec<(&str, &str)> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        resolver(
            &[],
            &map,
            with_default.then_some(DEFAULT),
            with_main.then_some(MAIN),
        )
    }

    proptest! {
        #[test]
        fn test_targets_complete_when_languages_resolve(
            (map, with_default, with_main) in arb_routing(),
            picks in proptest::collection::vec(0..POOL.len(), 0..6),
            use_always_available in any::<bool>(),
        ) {
            let resolver = build(&map, with_default, with_main);
            prop_assume!(resolver.all_endpoints().is_ok());

            let languages: Vec<&str> = picks.iter().map(|i| POOL[*i]).collect();
            let resolvable = languages.iter().all(|l| resolver.indexing_target(l).is_ok());
            prop_assume!(resolvable);

            let settings = LanguageSettings::new(languages.iter().copied())
                .with_always_available(use_always_available);
            let targets = resolver.search_targets(&settings).unwrap();
            prop_assert!(!targets.is_empty());
        }

        #[test]
        fn test_targets_never_repeat(
            (map, with_default, with_main) in arb_routing(),
            picks in proptest::collection::vec(0..POOL.len(), 0..8),
            use_always_available in any::<bool>(),
        ) {
            let resolver = build(&map, with_default, with_main);
            let languages: Vec<&str> = picks.iter().map(|i| POOL[*i]).collect();
            let settings = LanguageSettings::new(languages.iter().copied())
                .with_always_available(use_always_available);

            if let Ok(targets) = resolver.search_targets(&settings) {
                let mut seen = names(&targets);
                let total = seen.len();
                seen.sort_unstable();
                seen.dedup();
                prop_assert_eq!(seen.len(), total);
            }
        }

        #[test]
        fn test_targets_cover_indexing_targets(
            (map, with_default, with_main) in arb_routing(),
            picks in proptest::collection::vec(0..POOL.len(), 1..6),
            use_always_available in any::<bool>(),
        ) {
            let resolver = build(&map, with_default, with_main);
            let languages: Vec<&str> = picks.iter().map(|i| POOL[*i]).collect();
            // Scanning every core never resolves the languages, so an
            // unmapped one can still yield targets.
            prop_assume!(languages.iter().all(|l| resolver.indexing_target(l).is_ok()));

            let settings = LanguageSettings::new(languages.iter().copied())
                .with_always_available(use_always_available);

            if let Ok(targets) = resolver.search_targets(&settings) {
                for language in &languages {
                    let target = resolver.indexing_target(language).unwrap();
                    prop_assert!(targets.contains(&target));
                }
            }
        }
    }
}

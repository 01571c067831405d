//! Language-aware core filtering.
//!
//! A search spans every endpoint returned by the resolver, and an item may
//! be stored there several times: once per translation, plus a dedicated
//! copy of its main translation on the main-languages endpoint. The core
//! filter narrows those stored documents down to exactly one per item:
//!
//! 1. the translation in the most preferred requested language the item
//!    has, taken from its regular placement;
//! 2. otherwise, if always-available fallback is on, the item's main
//!    translation when the item is always available, taken from the main
//!    placement when a main-languages endpoint exists;
//! 3. with no requested languages, the main translation.
//!
//! Preference is encoded declaratively: the condition for language `L`
//! excludes items that have a translation in any language ranked above
//! `L`.

use std::fmt;
use std::sync::Arc;

use solrglot_core::{DocumentType, LanguageSettings};
use solrglot_endpoint::EndpointResolver;

use crate::criterion::{CorePlacement, Criterion};
use crate::query::Query;

/// Adds the translation-selection condition to a query.
pub trait CoreFilter: Send + Sync {
    /// Condition selecting one translation per item.
    ///
    /// `languages` is in priority order; repeated codes count once, at
    /// their first position.
    fn core_condition(&self, languages: &[&str], use_always_available: bool) -> Criterion;

    /// Restrict `query` to `document_type` and add the core condition.
    ///
    /// The caller's filter is kept as is.
    fn apply(&self, query: &mut Query, settings: &LanguageSettings, document_type: DocumentType) {
        let languages = settings.distinct_languages();
        let condition = self.core_condition(&languages, settings.use_always_available);
        let filter = std::mem::take(&mut query.filter);
        query.filter = Criterion::and([
            Criterion::DocumentTypeIdentifier(document_type),
            filter,
            condition,
        ]);
    }
}

/// Core filter driven by the endpoint resolver's main-languages setting.
pub struct NativeCoreFilter {
    resolver: Arc<dyn EndpointResolver>,
}

impl NativeCoreFilter {
    /// Create a core filter over `resolver`.
    pub fn new(resolver: Arc<dyn EndpointResolver>) -> Self {
        Self { resolver }
    }

    fn language_filter(&self, languages: &[&str]) -> Criterion {
        let mut conditions: Vec<Criterion> = languages
            .iter()
            .enumerate()
            .map(|(index, code)| {
                let condition = Criterion::IndexedLanguageCode(code.to_string());
                let preferred = &languages[..index];
                if preferred.is_empty() {
                    condition
                } else {
                    Criterion::and([
                        condition,
                        Criterion::not(Criterion::language_code_in(preferred.iter().copied())),
                    ])
                }
            })
            .collect();

        let filter = if conditions.len() == 1 {
            conditions.remove(0)
        } else {
            Criterion::Or(conditions)
        };

        // Dedicated main translation copies never answer a language match.
        Criterion::and([
            filter,
            Criterion::TranslationCorePlacement(CorePlacement::InRegularTranslationCore),
        ])
    }

    fn always_available_filter(&self, languages: &[&str]) -> Criterion {
        let mut conditions = vec![
            Criterion::IndexedAlwaysAvailable(true),
            Criterion::not(Criterion::language_code_in(languages.iter().copied())),
        ];

        if self.resolver.has_main_languages_endpoint() {
            conditions.push(Criterion::TranslationCorePlacement(
                CorePlacement::InMainTranslationCore,
            ));
        }

        Criterion::And(conditions)
    }
}

impl fmt::Debug for NativeCoreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeCoreFilter")
            .field(
                "main_languages_endpoint",
                &self.resolver.has_main_languages_endpoint(),
            )
            .finish()
    }
}

impl CoreFilter for NativeCoreFilter {
    fn core_condition(&self, languages: &[&str], use_always_available: bool) -> Criterion {
        let mut distinct: Vec<&str> = Vec::with_capacity(languages.len());
        for code in languages {
            if !distinct.contains(code) {
                distinct.push(*code);
            }
        }

        let main_endpoint = self.resolver.has_main_languages_endpoint();

        if distinct.is_empty() {
            log::debug!("core condition: main translations only (main endpoint: {main_endpoint})");
            return if main_endpoint {
                Criterion::TranslationCorePlacement(CorePlacement::InMainTranslationCore)
            } else {
                Criterion::IndexedMainTranslation(true)
            };
        }

        log::debug!(
            "core condition: {} prioritized languages, always available: {use_always_available}",
            distinct.len()
        );
        let filter = self.language_filter(&distinct);
        if use_always_available {
            Criterion::or([filter, self.always_available_filter(&distinct)])
        } else {
            filter
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Language settings for a search request.

use serde::{Deserialize, Serialize};

/// Requested languages and fallback behaviour.
///
/// `languages` is in priority order, most preferred first. An empty list
/// means no explicit preference: only main translations are searched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSettings {
    /// Language codes in priority order.
    #[serde(default)]
    pub languages: Vec<String>,

    /// Fall back to the main translation of always-available items.
    #[serde(default = "default_true")]
    pub use_always_available: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            use_always_available: default_true(),
        }
    }
}

impl LanguageSettings {
    /// Settings for the given prioritized languages, always-available on.
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            languages: languages.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set the always-available fallback flag.
    pub fn with_always_available(mut self, use_always_available: bool) -> Self {
        self.use_always_available = use_always_available;
        self
    }

    /// Languages with repeated codes removed, first occurrence kept.
    pub fn distinct_languages(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::with_capacity(self.languages.len());
        for code in &self.languages {
            if !out.contains(&code.as_str()) {
                out.push(code);
            }
        }
        out
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Filter criteria.
//!
//! [`Criterion`] is a closed set of filter conditions over the reserved
//! document fields plus generic field matches and boolean combinators. A
//! criterion can be rendered into backend filter syntax or evaluated
//! directly against a [`Document`]; both follow the same semantics.
//!
//! | Criterion | Rendered |
//! |-----------|----------|
//! | `DocumentTypeIdentifier(Content)` | `document_type_id:"content"` |
//! | `IndexedLanguageCode("eng-GB")` | `meta_indexed_language_code_s:"eng-GB"` |
//! | `LanguageCodeIn(["a", "b"])` | `(content_language_codes_ms:"a" OR content_language_codes_ms:"b")` |
//! | `IndexedMainTranslation(true)` | `meta_indexed_is_main_translation_b:true` |
//! | `IndexedAlwaysAvailable(true)` | `meta_indexed_is_main_translation_and_always_available_b:true` |
//! | `TranslationCorePlacement(InMainTranslationCore)` | `meta_indexed_main_translation_b:true` |
//! | `Not(c)` | `(*:* NOT c)` |

use std::fmt;

use serde::{Deserialize, Serialize};
use solrglot_core::fields::{
    CONTENT_ID, CONTENT_LANGUAGE_CODES, DOCUMENT_TYPE, INDEXED_ALWAYS_AVAILABLE,
    INDEXED_IS_MAIN_TRANSLATION, INDEXED_LANGUAGE_CODE, INDEXED_MAIN_TRANSLATION,
    INDEXED_TRANSLATION,
};
use solrglot_core::{Document, DocumentType, Error, FieldType, Result};

const MATCH_ALL: &str = "*:*";
const MATCH_NONE: &str = "(*:* NOT *:*)";

/// Placement condition on the two placement flags.
///
/// The integer codes are stable and used when placements travel as plain
/// numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorePlacement {
    /// Main placement flag is set.
    InMainTranslationCore,
    /// Main placement flag is not set.
    NotInMainTranslationCore,
    /// Regular placement flag is set.
    InRegularTranslationCore,
    /// Regular placement flag is not set.
    NotInRegularTranslationCore,
}

impl CorePlacement {
    /// Stable integer code.
    pub fn code(&self) -> i64 {
        match self {
            CorePlacement::InMainTranslationCore => 0,
            CorePlacement::NotInMainTranslationCore => 1,
            CorePlacement::InRegularTranslationCore => 2,
            CorePlacement::NotInRegularTranslationCore => 3,
        }
    }

    fn field(&self) -> (String, bool) {
        let (name, value) = match self {
            CorePlacement::InMainTranslationCore => (INDEXED_MAIN_TRANSLATION, true),
            CorePlacement::NotInMainTranslationCore => (INDEXED_MAIN_TRANSLATION, false),
            CorePlacement::InRegularTranslationCore => (INDEXED_TRANSLATION, true),
            CorePlacement::NotInRegularTranslationCore => (INDEXED_TRANSLATION, false),
        };
        (FieldType::Boolean.typed_name(name), value)
    }
}

impl TryFrom<i64> for CorePlacement {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            0 => Ok(CorePlacement::InMainTranslationCore),
            1 => Ok(CorePlacement::NotInMainTranslationCore),
            2 => Ok(CorePlacement::InRegularTranslationCore),
            3 => Ok(CorePlacement::NotInRegularTranslationCore),
            other => Err(Error::invalid_argument(format!(
                "invalid translation core placement value '{other}'"
            ))),
        }
    }
}

/// A filter condition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Criterion {
    /// Matches every document.
    #[default]
    MatchAll,
    /// Document type equals.
    DocumentTypeIdentifier(DocumentType),
    /// Language of the translation document equals.
    IndexedLanguageCode(String),
    /// The owning item has a translation in any of the codes.
    LanguageCodeIn(Vec<String>),
    /// Main translation flag equals.
    IndexedMainTranslation(bool),
    /// Always-available main translation flag equals.
    IndexedAlwaysAvailable(bool),
    /// Placement flag condition.
    TranslationCorePlacement(CorePlacement),
    /// Owning item id is any of the ids.
    ContentId(Vec<String>),
    /// Generic field value IN.
    Field {
        /// Untyped field name.
        name: String,
        /// Field type, decides the stored name.
        field_type: FieldType,
        /// Accepted values.
        values: Vec<String>,
    },
    /// All criteria match.
    And(Vec<Criterion>),
    /// Any criterion matches.
    Or(Vec<Criterion>),
    /// Criterion does not match.
    Not(Box<Criterion>),
}

impl Criterion {
    /// Conjunction of `criteria`.
    pub fn and(criteria: impl IntoIterator<Item = Criterion>) -> Self {
        Criterion::And(criteria.into_iter().collect())
    }

    /// Disjunction of `criteria`.
    pub fn or(criteria: impl IntoIterator<Item = Criterion>) -> Self {
        Criterion::Or(criteria.into_iter().collect())
    }

    /// Negation of `criterion`.
    pub fn not(criterion: Criterion) -> Self {
        Criterion::Not(Box::new(criterion))
    }

    /// Item has a translation in any of `codes`.
    pub fn language_code_in<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Criterion::LanguageCodeIn(codes.into_iter().map(Into::into).collect())
    }

    /// Placement condition from its integer code.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for codes outside `0..=3`.
    pub fn translation_core_placement(code: i64) -> Result<Self> {
        Ok(Criterion::TranslationCorePlacement(CorePlacement::try_from(
            code,
        )?))
    }

    /// Render into backend filter syntax.
    pub fn render(&self) -> String {
        match self {
            Criterion::MatchAll => MATCH_ALL.to_string(),
            Criterion::DocumentTypeIdentifier(document_type) => term(
                &FieldType::Identifier.typed_name(DOCUMENT_TYPE),
                document_type.identifier(),
            ),
            Criterion::IndexedLanguageCode(code) => term(
                &FieldType::String.typed_name(INDEXED_LANGUAGE_CODE),
                code,
            ),
            Criterion::LanguageCodeIn(codes) => {
                if codes.is_empty() {
                    return MATCH_NONE.to_string();
                }
                let name = FieldType::MultipleString.typed_name(CONTENT_LANGUAGE_CODES);
                let terms: Vec<String> = codes.iter().map(|c| term(&name, c)).collect();
                format!("({})", terms.join(" OR "))
            }
            Criterion::IndexedMainTranslation(value) => format!(
                "{}:{value}",
                FieldType::Boolean.typed_name(INDEXED_IS_MAIN_TRANSLATION)
            ),
            Criterion::IndexedAlwaysAvailable(value) => format!(
                "{}:{value}",
                FieldType::Boolean.typed_name(INDEXED_ALWAYS_AVAILABLE)
            ),
            Criterion::TranslationCorePlacement(placement) => {
                let (name, value) = placement.field();
                format!("{name}:{value}")
            }
            Criterion::ContentId(ids) => {
                render_in(&FieldType::Identifier.typed_name(CONTENT_ID), ids, true)
            }
            Criterion::Field {
                name,
                field_type,
                values,
            } => {
                let quoted = !matches!(field_type, FieldType::Boolean | FieldType::Integer);
                render_in(&field_type.typed_name(name), values, quoted)
            }
            Criterion::And(criteria) => {
                if criteria.is_empty() {
                    return MATCH_ALL.to_string();
                }
                join(criteria, " AND ")
            }
            Criterion::Or(criteria) => {
                if criteria.is_empty() {
                    return MATCH_NONE.to_string();
                }
                join(criteria, " OR ")
            }
            Criterion::Not(inner) => format!("({MATCH_ALL} NOT {})", inner.render()),
        }
    }

    /// Evaluate against a single stored document.
    ///
    /// Nested children are separate documents and are not consulted.
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Criterion::MatchAll => true,
            Criterion::DocumentTypeIdentifier(document_type) => document.has_value(
                &FieldType::Identifier.typed_name(DOCUMENT_TYPE),
                document_type.identifier(),
            ),
            Criterion::IndexedLanguageCode(code) => document.has_value(
                &FieldType::String.typed_name(INDEXED_LANGUAGE_CODE),
                code,
            ),
            Criterion::LanguageCodeIn(codes) => {
                let name = FieldType::MultipleString.typed_name(CONTENT_LANGUAGE_CODES);
                codes.iter().any(|c| document.has_value(&name, c))
            }
            Criterion::IndexedMainTranslation(value) => document.has_value(
                &FieldType::Boolean.typed_name(INDEXED_IS_MAIN_TRANSLATION),
                bool_str(*value),
            ),
            Criterion::IndexedAlwaysAvailable(value) => document.has_value(
                &FieldType::Boolean.typed_name(INDEXED_ALWAYS_AVAILABLE),
                bool_str(*value),
            ),
            Criterion::TranslationCorePlacement(placement) => {
                let (name, value) = placement.field();
                document.has_value(&name, bool_str(value))
            }
            Criterion::ContentId(ids) => {
                let name = FieldType::Identifier.typed_name(CONTENT_ID);
                ids.iter().any(|id| document.has_value(&name, id))
            }
            Criterion::Field {
                name,
                field_type,
                values,
            } => {
                let name = field_type.typed_name(name);
                values.iter().any(|v| document.has_value(&name, v))
            }
            Criterion::And(criteria) => criteria.iter().all(|c| c.matches(document)),
            Criterion::Or(criteria) => criteria.iter().any(|c| c.matches(document)),
            Criterion::Not(inner) => !inner.matches(document),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn term(name: &str, value: &str) -> String {
    format!("{name}:\"{}\"", escape(value))
}

fn render_in(name: &str, values: &[String], quoted: bool) -> String {
    let terms: Vec<String> = values
        .iter()
        .map(|v| {
            if quoted {
                term(name, v)
            } else {
                format!("{name}:{v}")
            }
        })
        .collect();
    match terms.len() {
        0 => MATCH_NONE.to_string(),
        1 => terms.concat(),
        _ => format!("({})", terms.join(" OR ")),
    }
}

fn join(criteria: &[Criterion], separator: &str) -> String {
    let parts: Vec<String> = criteria.iter().map(Criterion::render).collect();
    format!("({})", parts.join(separator))
}

// ============================================================================
// Tests
// ============================================================================

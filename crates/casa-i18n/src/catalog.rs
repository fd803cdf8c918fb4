#![forbid(unsafe_code)]

//! Flattened key catalog over translation bundles.
//!
//! Bundles are nested JSON documents. The catalog flattens each one into
//! dotted key paths (`"faq.faqs.2.answer"`), which gives a uniform way to
//! fill missing leaves from the default language and to check that every
//! language provides the same shape.
//!
//! # Invariants
//!
//! 1. **Fallback chain terminates**: every lookup walks the chain exactly
//!    once, returning `None` if no language provides the key.
//!
//! 2. **Merge never drops data**: [`merge_fallback`] keeps every leaf of
//!    the overlay; only keys absent from the overlay are taken from the
//!    base. Lists merge index by index, so a shorter overlay list is
//!    completed from the base.
//!
//! 3. **Merge and coverage agree**: a key counts as covered by
//!    [`StringCatalog::coverage_against`] exactly when the merged document
//!    holds a leaf for it.
//!
//! 4. **Keys are deterministic**: [`StringCatalog::all_keys`] is sorted
//!    and deduplicated.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key | Key not in any language | Returns `None` |
//! | Missing language | Bundle not loaded | Falls through chain |
//! | Shorter overlay list | Fewer entries than the base | Tail taken from the base |
//! | Longer overlay list | Entries the base lacks | Reported by [`StringCatalog::extra_keys`] |
//! | Empty catalog | No bundles loaded | All lookups return `None` |

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde_json::{Map, Value};

use crate::language::Language;

/// Errors from i18n operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// A language code outside the supported set.
    UnknownLanguage(String),
    /// A bundle document could not be parsed or typed.
    ParseError { language: Language, message: String },
    /// A bundle lacks keys the default bundle provides.
    ShapeMismatch {
        language: Language,
        missing: Vec<String>,
    },
    /// A bundle carries keys the default bundle does not define.
    UnexpectedKeys {
        language: Language,
        extra: Vec<String>,
    },
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLanguage(code) => write!(f, "unknown language: {code}"),
            Self::ParseError { language, message } => {
                write!(f, "parse error in '{language}' bundle: {message}")
            }
            Self::ShapeMismatch { language, missing } => write!(
                f,
                "'{language}' bundle is missing {} key(s), first: {}",
                missing.len(),
                missing.first().map(String::as_str).unwrap_or("-")
            ),
            Self::UnexpectedKeys { language, extra } => write!(
                f,
                "'{language}' bundle has {} key(s) the default lacks, first: {}",
                extra.len(),
                extra.first().map(String::as_str).unwrap_or("-")
            ),
        }
    }
}

impl std::error::Error for I18nError {}

/// Flattened leaf strings for a single language.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    strings: BTreeMap<String, String>,
}

impl LocaleStrings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a JSON document into dotted key paths.
    ///
    /// Strings are stored verbatim, numbers and booleans in their JSON
    /// text form. `null` leaves are skipped.
    #[must_use]
    pub fn from_json(document: &Value) -> Self {
        let mut strings = BTreeMap::new();
        flatten_into(document, &mut String::new(), &mut strings);
        Self { strings }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }
}

fn flatten_into(value: &Value, prefix: &mut String, out: &mut BTreeMap<String, String>) {
    let push_segment = |prefix: &mut String, segment: &str| {
        let before = prefix.len();
        if !prefix.is_empty() {
            prefix.push('.');
        }
        prefix.push_str(segment);
        before
    };

    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let before = push_segment(prefix, key);
                flatten_into(child, prefix, out);
                prefix.truncate(before);
            }
        }
        Value::Array(items) => {
            for (idx, child) in items.iter().enumerate() {
                let before = push_segment(prefix, &idx.to_string());
                flatten_into(child, prefix, out);
                prefix.truncate(before);
            }
        }
        Value::String(s) => {
            out.insert(prefix.clone(), s.clone());
        }
        Value::Number(n) => {
            out.insert(prefix.clone(), n.to_string());
        }
        Value::Bool(b) => {
            out.insert(prefix.clone(), b.to_string());
        }
        Value::Null => {}
    }
}

/// Deep-merge `overlay` over `base`, returning the merged document and the
/// number of leaves taken from `base`.
///
/// Objects merge key by key and arrays index by index. `null` in the
/// overlay counts as missing.
#[must_use]
pub fn merge_fallback(base: &Value, overlay: &Value) -> (Value, usize) {
    let mut filled = 0;
    let merged = merge_value(base, overlay, &mut filled);
    (merged, filled)
}

fn merge_value(base: &Value, overlay: &Value, filled: &mut usize) -> Value {
    match (base, overlay) {
        (Value::Object(b), Value::Object(o)) => {
            let mut out = Map::with_capacity(b.len().max(o.len()));
            for (key, base_child) in b {
                match o.get(key) {
                    Some(Value::Null) | None => {
                        *filled += count_leaves(base_child);
                        out.insert(key.clone(), base_child.clone());
                    }
                    Some(over_child) => {
                        out.insert(key.clone(), merge_value(base_child, over_child, filled));
                    }
                }
            }
            for (key, over_child) in o {
                if !b.contains_key(key) {
                    out.insert(key.clone(), over_child.clone());
                }
            }
            Value::Object(out)
        }
        (Value::Array(b), Value::Array(o)) => Value::Array(
            (0..b.len().max(o.len()))
                .filter_map(|idx| match (b.get(idx), o.get(idx)) {
                    (Some(bc), Some(Value::Null) | None) => {
                        *filled += count_leaves(bc);
                        Some(bc.clone())
                    }
                    (Some(bc), Some(oc)) => Some(merge_value(bc, oc, filled)),
                    (None, oc) => oc.cloned(),
                })
                .collect(),
        ),
        (_, over) => over.clone(),
    }
}

fn count_leaves(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.values().map(count_leaves).sum(),
        Value::Array(items) => items.iter().map(count_leaves).sum(),
        Value::Null => 0,
        _ => 1,
    }
}

/// Catalog of flattened bundles with a language fallback chain.
///
/// # Example
///
/// ```
/// use casa_i18n::{Language, LocaleStrings, StringCatalog};
///
/// let mut catalog = StringCatalog::new();
/// let mut he = LocaleStrings::new();
/// he.insert("nav.menu", "תפריט");
/// he.insert("nav.about", "אודות");
/// let mut en = LocaleStrings::new();
/// en.insert("nav.menu", "Menu");
/// catalog.add_locale(Language::He, he);
/// catalog.add_locale(Language::En, en);
/// catalog.set_fallback_chain(vec![Language::He]);
///
/// assert_eq!(catalog.get(Language::En, "nav.menu"), Some("Menu"));
/// assert_eq!(catalog.get(Language::En, "nav.about"), Some("אודות"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: HashMap<Language, LocaleStrings>,
    fallback_chain: Vec<Language>,
}

impl StringCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_locale(&mut self, language: Language, strings: LocaleStrings) {
        self.locales.insert(language, strings);
    }

    /// Set the chain tried in order when a key is missing.
    pub fn set_fallback_chain(&mut self, chain: Vec<Language>) {
        self.fallback_chain = chain;
    }

    /// Look up a flattened key, walking the fallback chain once.
    #[must_use]
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        if let Some(found) = self.get_own(language, key) {
            return Some(found);
        }
        self.fallback_chain
            .iter()
            .filter(|&&fallback| fallback != language)
            .find_map(|&fallback| self.get_own(fallback, key))
    }

    /// Look up a key in one language only.
    #[must_use]
    pub fn get_own(&self, language: Language, key: &str) -> Option<&str> {
        self.locales.get(&language).and_then(|ls| ls.get(key))
    }

    /// Registered languages, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<Language> {
        let mut langs: Vec<Language> = self.locales.keys().copied().collect();
        langs.sort_unstable();
        langs
    }

    /// All unique keys across every language, sorted.
    #[must_use]
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .locales
            .values()
            .flat_map(|ls| ls.keys().map(String::from))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Keys from `reference_keys` that `language` cannot resolve, even
    /// through the fallback chain. Sorted.
    #[must_use]
    pub fn missing_keys(&self, language: Language, reference_keys: &[&str]) -> Vec<String> {
        let mut missing: Vec<String> = reference_keys
            .iter()
            .filter(|key| self.get(language, key).is_none())
            .map(|key| (*key).to_string())
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Keys `language` defines that `reference` does not. Sorted.
    #[must_use]
    pub fn extra_keys(&self, language: Language, reference: Language) -> Vec<String> {
        let Some(own) = self.locales.get(&language) else {
            return Vec::new();
        };
        own.keys()
            .filter(|key| self.get_own(reference, key).is_none())
            .map(String::from)
            .collect()
    }

    /// Coverage of every language against the union of all keys.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let all = self.all_keys();
        let ref_keys: Vec<&str> = all.iter().map(String::as_str).collect();
        self.coverage_for(&ref_keys)
    }

    /// Coverage of every language against the keys of `reference`, the
    /// language whose document defines the shape.
    #[must_use]
    pub fn coverage_against(&self, reference: Language) -> CoverageReport {
        let ref_keys: Vec<&str> = self
            .locales
            .get(&reference)
            .map(|ls| ls.keys().collect())
            .unwrap_or_default();
        self.coverage_for(&ref_keys)
    }

    fn coverage_for(&self, ref_keys: &[&str]) -> CoverageReport {
        let total = ref_keys.len();

        let locales = self
            .locales()
            .into_iter()
            .map(|language| {
                let missing = self.missing_keys(language, ref_keys);
                let inherited = ref_keys
                    .iter()
                    .filter(|key| {
                        self.get_own(language, key).is_none() && self.get(language, key).is_some()
                    })
                    .count();
                let present = total.saturating_sub(missing.len());
                let coverage_percent = if total == 0 {
                    100.0
                } else {
                    (present as f32 / total as f32) * 100.0
                };
                LocaleCoverage {
                    language,
                    present,
                    inherited,
                    missing,
                    coverage_percent,
                }
            })
            .collect();

        CoverageReport {
            total_keys: total,
            locales,
        }
    }
}

/// Coverage report for a catalog.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    /// Total number of unique keys across all languages.
    pub total_keys: usize,
    /// Per-language coverage, sorted by language.
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    #[must_use]
    pub fn for_language(&self, language: Language) -> Option<&LocaleCoverage> {
        self.locales.iter().find(|lc| lc.language == language)
    }

    /// Whether every language resolves every key.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(|lc| lc.missing.is_empty())
    }
}

/// Per-language coverage statistics.
#[derive(Debug, Clone)]
pub struct LocaleCoverage {
    pub language: Language,
    /// Reference keys resolvable (own or via fallback).
    pub present: usize,
    /// Keys resolvable only through the fallback chain.
    pub inherited: usize,
    /// Keys not resolvable at all.
    pub missing: Vec<String>,
    /// Coverage as a percentage (0.0–100.0).
    pub coverage_percent: f32,
}

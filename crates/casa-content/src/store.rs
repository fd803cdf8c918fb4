#![forbid(unsafe_code)]

//! Process-wide content store.
//!
//! # Loading
//!
//! 1. Each locale document is parsed to a JSON value.
//! 2. The flattened key catalog checks every language against the keys of
//!    the default (Hebrew) document. A key only another language defines,
//!    such as an extra list entry, is rejected under that language's name.
//! 3. Non-default documents are merged over the default one, so a missing
//!    leaf or a missing list entry takes the default language's text.
//! 4. The merged values are typed as [`TranslationBundle`]s.
//!
//! The embedded store is built once, on first access, and is immutable.

use std::collections::HashMap;
use std::sync::OnceLock;

use casa_i18n::{
    CoverageReport, I18nError, Language, LocaleStrings, StringCatalog, TranslationBundle,
    catalog::merge_fallback,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ContentError;
use crate::menu::MenuCatalog;
use crate::site::SiteConfig;

const HE_JSON: &str = include_str!("../data/locales/he.json");
const EN_JSON: &str = include_str!("../data/locales/en.json");
const PT_JSON: &str = include_str!("../data/locales/pt.json");
const MENU_JSON: &str = include_str!("../data/menu.json");
const SITE_JSON: &str = include_str!("../data/site.json");

/// Raw documents a store is built from.
#[derive(Debug, Clone, Copy)]
pub struct Documents<'a> {
    pub locales: &'a [(Language, &'a str)],
    pub menu: &'a str,
    pub site: &'a str,
}

impl Documents<'static> {
    /// The documents compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            locales: &[
                (Language::He, HE_JSON),
                (Language::En, EN_JSON),
                (Language::Pt, PT_JSON),
            ],
            menu: MENU_JSON,
            site: SITE_JSON,
        }
    }
}

#[derive(Debug)]
pub struct ContentStore {
    bundles: HashMap<Language, TranslationBundle>,
    coverage: CoverageReport,
    menu: MenuCatalog,
    site: SiteConfig,
}

static STORE: OnceLock<Result<ContentStore, ContentError>> = OnceLock::new();

impl ContentStore {
    /// Build from the embedded documents.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_documents(&Documents::embedded())
    }

    pub fn from_documents(docs: &Documents<'_>) -> Result<Self, ContentError> {
        let default_lang = Language::DEFAULT;
        let mut raw: HashMap<Language, Value> = HashMap::new();
        for &(language, text) in docs.locales {
            let value: Value = serde_json::from_str(text).map_err(|e| {
                ContentError::Bundle(I18nError::ParseError {
                    language,
                    message: e.to_string(),
                })
            })?;
            raw.insert(language, value);
        }
        let base = raw
            .get(&default_lang)
            .cloned()
            .ok_or_else(|| ContentError::NotFound(default_lang.code().to_owned()))?;

        let mut catalog = StringCatalog::new();
        catalog.set_fallback_chain(vec![default_lang]);
        for (&language, value) in &raw {
            catalog.add_locale(language, LocaleStrings::from_json(value));
        }
        let mut languages: Vec<Language> = raw.keys().copied().collect();
        languages.sort_unstable();
        for language in languages {
            let extra = catalog.extra_keys(language, default_lang);
            if !extra.is_empty() {
                return Err(ContentError::Bundle(I18nError::UnexpectedKeys { language, extra }));
            }
        }
        let coverage = catalog.coverage_against(default_lang);
        if let Some(gap) = coverage.locales.iter().find(|lc| !lc.missing.is_empty()) {
            return Err(ContentError::Bundle(I18nError::ShapeMismatch {
                language: gap.language,
                missing: gap.missing.clone(),
            }));
        }

        let mut bundles = HashMap::with_capacity(raw.len());
        for (language, value) in raw {
            let merged = if language == default_lang {
                value
            } else {
                let (merged, filled) = merge_fallback(&base, &value);
                if filled > 0 {
                    debug!(language = %language, filled, "bundle leaves filled from default");
                }
                merged
            };
            let bundle: TranslationBundle = serde_json::from_value(merged).map_err(|e| {
                ContentError::Bundle(I18nError::ParseError {
                    language,
                    message: e.to_string(),
                })
            })?;
            bundles.insert(language, bundle);
        }

        let menu = MenuCatalog::from_json(docs.menu)?;
        let site = SiteConfig::from_json(docs.site)?;
        info!(
            languages = bundles.len(),
            keys = coverage.total_keys,
            categories = menu.categories().len(),
            "content loaded"
        );
        Ok(Self {
            bundles,
            coverage,
            menu,
            site,
        })
    }

    /// The embedded store, loading it on first call.
    pub fn try_global() -> Result<&'static Self, ContentError> {
        STORE.get_or_init(Self::load).as_ref().map_err(Clone::clone)
    }

    /// The embedded store.
    ///
    /// # Panics
    ///
    /// If the embedded documents fail to load. They are validated by this
    /// crate's tests, so this only fires on a broken build.
    #[must_use]
    pub fn global() -> &'static Self {
        match Self::try_global() {
            Ok(store) => store,
            Err(err) => panic!("embedded content failed to load: {err}"),
        }
    }

    pub fn bundle(&self, language: Language) -> Result<&TranslationBundle, ContentError> {
        self.bundles
            .get(&language)
            .ok_or_else(|| ContentError::NotFound(language.code().to_owned()))
    }

    /// Lookup by language code; unknown codes fail with `NotFound`.
    pub fn bundle_by_code(&self, code: &str) -> Result<&TranslationBundle, ContentError> {
        let language: Language = code.parse()?;
        self.bundle(language)
    }

    #[must_use]
    pub fn coverage(&self) -> &CoverageReport {
        &self.coverage
    }

    #[must_use]
    pub fn menu_catalog(&self) -> &MenuCatalog {
        &self.menu
    }

    #[must_use]
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }
}

#![forbid(unsafe_code)]

//! Everything a view function reads.

use std::sync::LazyLock;

use casa_content::{ContentStore, MenuCatalog, SiteConfig};
use casa_i18n::{Language, TextDirection, TranslationBundle};
use tracing::warn;

static EMPTY_BUNDLE: LazyLock<TranslationBundle> = LazyLock::new(TranslationBundle::default);

/// Interactive state that changes what the markup looks like.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub nav_scrolled: bool,
    pub mobile_menu_open: bool,
    /// Id of the expanded FAQ item, if any.
    pub open_faq: Option<String>,
    /// Current counter values, in stats-block order.
    pub stat_values: Vec<u64>,
    /// Selected menu category id.
    pub selected_category: String,
}

/// Read-only inputs of one render.
#[derive(Debug, Clone, Copy)]
pub struct ViewCtx<'a> {
    pub lang: Language,
    pub t: &'a TranslationBundle,
    pub site: &'a SiteConfig,
    pub menu: &'a MenuCatalog,
    pub ui: &'a UiState,
}

impl<'a> ViewCtx<'a> {
    /// Context over the store's bundle for `lang`.
    ///
    /// A language without a bundle falls back to the default language,
    /// and failing that to an empty bundle (every section then renders
    /// nothing).
    #[must_use]
    pub fn new(store: &'a ContentStore, lang: Language, ui: &'a UiState) -> Self {
        Self {
            lang,
            t: bundle_or_empty(store, lang),
            site: store.site(),
            menu: store.menu_catalog(),
            ui,
        }
    }

    #[must_use]
    pub fn dir(&self) -> TextDirection {
        self.lang.direction()
    }

    #[must_use]
    pub fn is_rtl(&self) -> bool {
        self.lang.is_rtl()
    }
}

pub(crate) fn bundle_or_empty(store: &ContentStore, lang: Language) -> &TranslationBundle {
    store
        .bundle(lang)
        .or_else(|_| store.bundle(Language::DEFAULT))
        .unwrap_or_else(|err| {
            warn!(%err, language = %lang, "no bundle available");
            &*EMPTY_BUNDLE
        })
}

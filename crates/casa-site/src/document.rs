#![forbid(unsafe_code)]

//! Document metadata and standalone HTML export.

use casa_content::ContentStore;
use casa_i18n::{Language, TranslationBundle};
use casa_render::{Document, el, render_document};
use casa_runtime::Effect;
use tracing::debug;

use crate::context::{UiState, ViewCtx, bundle_or_empty};
use crate::pages;
use crate::route::Route;

/// Title, description, `lang` and `dir` for the document root.
///
/// `lang` is `he` for Hebrew and `en` for everything else.
#[must_use]
pub fn metadata_effect(lang: Language, t: &TranslationBundle) -> Effect {
    Effect::Document {
        title: t.site_title.clone(),
        description: t.site_description.clone(),
        lang: lang.document_lang().to_owned(),
        dir: lang.direction().as_str().to_owned(),
    }
}

/// UI state for a page nobody has interacted with, counters at rest on
/// their targets.
#[must_use]
pub fn resting_ui(store: &ContentStore) -> UiState {
    UiState {
        stat_values: store.site().about.stats.iter().map(|s| s.value).collect(),
        selected_category: store.menu_catalog().first().id.clone(),
        ..UiState::default()
    }
}

/// Output file name for an exported page, e.g. `menu.en.html`.
#[must_use]
pub fn export_file_name(route: Route, lang: Language) -> String {
    let stem = match route {
        Route::Home => "index",
        Route::Menu => "menu",
    };
    format!("{stem}.{}.html", lang.code())
}

/// Render `route` in `lang` as a complete HTML document.
///
/// `base_path` replaces the configured deployment prefix when given.
#[must_use]
pub fn export_page(
    store: &ContentStore,
    route: Route,
    lang: Language,
    base_path: Option<&str>,
) -> String {
    let mut site = store.site().clone();
    if let Some(base) = base_path {
        site.base_path = base.to_owned();
    }
    let ui = resting_ui(store);
    let t = bundle_or_empty(store, lang);
    let ctx = ViewCtx {
        lang,
        t,
        site: &site,
        menu: store.menu_catalog(),
        ui: &ui,
    };
    let icon = el("link")
        .attr("rel", "icon")
        .attr("href", site.asset_path(&site.hero.logo));
    let html = render_document(&Document {
        lang: lang.document_lang(),
        dir: lang.direction().as_str(),
        title: &t.site_title,
        description: &t.site_description,
        head: vec![icon.into()],
        body: pages::render(route, &ctx),
    });
    debug!(route = %route, language = %lang, bytes = html.len(), "page exported");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names() {
        assert_eq!(export_file_name(Route::Home, Language::He), "index.he.html");
        assert_eq!(export_file_name(Route::Menu, Language::Pt), "menu.pt.html");
    }

    #[test]
    fn metadata_for_hebrew_and_portuguese() {
        let t = TranslationBundle {
            site_title: "Casa".into(),
            ..TranslationBundle::default()
        };
        let Effect::Document { lang, dir, title, .. } = metadata_effect(Language::He, &t) else {
            panic!("expected a document effect");
        };
        assert_eq!((lang.as_str(), dir.as_str(), title.as_str()), ("he", "rtl", "Casa"));
        let Effect::Document { lang, dir, .. } = metadata_effect(Language::Pt, &t) else {
            panic!("expected a document effect");
        };
        assert_eq!((lang.as_str(), dir.as_str()), ("en", "ltr"));
    }
}

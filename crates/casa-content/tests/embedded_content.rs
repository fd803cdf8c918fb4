//! Checks over the documents compiled into the crate.

use std::collections::HashSet;

use casa_content::{CategoryBody, ContentError, ContentStore, Icon, IconContext, PriceLabel};
use casa_i18n::Language;
use pretty_assertions::assert_eq;

fn store() -> &'static ContentStore {
    ContentStore::global()
}

#[test]
fn embedded_content_loads() {
    assert!(ContentStore::load().is_ok());
    assert!(ContentStore::try_global().is_ok());
}

#[test]
fn every_bundle_has_full_coverage() {
    let report = store().coverage();
    assert!(report.is_complete());
    for language in Language::ALL {
        let cov = report.for_language(language).expect("language loaded");
        assert_eq!(cov.coverage_percent, 100.0, "{language}");
        assert_eq!(cov.inherited, 0, "{language} should not inherit leaves");
    }
}

#[test]
fn every_language_has_a_bundle() {
    for language in Language::ALL {
        let bundle = store().bundle(language).unwrap();
        assert!(!bundle.site_title.is_empty());
        assert_eq!(bundle.about.portfolio_alts.len(), 6);
    }
}

#[test]
fn bundle_by_code_accepts_known_codes_only() {
    assert!(store().bundle_by_code("en").is_ok());
    assert!(store().bundle_by_code("pt").is_ok());
    assert_eq!(
        store().bundle_by_code("fr").unwrap_err(),
        ContentError::NotFound("fr".into())
    );
}

#[test]
fn default_title_is_hebrew() {
    let he = store().bundle(Language::He).unwrap();
    assert_eq!(he.site_title, "קאזה דו ברזיל | מסעדת בשרים אילת");
}

#[test]
fn category_ids_are_unique_and_start_with_churrascaria() {
    let menu = store().menu_catalog();
    let ids: Vec<&str> = menu.ids().collect();
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
    assert_eq!(
        ids,
        vec!["churrascaria", "main", "kids", "meat", "desserts", "business"]
    );
    assert_eq!(menu.first().id, "churrascaria");
}

#[test]
fn churrascaria_is_a_two_item_comparison() {
    let first = store().menu_catalog().first();
    match &first.body {
        CategoryBody::SubSections(sections) => {
            assert_eq!(sections.len(), 1);
            assert!(sections[0].is_comparison());
            assert_eq!(
                sections[0].cta_text(Language::En),
                Some("As much as you want!")
            );
        }
        CategoryBody::Items(_) => panic!("churrascaria should have sub-sections"),
    }
}

#[test]
fn main_courses_list_every_dish() {
    let main = store().menu_catalog().select("main");
    assert_eq!(main.item_count(), 21);
    assert_eq!(main.name(Language::En), "Main Courses");
    assert_eq!(main.name(Language::He), "עיקריות");
}

#[test]
fn desserts_resolve_in_english() {
    let desserts = store().menu_catalog().select("desserts");
    let CategoryBody::Items(items) = &desserts.body else {
        panic!("desserts are a flat list");
    };
    let names: Vec<&str> = items.iter().map(|i| i.name(Language::En)).collect();
    assert_eq!(names, vec!["Surprise dessert", "Crème brûlée"]);
}

#[test]
fn sentinel_prices_are_labelled() {
    let menu = store().menu_catalog();
    let price_of = |id: &str| match &menu.select(id).body {
        CategoryBody::Items(items) => items[0].price_label(),
        CategoryBody::SubSections(_) => panic!("flat list expected"),
    };
    assert_eq!(price_of("kids"), PriceLabel::PerItem);
    assert_eq!(price_of("meat"), PriceLabel::PerWeight);
    assert_eq!(price_of("desserts"), PriceLabel::Amount("₪52"));
}

#[test]
fn service_icons_are_known() {
    for language in Language::ALL {
        for service in &store().bundle(language).unwrap().menu.services {
            assert!(Icon::from_name(&service.icon_name).is_some());
            assert_ne!(Icon::lookup(&service.icon_name, IconContext::Service), Icon::Star);
        }
    }
}

#[test]
fn site_links_pass_through() {
    let site = store().site();
    assert!(site.booking_url.starts_with("https://tabitisrael.co.il/"));
    assert_eq!(site.tel_uri(), "tel:08-6323032");
    assert_eq!(site.mailto_uri(), "mailto:info@casadobrasil.co.il");
    assert_eq!(site.about.portfolio_images.len(), 6);
    let values: Vec<u64> = site.about.stats.iter().map(|s| s.value).collect();
    assert_eq!(values, vec![2001, 25, 5000, 2]);
}

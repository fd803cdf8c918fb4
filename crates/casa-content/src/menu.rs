#![forbid(unsafe_code)]

//! The restaurant menu catalog.
//!
//! Hebrew is the primary text of every entry; English overrides are
//! optional and resolved per field through [`casa_i18n::resolve_field`].
//! A category carries either a flat item list or named sub-sections,
//! never both.
//!
//! # Invariants
//!
//! 1. The catalog is non-empty and category ids are unique
//!    (checked by [`MenuCatalog::from_json`]).
//! 2. [`MenuCatalog::select`] is total: unknown ids yield the first
//!    category.

use std::collections::HashSet;

use casa_i18n::{Language, resolve_field, resolve_optional};
use serde::Deserialize;

use crate::error::ContentError;

/// Price sentinel meaning "priced per dish".
pub const PRICE_PER_ITEM: &str = "מחיר לפי מנה";
/// Price sentinel meaning "priced by weight".
pub const PRICE_PER_WEIGHT: &str = "מחיר לפי משקל";

/// Ordered, non-empty list of menu categories.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCatalog {
    categories: Vec<MenuCategory>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuCategory {
    pub id: String,
    pub name_he: String,
    pub name_en: String,
    /// Public asset path, before base-path prefixing.
    pub image: String,
    pub body: CategoryBody,
}

/// What a category lists.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryBody {
    Items(Vec<MenuItem>),
    SubSections(Vec<MenuSubSection>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLayout {
    #[default]
    List,
    Grid,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSubSection {
    pub title: String,
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub cta_text: Option<String>,
    #[serde(default)]
    pub cta_text_en: Option<String>,
    pub items: Vec<MenuItem>,
    #[serde(default)]
    pub layout: SectionLayout,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    pub price: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub subtitle_en: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub details_en: Option<Vec<String>>,
}

/// How a price string should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceLabel<'a> {
    /// The per-dish sentinel; shown with a translated label.
    PerItem,
    /// The by-weight sentinel; shown with a translated label.
    PerWeight,
    /// A literal amount such as `₪259`, shown verbatim.
    Amount(&'a str),
}

#[derive(Deserialize)]
struct RawCatalog {
    categories: Vec<RawCategory>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCategory {
    id: String,
    name_he: String,
    name_en: String,
    image: String,
    #[serde(default)]
    items: Option<Vec<MenuItem>>,
    #[serde(default)]
    sub_sections: Option<Vec<MenuSubSection>>,
}

impl TryFrom<RawCategory> for MenuCategory {
    type Error = ContentError;

    fn try_from(raw: RawCategory) -> Result<Self, Self::Error> {
        let body = match (raw.items, raw.sub_sections) {
            (Some(_), Some(_)) => return Err(ContentError::AmbiguousCategory(raw.id)),
            (None, Some(sections)) => CategoryBody::SubSections(sections),
            (items, None) => CategoryBody::Items(items.unwrap_or_default()),
        };
        Ok(Self {
            id: raw.id,
            name_he: raw.name_he,
            name_en: raw.name_en,
            image: raw.image,
            body,
        })
    }
}

impl MenuCatalog {
    /// Build a catalog, rejecting empty lists and duplicate ids.
    pub fn new(categories: Vec<MenuCategory>) -> Result<Self, ContentError> {
        if categories.is_empty() {
            return Err(ContentError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.id.as_str()) {
                return Err(ContentError::DuplicateCategory(category.id.clone()));
            }
        }
        Ok(Self { categories })
    }

    /// Parse the `{ "categories": [...] }` document.
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let raw: RawCatalog = serde_json::from_str(text).map_err(|e| ContentError::Parse {
            document: "menu.json",
            message: e.to_string(),
        })?;
        let categories = raw
            .categories
            .into_iter()
            .map(MenuCategory::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(categories)
    }

    #[must_use]
    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// The default selection.
    #[must_use]
    pub fn first(&self) -> &MenuCategory {
        &self.categories[0]
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&MenuCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// The category with `id`, or the first one when the id is unknown.
    #[must_use]
    pub fn select(&self, id: &str) -> &MenuCategory {
        self.find(id).unwrap_or_else(|| self.first())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.id.as_str())
    }
}

impl MenuCategory {
    #[must_use]
    pub fn name(&self, lang: Language) -> &str {
        resolve_field(
            self.name_he.as_str(),
            Some(self.name_en.as_str()),
            lang,
            Language::DEFAULT,
        )
    }

    /// Total item count across sub-sections.
    #[must_use]
    pub fn item_count(&self) -> usize {
        match &self.body {
            CategoryBody::Items(items) => items.len(),
            CategoryBody::SubSections(sections) => sections.iter().map(|s| s.items.len()).sum(),
        }
    }
}

impl MenuSubSection {
    #[must_use]
    pub fn title(&self, lang: Language) -> &str {
        resolve_field(
            self.title.as_str(),
            self.title_en.as_deref(),
            lang,
            Language::DEFAULT,
        )
    }

    #[must_use]
    pub fn description(&self, lang: Language) -> Option<&str> {
        resolve_optional(
            self.description.as_deref(),
            self.description_en.as_deref(),
            lang,
            Language::DEFAULT,
        )
    }

    #[must_use]
    pub fn cta_text(&self, lang: Language) -> Option<&str> {
        resolve_optional(
            self.cta_text.as_deref(),
            self.cta_text_en.as_deref(),
            lang,
            Language::DEFAULT,
        )
    }

    /// Side-by-side "A or B" presentation: a grid of exactly two items.
    #[must_use]
    pub fn is_comparison(&self) -> bool {
        self.layout == SectionLayout::Grid && self.items.len() == 2
    }
}

impl MenuItem {
    #[must_use]
    pub fn name(&self, lang: Language) -> &str {
        resolve_field(
            self.name.as_str(),
            self.name_en.as_deref(),
            lang,
            Language::DEFAULT,
        )
    }

    #[must_use]
    pub fn description(&self, lang: Language) -> Option<&str> {
        resolve_optional(
            self.description.as_deref(),
            self.description_en.as_deref(),
            lang,
            Language::DEFAULT,
        )
    }

    #[must_use]
    pub fn subtitle(&self, lang: Language) -> Option<&str> {
        resolve_optional(
            self.subtitle.as_deref(),
            self.subtitle_en.as_deref(),
            lang,
            Language::DEFAULT,
        )
    }

    #[must_use]
    pub fn details(&self, lang: Language) -> &[String] {
        resolve_field(
            self.details.as_slice(),
            self.details_en.as_deref(),
            lang,
            Language::DEFAULT,
        )
    }

    #[must_use]
    pub fn price_label(&self) -> PriceLabel<'_> {
        match self.price.as_str() {
            PRICE_PER_ITEM => PriceLabel::PerItem,
            PRICE_PER_WEIGHT => PriceLabel::PerWeight,
            amount => PriceLabel::Amount(amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(name: &str, name_en: Option<&str>, price: &str) -> MenuItem {
        MenuItem {
            name: name.into(),
            name_en: name_en.map(Into::into),
            description: None,
            description_en: None,
            price: price.into(),
            subtitle: None,
            subtitle_en: None,
            details: Vec::new(),
            details_en: None,
        }
    }

    fn category(id: &str, body: CategoryBody) -> MenuCategory {
        MenuCategory {
            id: id.into(),
            name_he: format!("{id}-he"),
            name_en: format!("{id}-en"),
            image: "/x.jpg".into(),
            body,
        }
    }

    fn section(layout: SectionLayout, n: usize) -> MenuSubSection {
        MenuSubSection {
            title: "t".into(),
            title_en: None,
            description: None,
            description_en: None,
            cta_text: None,
            cta_text_en: None,
            items: (0..n).map(|i| item(&format!("i{i}"), None, "₪1")).collect(),
            layout,
        }
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(MenuCatalog::new(Vec::new()), Err(ContentError::EmptyCatalog));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let cats = vec![
            category("a", CategoryBody::Items(Vec::new())),
            category("a", CategoryBody::Items(Vec::new())),
        ];
        assert_eq!(
            MenuCatalog::new(cats),
            Err(ContentError::DuplicateCategory("a".into()))
        );
    }

    #[test]
    fn select_falls_back_to_first() {
        let catalog = MenuCatalog::new(vec![
            category("a", CategoryBody::Items(Vec::new())),
            category("b", CategoryBody::Items(Vec::new())),
        ])
        .unwrap();
        assert_eq!(catalog.select("b").id, "b");
        assert_eq!(catalog.select("nope").id, "a");
        assert!(catalog.find("nope").is_none());
    }

    #[test]
    fn comparison_requires_grid_and_two_items() {
        assert!(section(SectionLayout::Grid, 2).is_comparison());
        assert!(!section(SectionLayout::Grid, 3).is_comparison());
        assert!(!section(SectionLayout::Grid, 1).is_comparison());
        assert!(!section(SectionLayout::List, 2).is_comparison());
    }

    #[test]
    fn item_fields_resolve_per_language() {
        let mut it = item("אנטריקוט", Some("Ribeye"), "₪239/179");
        it.details = vec!["א".into()];
        it.details_en = Some(Vec::new());
        assert_eq!(it.name(Language::He), "אנטריקוט");
        assert_eq!(it.name(Language::En), "Ribeye");
        // An empty override list counts as missing.
        assert_eq!(it.details(Language::En), ["א".to_string()].as_slice());
    }

    #[test]
    fn price_sentinels_are_recognised() {
        assert_eq!(item("x", None, PRICE_PER_ITEM).price_label(), PriceLabel::PerItem);
        assert_eq!(item("x", None, PRICE_PER_WEIGHT).price_label(), PriceLabel::PerWeight);
        assert_eq!(item("x", None, "₪52").price_label(), PriceLabel::Amount("₪52"));
    }

    #[test]
    fn parse_rejects_ambiguous_category() {
        let text = r#"{"categories":[{"id":"x","nameHe":"x","nameEn":"x","image":"/x",
            "items":[],"subSections":[]}]}"#;
        assert_eq!(
            MenuCatalog::from_json(text),
            Err(ContentError::AmbiguousCategory("x".into()))
        );
    }

    #[test]
    fn layout_defaults_to_list() {
        let text = r#"{"categories":[{"id":"x","nameHe":"x","nameEn":"x","image":"/x",
            "subSections":[{"title":"s","items":[]}]}]}"#;
        let catalog = MenuCatalog::from_json(text).unwrap();
        match &catalog.first().body {
            CategoryBody::SubSections(s) => assert_eq!(s[0].layout, SectionLayout::List),
            CategoryBody::Items(_) => panic!("expected sub-sections"),
        }
    }

    #[test]
    fn malformed_json_reports_document() {
        let err = MenuCatalog::from_json("{").unwrap_err();
        assert!(matches!(err, ContentError::Parse { document: "menu.json", .. }));
    }
}

#![forbid(unsafe_code)]

//! Typed translation bundle: one per language, identical shape everywhere.
//!
//! Bundles are deserialized from JSON after the fallback merge in
//! [`crate::catalog`], so every field is present by the time it reaches
//! these types. `Default` yields an entirely empty bundle, which sections
//! treat as "render nothing".

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationBundle {
    pub site_title: String,
    pub site_description: String,
    pub nav: NavTranslations,
    pub book_table: String,
    pub phone: String,
    pub hero: HeroTranslations,
    pub about: AboutTranslations,
    pub menu: MenuTranslations,
    pub benefits: BenefitsTranslations,
    pub stats: StatsTranslations,
    pub contact: ContactTranslations,
    pub footer: FooterTranslations,
    pub full_menu: FullMenuTranslations,
    pub testimonials: TestimonialsTranslations,
    pub faq: FaqTranslations,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavTranslations {
    pub about: String,
    pub menu: String,
    pub reservations: String,
    pub benefits: String,
    pub gallery: String,
    pub contact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroTranslations {
    pub subtitle: String,
    pub cta: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutTranslations {
    pub title1: String,
    pub title2: String,
    pub quote: String,
    pub description: String,
    pub portfolio_alts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTranslation {
    pub icon_name: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuTranslations {
    pub title: String,
    pub description: String,
    pub cta: String,
    pub view_full_menu: String,
    pub title_line1: String,
    pub title_line2_italic: String,
    pub services: Vec<ServiceTranslation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitsTranslations {
    pub title: String,
    pub description: String,
    pub cta: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsTranslations {
    pub from_year: String,
    pub years: String,
    pub reviews: String,
    pub customers: String,
}

impl StatsTranslations {
    /// Label for the stat at `index` in the stats block.
    ///
    /// The block has a fixed order: founding year, years of experience,
    /// reviews, customers. Indices past the end reuse the last label.
    #[must_use]
    pub fn label_at(&self, index: usize) -> &str {
        match index {
            0 => &self.from_year,
            1 => &self.years,
            2 => &self.reviews,
            _ => &self.customers,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactTranslations {
    pub title: String,
    pub address: String,
    pub hours: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterTranslations {
    pub tagline: String,
    pub copyright: String,
    pub navigation_label: String,
    pub social_label: String,
    pub accessibility_statement: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullMenuTranslations {
    pub close: String,
    pub book_table: String,
    pub section_title: String,
    pub meat_note: String,
    pub back: String,
    pub per_diner: String,
    pub or: String,
    pub categories_label: String,
    pub price_per_item: String,
    pub price_per_weight: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialItem {
    pub id: String,
    pub name: String,
    pub role: String,
    pub quote: String,
    pub rating: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsTranslations {
    pub subtitle: String,
    pub title_regular: String,
    pub title_italic: String,
    pub items: Vec<TestimonialItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqTranslations {
    pub subtitle: String,
    pub title_regular: String,
    pub title_italic: String,
    pub cta_text: String,
    pub cta_button_text: String,
    pub faqs: Vec<FaqItem>,
}

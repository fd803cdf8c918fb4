#![forbid(unsafe_code)]

//! Internationalization foundation for the Casa do Brasil site.
//!
//! Provides the supported [`Language`] set, typed translation bundles,
//! the two-tier field resolver used by every bilingual data field, and a
//! flattened key catalog for bundle fallback merging and shape coverage.

pub mod bundle;
pub mod catalog;
pub mod language;
pub mod resolve;

pub use bundle::{
    AboutTranslations, BenefitsTranslations, ContactTranslations, FaqItem, FaqTranslations,
    FooterTranslations, FullMenuTranslations, HeroTranslations, MenuTranslations,
    NavTranslations, ServiceTranslation, StatsTranslations, TestimonialItem,
    TestimonialsTranslations, TranslationBundle,
};
pub use catalog::{CoverageReport, I18nError, LocaleCoverage, LocaleStrings, StringCatalog};
pub use language::{Language, TextDirection};
pub use resolve::{Blank, resolve_field, resolve_optional};

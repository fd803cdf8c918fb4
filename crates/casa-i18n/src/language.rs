#![forbid(unsafe_code)]

//! Supported languages and their text direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::I18nError;

/// A site language.
///
/// Hebrew is the default and the primary language of every data field.
/// Portuguese has a full bundle but no UI selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    He,
    En,
    Pt,
}

/// Inline text direction of a document or element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ltr => Self::Rtl,
            Self::Rtl => Self::Ltr,
        }
    }
}

impl Language {
    /// The language every primary field is written in.
    pub const DEFAULT: Self = Self::He;

    /// Every language with a bundle in the content store.
    pub const ALL: [Self; 3] = [Self::He, Self::En, Self::Pt];

    /// Languages exposed through the UI switcher.
    pub const SELECTABLE: [Self; 2] = [Self::He, Self::En];

    /// Two-letter code (`"he"`, `"en"`, `"pt"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::He => "he",
            Self::En => "en",
            Self::Pt => "pt",
        }
    }

    /// Label shown on the switcher button.
    #[must_use]
    pub const fn switcher_label(self) -> &'static str {
        match self {
            Self::He => "\u{5e2}\u{5d1}\u{5e8}\u{5d9}\u{5ea}",
            Self::En => "EN",
            Self::Pt => "PT",
        }
    }

    #[must_use]
    pub const fn direction(self) -> TextDirection {
        match self {
            Self::He => TextDirection::Rtl,
            Self::En | Self::Pt => TextDirection::Ltr,
        }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self.direction(), TextDirection::Rtl)
    }

    /// Value written to the root `lang` attribute.
    ///
    /// Only Hebrew and English are distinguished at document level.
    #[must_use]
    pub const fn document_lang(self) -> &'static str {
        match self {
            Self::He => "he",
            Self::En | Self::Pt => "en",
        }
    }

    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::He)
    }

    /// Whether the language has a switcher button.
    #[must_use]
    pub fn is_selectable(self) -> bool {
        Self::SELECTABLE.contains(&self)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "he" | "he-il" | "iw" => Ok(Self::He),
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            "pt" | "pt-br" | "pt-pt" => Ok(Self::Pt),
            _ => Err(I18nError::UnknownLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes_and_regions() {
        assert_eq!("he".parse::<Language>().unwrap(), Language::He);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("pt-BR".parse::<Language>().unwrap(), Language::Pt);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn hebrew_is_rtl_default() {
        assert!(Language::He.is_rtl());
        assert!(Language::He.is_default());
        assert_eq!(Language::default(), Language::He);
        assert_eq!(Language::He.direction().as_str(), "rtl");
    }

    #[test]
    fn portuguese_is_not_selectable() {
        assert!(Language::He.is_selectable());
        assert!(Language::En.is_selectable());
        assert!(!Language::Pt.is_selectable());
    }

    #[test]
    fn document_lang_collapses_to_he_or_en() {
        assert_eq!(Language::He.document_lang(), "he");
        assert_eq!(Language::En.document_lang(), "en");
        assert_eq!(Language::Pt.document_lang(), "en");
        assert_eq!(Language::Pt.direction(), TextDirection::Ltr);
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Language::Pt).unwrap();
        assert_eq!(json, "\"pt\"");
        let back: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(back, Language::En);
    }

    #[test]
    fn direction_flip() {
        assert_eq!(TextDirection::Rtl.flipped(), TextDirection::Ltr);
        assert_eq!(TextDirection::Ltr.flipped(), TextDirection::Rtl);
    }
}

#![forbid(unsafe_code)]

//! Two-tier resolution of bilingual data fields.
//!
//! Data fields carry a primary value written in the default language and an
//! optional override for one other language. Resolution is total: the
//! worst case is the primary value.
//!
//! # Invariants
//!
//! 1. Resolving in the default language always yields the primary value,
//!    whatever the override holds.
//! 2. In any other language a non-empty override wins; an absent or empty
//!    override falls back to the primary value.
//! 3. Emptiness is decided here once ([`Blank`]); callers never special-case
//!    empty strings or empty lists themselves.

use crate::language::Language;

/// Values that can be "present but empty".
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for [T] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// Resolve a field with a mandatory primary value.
///
/// ```
/// use casa_i18n::{Language, resolve_field};
///
/// let name = "פיקאניה";
/// assert_eq!(resolve_field(name, Some("Picanha"), Language::En, Language::He), "Picanha");
/// assert_eq!(resolve_field(name, Some("Picanha"), Language::He, Language::He), name);
/// assert_eq!(resolve_field(name, Some(""), Language::En, Language::He), name);
/// ```
#[must_use]
pub fn resolve_field<'a, T>(
    primary: &'a T,
    override_value: Option<&'a T>,
    current: Language,
    default: Language,
) -> &'a T
where
    T: Blank + ?Sized,
{
    if current == default {
        return primary;
    }
    match override_value {
        Some(value) if !value.is_blank() => value,
        _ => primary,
    }
}

/// Resolve a field whose primary value may itself be absent.
///
/// Same policy as [`resolve_field`]; the result is `None` only when the
/// chosen branch has nothing to offer.
#[must_use]
pub fn resolve_optional<'a, T>(
    primary: Option<&'a T>,
    override_value: Option<&'a T>,
    current: Language,
    default: Language,
) -> Option<&'a T>
where
    T: Blank + ?Sized,
{
    if current == default {
        return primary;
    }
    match override_value {
        Some(value) if !value.is_blank() => Some(value),
        _ => primary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HE: Language = Language::He;

    #[test]
    fn default_language_ignores_override() {
        assert_eq!(resolve_field("א", Some("A"), HE, HE), "א");
    }

    #[test]
    fn other_language_prefers_override() {
        assert_eq!(resolve_field("א", Some("A"), Language::En, HE), "A");
        assert_eq!(resolve_field("א", Some("A"), Language::Pt, HE), "A");
    }

    #[test]
    fn missing_or_empty_override_falls_back() {
        assert_eq!(resolve_field("א", None, Language::En, HE), "א");
        assert_eq!(resolve_field("א", Some(""), Language::En, HE), "א");
    }

    #[test]
    fn lists_resolve_like_strings() {
        let primary = vec!["א".to_string()];
        let empty: Vec<String> = Vec::new();
        let english = vec!["A".to_string(), "B".to_string()];
        assert_eq!(
            resolve_field(primary.as_slice(), Some(english.as_slice()), Language::En, HE),
            english.as_slice()
        );
        assert_eq!(
            resolve_field(primary.as_slice(), Some(empty.as_slice()), Language::En, HE),
            primary.as_slice()
        );
    }

    #[test]
    fn optional_primary() {
        assert_eq!(resolve_optional::<str>(None, None, Language::En, HE), None);
        assert_eq!(resolve_optional(None, Some("A"), Language::En, HE), Some("A"));
        assert_eq!(resolve_optional(None, Some("A"), HE, HE), None);
        assert_eq!(resolve_optional(Some("א"), Some(""), Language::En, HE), Some("א"));
    }
}

#![forbid(unsafe_code)]

//! Errors raised while loading or querying embedded content.

use std::fmt;

use casa_i18n::I18nError;

/// Errors from the content store.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentError {
    /// A bundle was requested for a code or language the store does not hold.
    NotFound(String),
    /// An embedded document failed to parse.
    Parse {
        document: &'static str,
        message: String,
    },
    /// A translation bundle failed validation.
    Bundle(I18nError),
    /// Two menu categories share an id.
    DuplicateCategory(String),
    /// The menu catalog has no categories.
    EmptyCatalog,
    /// A category declares both flat items and sub-sections.
    AmbiguousCategory(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(what) => write!(f, "content not found: {what}"),
            Self::Parse { document, message } => {
                write!(f, "failed to parse {document}: {message}")
            }
            Self::Bundle(err) => write!(f, "invalid translation bundle: {err}"),
            Self::DuplicateCategory(id) => write!(f, "duplicate menu category id: {id}"),
            Self::EmptyCatalog => write!(f, "menu catalog has no categories"),
            Self::AmbiguousCategory(id) => {
                write!(f, "menu category '{id}' has both items and sub-sections")
            }
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bundle(err) => Some(err),
            _ => None,
        }
    }
}

impl From<I18nError> for ContentError {
    fn from(err: I18nError) -> Self {
        match err {
            I18nError::UnknownLanguage(code) => Self::NotFound(code),
            other => Self::Bundle(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casa_i18n::Language;

    #[test]
    fn unknown_language_maps_to_not_found() {
        let err: ContentError = I18nError::UnknownLanguage("fr".into()).into();
        assert_eq!(err, ContentError::NotFound("fr".into()));
        assert_eq!(err.to_string(), "content not found: fr");
    }

    #[test]
    fn bundle_errors_keep_their_source() {
        let err: ContentError = I18nError::ShapeMismatch {
            language: Language::En,
            missing: vec!["nav.menu".into()],
        }
        .into();
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("nav.menu"));
    }
}

//! Property tests for bilingual field resolution.
//!
//! 1. Default language always yields the primary value.
//! 2. Other languages yield a non-empty override, else the primary value.
//! 3. Lists follow the same policy as strings.

use casa_i18n::{Language, resolve_field, resolve_optional};
use proptest::prelude::*;

fn language_strategy() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::He), Just(Language::En), Just(Language::Pt)]
}

fn override_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), Just(Some(String::new())), ".{1,24}".prop_map(Some),]
}

proptest! {
    #[test]
    fn default_language_returns_primary(
        primary in ".{0,24}",
        override_value in override_strategy(),
    ) {
        let resolved = resolve_field(
            primary.as_str(),
            override_value.as_deref(),
            Language::He,
            Language::He,
        );
        prop_assert_eq!(resolved, primary.as_str());
    }

    #[test]
    fn other_language_prefers_non_empty_override(
        primary in ".{0,24}",
        override_value in override_strategy(),
        current in language_strategy(),
    ) {
        prop_assume!(current != Language::He);
        let resolved = resolve_field(
            primary.as_str(),
            override_value.as_deref(),
            current,
            Language::He,
        );
        match override_value.as_deref() {
            Some(o) if !o.is_empty() => prop_assert_eq!(resolved, o),
            _ => prop_assert_eq!(resolved, primary.as_str()),
        }
    }

    #[test]
    fn lists_follow_string_policy(
        primary in proptest::collection::vec(".{1,8}", 0..4),
        override_value in proptest::option::of(proptest::collection::vec(".{1,8}", 0..4)),
        current in language_strategy(),
    ) {
        let resolved = resolve_field(
            primary.as_slice(),
            override_value.as_deref(),
            current,
            Language::He,
        );
        let expected = match (&override_value, current) {
            (_, Language::He) => primary.as_slice(),
            (Some(o), _) if !o.is_empty() => o.as_slice(),
            _ => primary.as_slice(),
        };
        prop_assert_eq!(resolved, expected);
    }

    #[test]
    fn optional_resolution_never_invents_values(
        primary in proptest::option::of(".{0,12}"),
        override_value in override_strategy(),
        current in language_strategy(),
    ) {
        let resolved = resolve_optional(
            primary.as_deref(),
            override_value.as_deref(),
            current,
            Language::He,
        );
        if let Some(value) = resolved {
            let from_primary = primary.as_deref() == Some(value);
            let from_override = override_value.as_deref() == Some(value);
            prop_assert!(from_primary || from_override);
        }
    }
}

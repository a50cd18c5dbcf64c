//! Property-based tests for the name derivation functions
//!
//! Inputs are drawn from the identifier alphabet the conversions are meant
//! for: ASCII letters, digits, and the separator characters.

use blueprint_strings::prelude::*;
use proptest::prelude::*;

// Strategy: identifier-like strings, separators included
fn arb_identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{0,32}"
}

// Strategy: dotted names with possibly empty segments
fn arb_dotted() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9 _-]{0,8}", 1..6).prop_map(|segments| segments.join("."))
}

proptest! {
    /// Property: dasherizing twice is the same as dasherizing once
    #[test]
    fn proptest_dasherize_is_idempotent(input in arb_identifier()) {
        let once = dasherize(Some(input.as_str()));
        prop_assert_eq!(dasherize(Some(once.as_str())), once);
    }

    /// Property: underscoring twice is the same as underscoring once
    #[test]
    fn proptest_underscore_is_idempotent(input in arb_identifier()) {
        let once = underscore(&input);
        prop_assert_eq!(underscore(&once), once);
    }

    /// Property: camelizing twice is the same as camelizing once
    #[test]
    fn proptest_camelize_is_idempotent(input in arb_identifier()) {
        let once = camelize(&input);
        prop_assert_eq!(camelize(&once), once);
    }

    /// Property: camelized output has no separators and no leading capital
    #[test]
    fn proptest_camelize_output_shape(input in arb_identifier()) {
        let camelized = camelize(&input);

        prop_assert!(!camelized.contains(['-', '_', '.', ' ']));
        prop_assert!(!camelized.starts_with(|c: char| c.is_ascii_uppercase()));
    }

    /// Property: capitalize only touches the first character
    #[test]
    fn proptest_capitalize_preserves_length_and_tail(input in arb_identifier()) {
        let capitalized = capitalize(&input);

        prop_assert_eq!(capitalized.len(), input.len());
        if !input.is_empty() {
            prop_assert_eq!(&capitalized[1..], &input[1..]);
            prop_assert_eq!(
                capitalized.as_bytes()[0],
                input.as_bytes()[0].to_ascii_uppercase()
            );
        }
    }

    /// Property: classify keeps one output segment per input segment
    #[test]
    fn proptest_classify_preserves_segment_count(input in arb_dotted()) {
        let classified = classify(&input);
        prop_assert_eq!(classified.split('.').count(), input.split('.').count());
    }

    /// Property: dasherized output is lower case without spaces or underscores
    #[test]
    fn proptest_dasherize_output_shape(input in arb_identifier()) {
        let dasherized = dasherize(Some(input.as_str()));

        prop_assert!(!dasherized.contains([' ', '_']));
        prop_assert!(!dasherized.chars().any(|c| c.is_ascii_uppercase()));
    }

    /// Property: every plural ends in the appended `s`
    #[test]
    fn proptest_pluralize_appends_s(input in arb_identifier()) {
        let plural = pluralize(&input);
        prop_assert!(plural.ends_with(['s', 'S']), "{:?} -> {:?}", input, plural);
    }

    /// Property: ungrouped features always resolve to the current directory
    #[test]
    fn proptest_feature_path_ungrouped_is_current_dir(
        flat in any::<Option<bool>>(),
        path in arb_identifier(),
        name in arb_identifier(),
    ) {
        prop_assert_eq!(feature_path(Some(false), flat, &path, &name), "./");
        prop_assert_eq!(feature_path(None, flat, &path, &name), "./");
    }

    /// Property: a non-empty group name becomes the parent folder
    #[test]
    fn proptest_group_prefixes_name(name in arb_identifier(), group_name in "[a-z]{1,8}") {
        prop_assert_eq!(
            group(&name, Some(group_name.as_str())),
            format!("{group_name}/{name}")
        );
    }
}

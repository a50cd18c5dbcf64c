#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Reference table: each conversion over the same four identifiers
// ============================================================================

#[test_case("innerHTML", "inner_html")]
#[test_case("action_name", "action_name")]
#[test_case("css-class-name", "css-class-name")]
#[test_case("my favorite items", "my favorite items")]
fn decamelize___reference_input___matches_expected(input: &str, expected: &str) {
    assert_eq!(decamelize(input), expected);
}

#[test_case("innerHTML", "inner-html")]
#[test_case("action_name", "action-name")]
#[test_case("css-class-name", "css-class-name")]
#[test_case("my favorite items", "my-favorite-items")]
fn dasherize___reference_input___matches_expected(input: &str, expected: &str) {
    assert_eq!(dasherize(Some(input)), expected);
}

#[test_case("innerHTML", "innerHTML")]
#[test_case("action_name", "actionName")]
#[test_case("css-class-name", "cssClassName")]
#[test_case("my favorite items", "myFavoriteItems" ; "lowercase words")]
#[test_case("My Favorite Items", "myFavoriteItems" ; "capitalized words")]
fn camelize___reference_input___matches_expected(input: &str, expected: &str) {
    assert_eq!(camelize(input), expected);
}

#[test_case("innerHTML", "InnerHTML")]
#[test_case("action_name", "ActionName")]
#[test_case("css-class-name", "CssClassName")]
#[test_case("my favorite items", "MyFavoriteItems")]
fn classify___reference_input___matches_expected(input: &str, expected: &str) {
    assert_eq!(classify(input), expected);
}

#[test_case("innerHTML", "inner_html")]
#[test_case("action_name", "action_name")]
#[test_case("css-class-name", "css_class_name")]
#[test_case("my favorite items", "my_favorite_items")]
fn underscore___reference_input___matches_expected(input: &str, expected: &str) {
    assert_eq!(underscore(input), expected);
}

#[test_case("innerHTML", "InnerHTML")]
#[test_case("action_name", "Action_name")]
#[test_case("css-class-name", "Css-class-name")]
#[test_case("my favorite items", "My favorite items")]
fn capitalize___reference_input___matches_expected(input: &str, expected: &str) {
    assert_eq!(capitalize(input), expected);
}

// ============================================================================
// Idempotence on already-normalized identifiers
// ============================================================================

#[test_case("my-feature")]
#[test_case("inner-html")]
#[test_case("a--b")]
fn dasherize___already_dashed___is_unchanged(input: &str) {
    assert_eq!(dasherize(Some(input)), input);
}

#[test_case("my_feature")]
#[test_case("inner_html")]
fn underscore___already_snake___is_unchanged(input: &str) {
    assert_eq!(underscore(input), input);
}

#[test_case("myFeature")]
#[test_case("innerHTML")]
fn camelize___already_camel___is_unchanged(input: &str) {
    assert_eq!(camelize(input), input);
}

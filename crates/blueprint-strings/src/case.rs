//! Case conversion functions.
//!
//! All conversions are total: any input, including the empty string, yields a
//! deterministic output. Word boundaries are lossy once collapsed, so the
//! conversions are not inverses of each other.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// lowercase-or-digit followed by a single uppercase letter
static DECAMELIZE: Lazy<Regex> = Lazy::new(|| compile(r"([a-z0-9])([A-Z])"));

/// a run of separators, optionally followed by the character to promote
static CAMELIZE: Lazy<Regex> = Lazy::new(|| compile(r"(-|_|\.|\s)+(.)?"));

/// lowercase-or-digit followed by an uppercase run (acronyms stay together)
static UNDERSCORE_BOUNDARY: Lazy<Regex> = Lazy::new(|| compile(r"([a-z0-9])([A-Z]+)"));

static UNDERSCORE_SEPARATOR: Lazy<Regex> = Lazy::new(|| compile(r"-|\s+"));

/// Compile one of the crate's literal patterns.
#[allow(clippy::expect_used)] // Safe: patterns are string literals covered by tests
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

/// Convert a camelized string into lower case, marking each
/// lower-to-upper transition with an underscore.
///
/// # Examples
///
/// ```
/// use blueprint_strings::decamelize;
///
/// assert_eq!(decamelize("innerHTML"), "inner_html");
/// assert_eq!(decamelize("action_name"), "action_name");
/// assert_eq!(decamelize("css-class-name"), "css-class-name");
/// assert_eq!(decamelize("my favorite items"), "my favorite items");
/// ```
pub fn decamelize(s: &str) -> String {
    DECAMELIZE.replace_all(s, "${1}_${2}").to_lowercase()
}

/// Replace underscores, spaces, and camelCase boundaries with dashes.
///
/// An absent input is treated as the empty string.
///
/// # Examples
///
/// ```
/// use blueprint_strings::dasherize;
///
/// assert_eq!(dasherize(Some("innerHTML")), "inner-html");
/// assert_eq!(dasherize(Some("action_name")), "action-name");
/// assert_eq!(dasherize(Some("my favorite items")), "my-favorite-items");
/// assert_eq!(dasherize(None), "");
/// ```
pub fn dasherize(s: Option<&str>) -> String {
    decamelize(s.unwrap_or_default()).replace([' ', '_'], "-")
}

/// Return the lowerCamelCase form of a string.
///
/// Each run of separators (`-`, `_`, `.`, whitespace) is removed and the
/// character after it is uppercased. Trailing separators vanish.
///
/// # Examples
///
/// ```
/// use blueprint_strings::camelize;
///
/// assert_eq!(camelize("innerHTML"), "innerHTML");
/// assert_eq!(camelize("action_name"), "actionName");
/// assert_eq!(camelize("css-class-name"), "cssClassName");
/// assert_eq!(camelize("My Favorite Items"), "myFavoriteItems");
/// ```
pub fn camelize(s: &str) -> String {
    let mut camelized = CAMELIZE
        .replace_all(s, |caps: &Captures<'_>| {
            caps.get(2)
                .map(|next| next.as_str().to_uppercase())
                .unwrap_or_default()
        })
        .into_owned();

    if camelized.starts_with(|c: char| c.is_ascii_uppercase()) {
        camelized[..1].make_ascii_lowercase();
    }

    camelized
}

/// Return the UpperCamelCase form of a string.
///
/// Dot-separated segments are classified independently and rejoined with
/// dots, so `a.b-c` becomes `A.BC`.
///
/// # Examples
///
/// ```
/// use blueprint_strings::classify;
///
/// assert_eq!(classify("innerHTML"), "InnerHTML");
/// assert_eq!(classify("css-class-name"), "CssClassName");
/// assert_eq!(classify("my favorite items"), "MyFavoriteItems");
/// assert_eq!(classify("app.user-store"), "App.UserStore");
/// ```
pub fn classify(s: &str) -> String {
    s.split('.')
        .map(|segment| capitalize(&camelize(segment)))
        .collect::<Vec<_>>()
        .join(".")
}

/// Return the lower_case_and_underscored form of a string.
///
/// More aggressive than [`decamelize`]: an uppercase run following a
/// lowercase letter or digit is split off as one word.
///
/// # Examples
///
/// ```
/// use blueprint_strings::underscore;
///
/// assert_eq!(underscore("innerHTML"), "inner_html");
/// assert_eq!(underscore("css-class-name"), "css_class_name");
/// assert_eq!(underscore("my favorite items"), "my_favorite_items");
/// ```
pub fn underscore(s: &str) -> String {
    let split = UNDERSCORE_BOUNDARY.replace_all(s, "${1}_${2}");
    UNDERSCORE_SEPARATOR
        .replace_all(&split, "_")
        .to_lowercase()
}

/// Capitalize the first character of a string, leaving the rest unchanged.
///
/// # Examples
///
/// ```
/// use blueprint_strings::capitalize;
///
/// assert_eq!(capitalize("innerHTML"), "InnerHTML");
/// assert_eq!(capitalize("css-class-name"), "Css-class-name");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}


#[cfg(test)]
#[path = "case/case_parameterized_tests.rs"]
mod case_parameterized_tests;

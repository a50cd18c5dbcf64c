//! Heuristic English pluralization for identifiers.

use crate::case::{camelize, compile};
use once_cell::sync::Lazy;
use regex::Regex;

/// Suffix rewrites, applied in order to the same working value.
///
/// Each rule fires at most once. Order matters: `city` must become `citie`
/// before the trailing `s` is appended.
static SUFFIX_RULES: Lazy<[(Regex, &'static str); 3]> = Lazy::new(|| {
    [
        // consonant + y: city -> citie(s)
        (compile(r"([^aeiou])y$"), "${1}ie"),
        // f / fe: knife -> knive(s)
        (compile(r"fe?$"), "ve"),
        // consonant + o, sibilants: box -> boxe(s), church -> churche(s)
        (compile(r"([^aeiou]o|[sxz]|[cs]h)$"), "${1}e"),
    ]
});

/// Return the plural form of a camelCase or plain identifier.
///
/// Irregular nouns are not recognised (`child` becomes `childs`). The result
/// is camelized, so separators in the input collapse.
///
/// # Examples
///
/// ```
/// use blueprint_strings::pluralize;
///
/// assert_eq!(pluralize("user"), "users");
/// assert_eq!(pluralize("regex"), "regexes");
/// assert_eq!(pluralize("innerHTML"), "innerHTMLs");
/// assert_eq!(pluralize("action_name"), "actionNames");
/// ```
pub fn pluralize(s: &str) -> String {
    let mut word = s.to_string();
    for (pattern, replacement) in SUFFIX_RULES.iter() {
        word = pattern.replace(&word, *replacement).into_owned();
    }
    word.push('s');

    camelize(&word)
}

//! Relative path composition for generated files.
//!
//! These helpers only join strings; resolving the result against a real
//! directory tree is the caller's job.

/// Prefix `name` with its group folder when one is given.
///
/// An empty group name counts as absent.
///
/// # Examples
///
/// ```
/// use blueprint_strings::group;
///
/// assert_eq!(group("foo", Some("bar")), "bar/foo");
/// assert_eq!(group("foo", None), "foo");
/// ```
pub fn group(name: &str, group_name: Option<&str>) -> String {
    match group_name {
        Some(group_name) if !group_name.is_empty() => format!("{group_name}/{name}"),
        _ => name.to_string(),
    }
}

/// Relative path from a generated file back to the feature it belongs to.
///
/// | group | flat | result |
/// |-------|------|--------|
/// | yes | no | `../../<path>/<name>/` |
/// | yes | yes | `../<path>/` |
/// | no | any | `./` |
///
/// Absent flags count as `false`.
///
/// # Examples
///
/// ```
/// use blueprint_strings::feature_path;
///
/// assert_eq!(feature_path(Some(true), Some(false), "p", "n"), "../../p/n/");
/// assert_eq!(feature_path(Some(true), Some(true), "p", "n"), "../p/");
/// assert_eq!(feature_path(None, None, "p", "n"), "./");
/// ```
pub fn feature_path(group: Option<bool>, flat: Option<bool>, path: &str, name: &str) -> String {
    match (group.unwrap_or(false), flat.unwrap_or(false)) {
        (true, false) => format!("../../{path}/{name}/"),
        (true, true) => format!("../{path}/"),
        (false, _) => "./".to_string(),
    }
}

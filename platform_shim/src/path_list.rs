//! Splitting of delimited path-list environment variables.
//!
//! Variables such as `XDG_CONFIG_HOME` and `VK_LAYER_PATH` may hold several
//! directories joined by the platform list separator. Empty segments carry no
//! location and are discarded.

/// Separator between entries of a path-list variable on the build target.
#[cfg(windows)]
pub const PATH_LIST_DELIMITER: char = ';';

/// Separator between entries of a path-list variable on the build target.
#[cfg(not(windows))]
pub const PATH_LIST_DELIMITER: char = ':';

/// Splits `list` on `delimiter`, keeping non-empty segments in order.
///
/// # Examples
///
/// ```rust
/// use platform_shim::split_path_list;
///
/// assert_eq!(split_path_list("a;;b;", ';'), vec!["a", "b"]);
/// assert!(split_path_list("", ':').is_empty());
/// ```
#[must_use]
pub fn split_path_list(list: &str, delimiter: char) -> Vec<String> {
    list.split(delimiter)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Splits `list` using the build target's [`PATH_LIST_DELIMITER`].
#[must_use]
pub fn parse_env_var_list(list: &str) -> Vec<String> {
    split_path_list(list, PATH_LIST_DELIMITER)
}

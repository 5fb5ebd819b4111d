//! Naming transforms shared by the enrichment pipeline.
//!
//! Every transform here is a pure `&str -> String` function. The
//! boundary rule is deliberately simple: a separator goes between a
//! lowercase ASCII letter and the uppercase ASCII letter that follows it,
//! and nowhere else. `"HTTPServer"` therefore stays in one piece.
//! Generated file paths and cross-document references depend on this
//! exact rule, so it must not be made smarter.

/// Extension of every per-model document.
pub const MODEL_FILE_EXTENSION: &str = ".json";

/// Insert `separator` at every lowercase-to-uppercase boundary, then lowercase
/// the whole string (e.g., "UserAccount", '-' -> "user-account").
pub fn split_case_boundaries(s: &str, separator: char) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            result.push(separator);
        }
        result.push(c);
        prev = Some(c);
    }
    result.to_lowercase()
}

/// Convert a resource or tag name to its resource name (e.g., "UserAccount" -> "user-account")
pub fn to_resource_name(name: &str) -> String {
    split_case_boundaries(name, '-')
}

/// Convert a raw identifier to a variable name (e.g., "firstName" -> "first_name").
///
/// This applies [`sanitize_name`] first. Reserved-word escaping is left to the
/// caller's naming convention, which runs between the two steps.
pub fn to_variable_name(name: &str) -> String {
    split_case_boundaries(&sanitize_name(name), '_')
}

/// Convert a model or type name to a file stem (e.g., "UserAccount" -> "user_account")
pub fn to_file_name(name: &str) -> String {
    split_case_boundaries(name, '_')
}

/// Relative path of a model document (e.g., "UserAccount" -> "./user_account.json")
pub fn to_relative_file_path(name: &str) -> String {
    format!("./{}{}", to_file_name(name), MODEL_FILE_EXTENSION)
}

/// Strip characters that cannot appear in an identifier.
///
/// Brackets, parentheses, dots, dashes and spaces are folded into
/// underscores first so that `"user.name"` keeps its word boundary;
/// anything else outside `[A-Za-z0-9_]` is dropped. A lone `"$"` becomes
/// `"value"`.
pub fn sanitize_name(name: &str) -> String {
    if name == "$" {
        return "value".to_string();
    }

    name.replace("[]", "")
        .replace('[', "_")
        .replace(']', "")
        .replace('(', "_")
        .replace(')', "")
        .replace(['.', '-', ' '], "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Uppercase the first character of a string (e.g., "users" -> "Users")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

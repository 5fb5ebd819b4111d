//! Naming convention of the discovery dialect.

use discogen_core::{
    sanitize_name, to_file_name, to_relative_file_path, to_resource_name, to_variable_name,
};

/// Naming rules applied to every identifier taken from a description.
///
/// Holds the reserved words that must be escaped before a name can be used
/// as a variable. Escaping prefixes an underscore (e.g., "type" -> "_type").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingConvention {
    reserved_words: Vec<String>,
}

impl NamingConvention {
    /// Create a convention with the given reserved words.
    pub fn new(reserved_words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            reserved_words: reserved_words.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.iter().any(|w| w == name)
    }

    /// Escape a reserved word.
    pub fn escape(&self, name: &str) -> String {
        format!("_{}", name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            self.escape(name)
        } else {
            name.to_string()
        }
    }

    /// Sanitize, escape, then split at case boundaries with underscores.
    pub fn variable_name(&self, name: &str) -> String {
        to_variable_name(&self.safe_name(&sanitize_name(name)))
    }

    /// Check whether [`variable_name`](Self::variable_name) will escape this name.
    pub fn needs_escape(&self, name: &str) -> bool {
        self.is_reserved(&sanitize_name(name))
    }

    pub fn resource_name(&self, name: &str) -> String {
        to_resource_name(name)
    }

    pub fn file_name(&self, name: &str) -> String {
        to_file_name(name)
    }

    /// Relative path of the document for a model or type name.
    pub fn relative_file_path(&self, name: &str) -> String {
        to_relative_file_path(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_name_without_reserved_words() {
        let naming = NamingConvention::default();

        assert_eq!(naming.variable_name("firstName"), "first_name");
        assert_eq!(naming.variable_name("UserAccountID"), "user_account_id");
        assert!(!naming.needs_escape("type"));
    }

    #[test]
    fn test_reserved_words_are_escaped() {
        let naming = NamingConvention::new(["type", "Class"]);

        assert_eq!(naming.variable_name("type"), "_type");
        assert_eq!(naming.variable_name("Class"), "_class");
        assert_eq!(naming.variable_name("typeName"), "type_name");
        assert!(naming.needs_escape("type"));
    }

    #[test]
    fn test_file_and_resource_names() {
        let naming = NamingConvention::default();

        assert_eq!(naming.resource_name("UserAccount"), "user-account");
        assert_eq!(naming.file_name("UserAccount"), "user_account");
        assert_eq!(naming.relative_file_path("UserAccount"), "./user_account.json");
    }
}

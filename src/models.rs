use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Names and persisted fields recovered from a model's source text.
///
/// Built once per run by the reflector and treated as immutable afterwards.
/// `field_names` keeps the order of discovery, carries no duplicates, and
/// never contains the implicit `id` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub singular_name: String,
    pub field_names: Vec<String>,
}

impl ModelDescriptor {
    pub fn new(singular_name: impl Into<String>, field_names: Vec<String>) -> Self {
        Self {
            singular_name: singular_name.into(),
            field_names,
        }
    }

    /// Singular name with only its first character upper-cased.
    /// Example: "contact" -> "Contact", "userProfile" -> "UserProfile"
    pub fn capitalized_singular(&self) -> String {
        capitalize_first(&self.singular_name)
    }
}

/// One transformed template, ready to be handed to the file writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    /// Absolute destination path.
    pub path: PathBuf,
    /// Transformed file content.
    pub content: String,
}

impl GeneratedDocument {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Upper-case only the first character, leaving the rest untouched.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

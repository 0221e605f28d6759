use crate::error::{Error, Result};
use crate::models::ModelDescriptor;
use regex::Regex;

/// Recovers a model's class name and persisted field names from its source
/// text, without executing any of it.
///
/// This is deliberately a textual pattern match, not a full parse. It accepts
/// any model file that follows the narrow stylistic convention (one class, one
/// constructor whose `$row` parameter defaults to an array literal of
/// `'field' => null` entries) and hard-fails on anything else. Refusing to
/// generate beats silently misreading a model's fields.
#[derive(Debug)]
pub struct ModelParser {
    class_re: Regex,
    constructor_re: Regex,
    field_re: Regex,
}

impl ModelParser {
    pub fn new() -> Self {
        Self {
            class_re: Regex::new(r"class (\w+) \{").unwrap(),
            constructor_re: Regex::new(r"function __construct\(\$row = array\((.+)\)\) \{")
                .unwrap(),
            field_re: Regex::new(r"'(\w+)' => null").unwrap(),
        }
    }

    /// Reflect a model from its raw source text.
    ///
    /// The class identifier is lower-cased to form the singular name. Field
    /// names are collected in order of appearance from the constructor's
    /// array-literal default; `id` is dropped and repeated keys collapse to
    /// their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Reflection`] naming the missing pattern if the source
    /// lacks the class declaration, the constructor signature, or any
    /// `'field' => null` entries.
    pub fn reflect(&self, source: &str) -> Result<ModelDescriptor> {
        let class_caps = self.class_re.captures(source).ok_or_else(|| {
            Error::Reflection("no class declaration of the form `class Name {`".to_string())
        })?;
        let singular_name = class_caps[1].to_lowercase();

        let constructor_caps = self.constructor_re.captures(source).ok_or_else(|| {
            Error::Reflection(
                "no constructor with an array-literal default for $row".to_string(),
            )
        })?;
        let defaults = &constructor_caps[1];

        let candidates: Vec<String> = self
            .field_re
            .captures_iter(defaults)
            .map(|caps| caps[1].to_string())
            .collect();
        if candidates.is_empty() {
            return Err(Error::Reflection(
                "no `'field' => null` entries in the constructor defaults".to_string(),
            ));
        }

        let mut field_names: Vec<String> = Vec::new();
        for name in candidates {
            if name != "id" && !field_names.contains(&name) {
                field_names.push(name);
            }
        }

        Ok(ModelDescriptor::new(singular_name, field_names))
    }
}

impl Default for ModelParser {
    fn default() -> Self {
        Self::new()
    }
}

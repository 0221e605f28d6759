use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerateConfig {
    /// Plural name of the model to scaffold; doubles as its file name
    /// under `lib/`
    #[serde(default)]
    pub model_name: String,

    /// Path to the reference template tree
    #[serde(default = "default_resources_path")]
    pub resources_path: String,

    /// Project root the generated files are written under
    #[serde(default = "default_destination_root")]
    pub destination_root: String,

    /// Field the entry component looks records up by
    #[serde(default = "default_slug_field")]
    pub slug_field: String,

    /// Simulate all changes without writing anything
    #[serde(default)]
    pub dry_run: Option<bool>,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: Option<bool>,
}

fn default_resources_path() -> String {
    "./resources".to_string()
}

fn default_destination_root() -> String {
    ".".to_string()
}

fn default_slug_field() -> String {
    "slug".to_string()
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            model_name: String::new(),
            resources_path: default_resources_path(),
            destination_root: default_destination_root(),
            slug_field: default_slug_field(),
            dry_run: Some(false),
            verbose: Some(false),
        }
    }
}

impl GenerateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model_name.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "model name is empty".to_string(),
            ));
        }
        if self
            .model_name
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_whitespace())
        {
            return Err(ConfigError::InvalidConfig(format!(
                "model name contains path separators or whitespace: {}",
                self.model_name
            )));
        }
        if self.slug_field.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "slug field is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Merge with another configuration, with other taking precedence
    pub fn merge(&mut self, other: &GenerateConfig) {
        if !other.model_name.is_empty() {
            self.model_name = other.model_name.clone();
        }
        if other.resources_path != default_resources_path() {
            self.resources_path = other.resources_path.clone();
        }
        if other.destination_root != default_destination_root() {
            self.destination_root = other.destination_root.clone();
        }
        if other.slug_field != default_slug_field() {
            self.slug_field = other.slug_field.clone();
        }
        if other.dry_run.is_some() {
            self.dry_run = other.dry_run;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    /// Get effective dry_run setting
    pub fn is_dry_run(&self) -> bool {
        self.dry_run.unwrap_or(false)
    }

    /// Get effective verbose setting
    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }
}

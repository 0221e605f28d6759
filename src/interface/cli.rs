use crate::interface::config::GenerateConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version, about = "Generate CRUD components and page templates from an existing model")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the list/entry components and page templates for a model
    Generate {
        /// Plural name of the model, as found in lib/<name>.inc.php
        model_name: String,

        /// Path to the reference template tree (default: ./resources)
        #[arg(short = 'r', long = "resources", default_value = "./resources")]
        resources_path: PathBuf,

        /// Project root to write generated files under (default: .)
        #[arg(short = 'd', long = "destination", default_value = ".")]
        destination_root: PathBuf,

        /// Field the entry component looks records up by (default: slug)
        #[arg(long = "slug-field", default_value = "slug")]
        slug_field: String,

        /// Simulate all changes without writing anything
        #[arg(long, action = clap::ArgAction::SetTrue)]
        dry: bool,

        /// Verbose output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        verbose: bool,

        /// Configuration file path
        #[arg(short = 'c', long = "config")]
        config_file: Option<PathBuf>,
    },
}

impl From<&Commands> for GenerateConfig {
    fn from(cmd: &Commands) -> Self {
        match cmd {
            Commands::Generate {
                model_name,
                resources_path,
                destination_root,
                slug_field,
                dry,
                verbose,
                ..
            } => GenerateConfig {
                // Model names are always handled lower-cased.
                model_name: model_name.to_lowercase(),
                resources_path: resources_path.to_string_lossy().to_string(),
                destination_root: destination_root.to_string_lossy().to_string(),
                slug_field: slug_field.clone(),
                dry_run: Some(*dry),
                verbose: Some(*verbose),
            },
        }
    }
}

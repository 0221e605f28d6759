pub mod cli;
pub mod config;
pub mod output;

use crate::analysis::ModelAnalyzer;
use crate::error::Result;
use crate::generators::file_writer::{DryRunFileSystem, FileSystem, StandardFileSystem};
use crate::generators::generator::ScaffoldGenerator;
use crate::models::GeneratedDocument;
use std::path::Path;

pub use cli::*;
pub use config::*;
pub use output::*;

/// Run one complete scaffold described by `config`.
///
/// Wires up the file-system implementation (standard or dry-run), reflects
/// the model, and emits the components and page templates. Returns every
/// generated document; in a dry run the documents are produced but nothing
/// reaches disk.
pub fn generate_from_config(config: &config::GenerateConfig) -> Result<Vec<GeneratedDocument>> {
    config.validate()?;

    let logger = output::Logger::new(config.is_verbose());
    let filesys: Box<dyn FileSystem> = if config.is_dry_run() {
        logger.info("Dry mode. No changes are actual.");
        Box::new(DryRunFileSystem::new())
    } else {
        Box::new(StandardFileSystem::new())
    };

    let mut progress = output::ProgressReporter::new(logger.clone(), 3);

    progress.start_step("Reflecting model");
    let destination_root = Path::new(&config.destination_root);
    let model = match ModelAnalyzer::new(filesys.as_ref()).analyze(destination_root, &config.model_name)
    {
        Ok(model) => model,
        Err(e) => {
            progress.fail_step(&e.to_string());
            return Err(e);
        }
    };
    progress.complete_step(Some(&format!(
        "model_name => {}, model_plural_name => {}",
        model.singular_name, config.model_name
    )));

    let generator = ScaffoldGenerator::new(
        &config.resources_path,
        &config.destination_root,
        filesys.as_ref(),
    )?
    .with_slug_field(&config.slug_field);

    progress.start_step("Generating components");
    let mut documents = match generator.generate_components(&model, &config.model_name) {
        Ok(documents) => documents,
        Err(e) => {
            progress.fail_step(&e.to_string());
            return Err(e);
        }
    };
    progress.complete_step(Some("list.php, entry.php"));

    progress.start_step("Generating page templates");
    let templates = match generator.generate_page_templates(&model, &config.model_name) {
        Ok(templates) => templates,
        Err(e) => {
            progress.fail_step(&e.to_string());
            return Err(e);
        }
    };
    progress.complete_step(Some(&format!("{} files", templates.len())));
    documents.extend(templates);

    progress.finish(&format!(
        "Generated {} files for model '{}'",
        documents.len(),
        config.model_name
    ));
    Ok(documents)
}

use crate::error::{Error, Result};
use crate::generators::file_writer::FileSystem;
use crate::models::ModelDescriptor;
use std::path::Path;

use super::{model_source_path, ModelParser};

/// Locates a model's source file by convention and reflects it.
///
/// Reads go through the injected [`FileSystem`], same as the generator, so a
/// dry run still resolves and parses the real model.
pub struct ModelAnalyzer<'a> {
    parser: ModelParser,
    filesys: &'a dyn FileSystem,
}

impl<'a> ModelAnalyzer<'a> {
    pub fn new(filesys: &'a dyn FileSystem) -> Self {
        Self {
            parser: ModelParser::new(),
            filesys,
        }
    }

    /// Reflect the model named `model_plural_name` under `destination_root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelNotFound`] if `lib/<plural>.inc.php` is not a
    /// file, or [`Error::Reflection`] if its source fails a required pattern.
    pub fn analyze(
        &self,
        destination_root: &Path,
        model_plural_name: &str,
    ) -> Result<ModelDescriptor> {
        let path = model_source_path(destination_root, model_plural_name);
        if !self.filesys.is_file(&path) {
            return Err(Error::ModelNotFound(path.display().to_string()));
        }
        let source = self.filesys.read_file(&path)?;
        self.parser.reflect(&source)
    }
}

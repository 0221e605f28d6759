use crate::analysis::ModelParser;
use crate::error::{Error, Result};
use crate::generators::file_writer::FileSystem;
use crate::generators::transformer::{self, REFERENCE_PLURAL};
use crate::models::{GeneratedDocument, ModelDescriptor};
use std::path::{Path, PathBuf};

/// Field the entry component uses to look records up by URL name.
pub const DEFAULT_SLUG_FIELD: &str = "slug";

/// Produces the scaffold for one model: two components and the page
/// templates, all derived from the reference `contacts` tree.
///
/// Reads and writes go through the injected [`FileSystem`], so the same
/// orchestration serves real runs and dry runs. Failures abort immediately;
/// files written earlier in the same run stay on disk.
pub struct ScaffoldGenerator<'a> {
    resources_dir: PathBuf,
    destination_root: PathBuf,
    slug_field: String,
    filesys: &'a dyn FileSystem,
}

impl<'a> ScaffoldGenerator<'a> {
    /// Create a generator rooted at the reference resources directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidResourcesPath`] if `resources_dir` is not a
    /// directory.
    pub fn new(
        resources_dir: impl Into<PathBuf>,
        destination_root: impl Into<PathBuf>,
        filesys: &'a dyn FileSystem,
    ) -> Result<Self> {
        let resources_dir = resources_dir.into();
        if !filesys.is_dir(&resources_dir) {
            return Err(Error::InvalidResourcesPath(
                resources_dir.display().to_string(),
            ));
        }
        Ok(Self {
            resources_dir,
            destination_root: destination_root.into(),
            slug_field: DEFAULT_SLUG_FIELD.to_string(),
            filesys,
        })
    }

    /// Override the field the entry component looks records up by.
    pub fn with_slug_field(mut self, slug_field: impl Into<String>) -> Self {
        self.slug_field = slug_field.into();
        self
    }

    /// Run the whole scaffold for one model: reflect its source, then emit
    /// components and page templates.
    ///
    /// Reflection failure aborts before anything is written.
    pub fn generate(
        &self,
        model_plural_name: &str,
        model_source: &str,
    ) -> Result<Vec<GeneratedDocument>> {
        let model = ModelParser::new().reflect(model_source)?;
        let mut documents = self.generate_components(&model, model_plural_name)?;
        documents.extend(self.generate_page_templates(&model, model_plural_name)?);
        Ok(documents)
    }

    /// Emit the list and entry components for `model` under
    /// `lib/components/<plural>/`.
    pub fn generate_components(
        &self,
        model: &ModelDescriptor,
        model_plural_name: &str,
    ) -> Result<Vec<GeneratedDocument>> {
        let reference_dir = self
            .resources_dir
            .join("lib")
            .join("components")
            .join(REFERENCE_PLURAL);
        let destination_dir = self
            .destination_root
            .join("lib")
            .join("components")
            .join(model_plural_name);
        self.filesys.create_dir_all(&destination_dir)?;

        let mut documents = Vec::new();

        let content = self.read_reference(&reference_dir.join("list.php"))?;
        let content = transformer::rename(&content, &model.singular_name, model_plural_name);
        let content = transformer::expand_fields(&content, &model.field_names);
        documents.push(self.write_document(destination_dir.join("list.php"), content)?);

        let content = self.read_reference(&reference_dir.join("entry.php"))?;
        let content = transformer::rename(&content, &model.singular_name, model_plural_name);
        let content = transformer::expand_fields(&content, &model.field_names);
        let content = transformer::rename_slug_field(&content, &self.slug_field);
        documents.push(self.write_document(destination_dir.join("entry.php"), content)?);

        Ok(documents)
    }

    /// Emit every page template under `templates/<plural>/`.
    ///
    /// Only files directly inside the reference `templates/contacts/`
    /// directory are taken; subdirectories are skipped. Page templates get
    /// the naming rewrite but no field expansion.
    pub fn generate_page_templates(
        &self,
        model: &ModelDescriptor,
        model_plural_name: &str,
    ) -> Result<Vec<GeneratedDocument>> {
        let reference_dir = self.resources_dir.join("templates").join(REFERENCE_PLURAL);
        if !self.filesys.is_dir(&reference_dir) {
            return Err(Error::MissingTemplate(reference_dir.display().to_string()));
        }
        let destination_dir = self
            .destination_root
            .join("templates")
            .join(model_plural_name);
        self.filesys.create_dir_all(&destination_dir)?;

        let mut documents = Vec::new();
        for name in self.filesys.list_dir(&reference_dir)? {
            let source_path = reference_dir.join(&name);
            if !self.filesys.is_file(&source_path) {
                continue;
            }
            let content = self.filesys.read_file(&source_path)?;
            let content = transformer::rename(&content, &model.singular_name, model_plural_name);
            documents.push(self.write_document(destination_dir.join(&name), content)?);
        }
        Ok(documents)
    }

    fn read_reference(&self, path: &Path) -> Result<String> {
        if !self.filesys.is_file(path) {
            return Err(Error::MissingTemplate(path.display().to_string()));
        }
        self.filesys.read_file(path)
    }

    fn write_document(&self, path: PathBuf, content: String) -> Result<GeneratedDocument> {
        self.filesys.write_file(&path, &content)?;
        Ok(GeneratedDocument::new(path, content))
    }
}

use indexmap::IndexSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::naming::ProjectInfo;

use super::metadata::TemplateMetadata;
use super::placeholder::Placeholders;
use super::processor::{list_entries, TemplateProcessor};

/// One installable template, loaded from `<templates root>/<name>/`.
///
/// Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitTemplate {
    base_directory: PathBuf,
    name: String,
    description: String,
    aliases: IndexSet<String>,
    languages: Vec<String>,
}

impl InitTemplate {
    /// Reads the metadata file and the language directories of a template.
    pub fn from_directory<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        let name = base_directory.file_name_checked()?.to_string();
        let TemplateMetadata { description, aliases } =
            TemplateMetadata::load(&base_directory)?;

        let mut languages = Vec::new();
        for entry in list_entries(&base_directory)? {
            let entry_name = entry.file_name_checked()?;
            if entry.is_dir()
                && !entry_name.starts_with('.')
                && !TemplateMetadata::is_metadata_file(entry_name)
            {
                languages.push(entry_name.to_string());
            }
        }

        Ok(Self { base_directory, name, description, aliases, languages })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn aliases(&self) -> &IndexSet<String> {
        &self.aliases
    }

    /// Supported languages, in directory order.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Matches the canonical name or any alias.
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(name)
    }

    pub fn supports(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }

    /// Instantiates the `language` tree of this template into `target_dir`.
    ///
    /// The project name is taken from the last segment of `target_dir`; `version`
    /// feeds the `%cdk-version%` token.
    pub fn install<P: AsRef<Path>>(
        &self,
        language: &str,
        target_dir: P,
        version: &str,
    ) -> Result<()> {
        let target_dir = target_dir.as_ref();
        if !self.supports(language) {
            return Err(Error::UnsupportedLanguage {
                language: language.to_string(),
                template: self.name.clone(),
                available: self.languages.join(", "),
            });
        }

        let project = ProjectInfo::from_target_dir(target_dir)?;
        let placeholders = Placeholders::new(&project, version);
        log::debug!("Installing '{}' ({language}) as project '{}'", self.name, project.name);

        std::fs::create_dir_all(target_dir)?;
        TemplateProcessor::new(&placeholders)
            .install_tree(&self.base_directory.join(language), target_dir)
    }
}

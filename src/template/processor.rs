use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::ext::PathExt;

use super::classify::{classify, strip_template_segment, FileKind};
use super::operation::TemplateOperation;
use super::placeholder::Placeholders;

/// Immediate children of `dir`, sorted by file name.
pub(crate) fn list_entries<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    WalkDir::new(dir.as_ref())
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.map(|e| e.into_path()).map_err(Error::from))
        .collect()
}

/// Instantiates a language tree of a template into a target directory.
///
/// The walk is depth-first and strictly sequential: a directory is created before
/// anything inside it is written, and siblings are handled in name order.
pub struct TemplateProcessor<'a> {
    placeholders: &'a Placeholders,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(placeholders: &'a Placeholders) -> Self {
        Self { placeholders }
    }

    /// Computes the target file name for a source entry of the given kind.
    fn target_name(&self, source_name: &str, kind: &FileKind) -> String {
        let expanded = self.placeholders.expand(source_name);
        match kind {
            FileKind::TemplateFile { .. } => {
                strip_template_segment(&expanded).unwrap_or(expanded)
            }
            FileKind::Directory | FileKind::VerbatimFile => expanded,
        }
    }

    /// Decides what to do with `source`, to be placed under `target_dir`.
    pub fn process<P: AsRef<Path>>(
        &self,
        source: P,
        target_dir: &Path,
    ) -> Result<TemplateOperation> {
        let source = source.as_ref().to_path_buf();
        let kind = classify(source.file_name_checked()?, source.is_dir());
        let target = target_dir.join(self.target_name(source.file_name_checked()?, &kind));
        let target_exists = target.exists();

        Ok(match kind {
            FileKind::Directory => {
                TemplateOperation::CreateDirectory { target, target_exists }
            }
            FileKind::TemplateFile { .. } => {
                let template_content = fs::read_to_string(&source)?;
                let content = self.placeholders.expand(&template_content);
                TemplateOperation::Write { source, target, content, target_exists }
            }
            FileKind::VerbatimFile => {
                TemplateOperation::Copy { source, target, target_exists }
            }
        })
    }

    /// Performs a planned operation.
    fn apply(&self, operation: &TemplateOperation) -> Result<()> {
        match operation {
            TemplateOperation::CreateDirectory { target, .. } => fs::create_dir_all(target)?,
            TemplateOperation::Write { target, content, .. } => fs::write(target, content)?,
            TemplateOperation::Copy { source, target, .. } => {
                fs::copy(source, target)?;
            }
        }
        Ok(())
    }

    /// Recursively copies `source_dir` into `target_dir`, expanding as it goes.
    ///
    /// The first I/O failure aborts the walk; files already written stay in place.
    pub fn install_tree(&self, source_dir: &Path, target_dir: &Path) -> Result<()> {
        for source in list_entries(source_dir)? {
            let operation = self.process(&source, target_dir)?;
            self.apply(&operation)?;
            log::debug!("{}", operation.get_message());

            if let TemplateOperation::CreateDirectory { target, .. } = &operation {
                self.install_tree(&source, target)?;
            }
        }
        Ok(())
    }
}

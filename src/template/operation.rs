use std::path::PathBuf;

/// A single filesystem step of a template installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOperation {
    Copy { source: PathBuf, target: PathBuf, target_exists: bool },
    Write { source: PathBuf, target: PathBuf, content: String, target_exists: bool },
    CreateDirectory { target: PathBuf, target_exists: bool },
}

impl TemplateOperation {
    /// Gets a message describing the operation.
    pub fn get_message(&self) -> String {
        match self {
            TemplateOperation::Copy { source, target, target_exists } => {
                if *target_exists {
                    format!(
                        "Copying '{}' to '{}' (overwriting existing file)",
                        source.display(),
                        target.display()
                    )
                } else {
                    format!("Copying '{}' to '{}'", source.display(), target.display())
                }
            }

            TemplateOperation::Write { source, target, target_exists, .. } => {
                if *target_exists {
                    format!(
                        "Expanding '{}' into '{}' (overwriting existing file)",
                        source.display(),
                        target.display()
                    )
                } else {
                    format!("Expanding '{}' into '{}'", source.display(), target.display())
                }
            }

            TemplateOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "Skipping directory creation '{}' (already exists)",
                        target.display()
                    )
                } else {
                    format!("Creating directory '{}'", target.display())
                }
            }
        }
    }
}

//! Template metadata loading

use indexmap::IndexSet;
use serde::Deserialize;
use std::path::Path;

use crate::constants::METADATA_FILENAMES;
use crate::error::{Error, Result};

/// Contents of a template's `info.json` / `info.yaml` / `info.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateMetadata {
    pub description: String,
    /// Alternative names; duplicates collapse, first occurrence keeps its position.
    #[serde(default)]
    pub aliases: IndexSet<String>,
}

impl TemplateMetadata {
    /// Loads the first metadata file found in `template_dir`, in preference order.
    pub fn load<P: AsRef<Path>>(template_dir: P) -> Result<Self> {
        let template_dir = template_dir.as_ref();

        for metadata_file_name in METADATA_FILENAMES.iter() {
            let metadata_path = template_dir.join(metadata_file_name);
            if !metadata_path.is_file() {
                continue;
            }

            let content = std::fs::read_to_string(&metadata_path)?;
            let parse_error = |e: String| Error::MetadataParseError {
                path: metadata_path.display().to_string(),
                e,
            };
            let metadata: TemplateMetadata = match *metadata_file_name {
                "info.json" => {
                    serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?
                }
                _ => serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
            };
            return Ok(metadata);
        }

        Err(Error::MetadataNotFound {
            template_dir: template_dir.display().to_string(),
            metadata_files: METADATA_FILENAMES.join(", "),
        })
    }

    /// Returns true if `name` is one of the reserved metadata file names.
    pub fn is_metadata_file(name: &str) -> bool {
        METADATA_FILENAMES.contains(&name)
    }
}

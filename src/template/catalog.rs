use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ext::PathExt;

use super::init::InitTemplate;
use super::processor::list_entries;

/// Discovers the templates under a templates root directory.
///
/// Every query re-reads the filesystem; nothing is cached.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    root: PathBuf,
}

impl TemplateCatalog {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All templates, in lexicographic directory order. Hidden entries are skipped.
    pub fn list_available(&self) -> Result<Vec<InitTemplate>> {
        if !self.root.is_dir() {
            return Err(Error::TemplatesRootNotFound {
                templates_dir: self.root.display().to_string(),
            });
        }

        let mut templates = Vec::new();
        for entry in list_entries(&self.root)? {
            if entry.file_name_checked()?.starts_with('.') {
                continue;
            }
            if !entry.is_dir() {
                log::debug!("Ignoring non-directory '{}' in templates root", entry.display());
                continue;
            }
            templates.push(InitTemplate::from_directory(&entry)?);
        }
        Ok(templates)
    }

    /// First template whose name or aliases match `name_or_alias`.
    pub fn resolve(&self, name_or_alias: &str) -> Result<Option<InitTemplate>> {
        Ok(self.list_available()?.into_iter().find(|t| t.has_name(name_or_alias)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn add_template(root: &Path, name: &str, metadata: &str, languages: &[&str]) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("info.json"), metadata).unwrap();
        for language in languages {
            fs::create_dir_all(dir.join(language)).unwrap();
        }
    }

    #[test]
    fn lists_sorted_and_skips_hidden() {
        let root = TempDir::new().unwrap();
        add_template(root.path(), "sample-app", r#"{"description": "s"}"#, &["python"]);
        add_template(root.path(), "app", r#"{"description": "a"}"#, &["typescript"]);
        fs::create_dir(root.path().join(".cache")).unwrap();

        let names: Vec<String> = TemplateCatalog::new(root.path())
            .list_available()
            .unwrap()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(names, vec!["app", "sample-app"]);
    }

    #[test]
    fn missing_root_is_not_found() {
        let root = TempDir::new().unwrap();
        let catalog = TemplateCatalog::new(root.path().join("nope"));
        assert!(matches!(
            catalog.list_available(),
            Err(Error::TemplatesRootNotFound { .. })
        ));
    }

    #[test]
    fn alias_and_name_resolve_to_the_same_template() {
        let root = TempDir::new().unwrap();
        add_template(
            root.path(),
            "app",
            r#"{"description": "a", "aliases": ["default"]}"#,
            &["typescript"],
        );
        let catalog = TemplateCatalog::new(root.path());

        let by_name = catalog.resolve("app").unwrap().unwrap();
        let by_alias = catalog.resolve("default").unwrap().unwrap();
        assert_eq!(by_name, by_alias);
        assert!(catalog.resolve("missing").unwrap().is_none());
    }

    #[test]
    fn first_match_in_catalog_order_wins() {
        let root = TempDir::new().unwrap();
        add_template(root.path(), "b-lib", r#"{"description": "b", "aliases": ["shared"]}"#, &[]);
        add_template(root.path(), "a-app", r#"{"description": "a", "aliases": ["shared"]}"#, &[]);

        let found = TemplateCatalog::new(root.path()).resolve("shared").unwrap().unwrap();
        assert_eq!(found.name(), "a-app");
    }
}

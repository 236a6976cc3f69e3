//! Top-level `init` workflow: resolve, install, bootstrap.

use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_TEMPLATE;
use crate::error::{Error, Result};
use crate::git::GitBootstrapper;
use crate::postinstall::LanguagePostInstall;
use crate::process::{CommandRunner, ProcessRunner};
use crate::template::placeholder::release_version;
use crate::template::{InitTemplate, TemplateCatalog};

/// Parameters of one `init` invocation.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Template name or alias; `None` selects the default template.
    pub template: Option<String>,
    pub language: Option<String>,
    pub target_dir: PathBuf,
    pub can_use_network: bool,
    /// Generate files only, skipping git and package-manager bootstrap.
    pub generate_only: bool,
    /// Substituted for `%cdk-version%`.
    pub version: String,
}

impl InstallOptions {
    pub fn new<P: AsRef<Path>>(target_dir: P) -> Self {
        Self {
            template: None,
            language: None,
            target_dir: target_dir.as_ref().to_path_buf(),
            can_use_network: true,
            generate_only: false,
            version: release_version(env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Orchestrates template resolution, file generation and post-install bootstrap.
pub struct Installer<'a> {
    catalog: TemplateCatalog,
    runner: &'a dyn CommandRunner,
}

impl<'a> Installer<'a> {
    pub fn new(catalog: TemplateCatalog, runner: &'a dyn CommandRunner) -> Self {
        Self { catalog, runner }
    }

    /// Resolves the template and language without touching the target.
    pub fn resolve(
        &self,
        template: Option<&str>,
        language: Option<&str>,
    ) -> Result<(InitTemplate, String)> {
        let name = template.unwrap_or(DEFAULT_TEMPLATE);

        let Some(found) = self.catalog.resolve(name)? else {
            let templates = self.catalog.list_available()?;
            return Err(Error::UnknownTemplate {
                name: name.to_string(),
                available: templates.iter().map(|t| t.name()).collect::<Vec<_>>().join(", "),
            });
        };

        let Some(language) = language else {
            return Err(Error::MissingLanguage { available: found.languages().join(", ") });
        };

        Ok((found, language.to_string()))
    }

    pub fn run(&self, options: &InstallOptions) -> Result<()> {
        let (template, language) =
            self.resolve(options.template.as_deref(), options.language.as_deref())?;

        log::info!(
            "Applying project template '{}' for {language} in {}",
            template.name(),
            options.target_dir.display()
        );
        template.install(&language, &options.target_dir, &options.version)?;

        if options.generate_only {
            log::info!("Generate-only mode: skipping git and {language} bootstrap");
            return Ok(());
        }

        GitBootstrapper::new(self.runner).ensure_repository(&options.target_dir);
        LanguagePostInstall::new(self.runner).run(
            &language,
            options.can_use_network,
            &options.target_dir,
        )?;

        Ok(())
    }
}

/// Runs `init` with the real process runner.
pub fn cli_init(catalog: TemplateCatalog, options: &InstallOptions) -> Result<()> {
    let runner = ProcessRunner::new();
    Installer::new(catalog, &runner).run(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingRunner {
        calls: RefCell<Vec<String>>,
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, command: &str, args: &[&str], _cwd: &Path) -> Result<String> {
            self.calls.borrow_mut().push(format!("{command} {}", args.join(" ")));
            Ok(String::new())
        }
    }

    fn templates_root() -> TempDir {
        let root = TempDir::new().unwrap();
        let app = root.path().join("app");
        fs::create_dir_all(app.join("typescript")).unwrap();
        fs::create_dir_all(app.join("python")).unwrap();
        fs::write(app.join("info.json"), r#"{"description": "app", "aliases": ["default"]}"#)
            .unwrap();
        fs::write(app.join("typescript").join("package.template.json"), r#"{"name": "%name%"}"#)
            .unwrap();
        fs::write(app.join("python").join("setup.template.py"), "name='%name.PythonModule%'")
            .unwrap();
        root
    }

    #[test]
    fn default_template_is_used_when_none_given() {
        let root = templates_root();
        let runner = RecordingRunner::default();
        let installer = Installer::new(TemplateCatalog::new(root.path()), &runner);

        let (template, language) = installer.resolve(None, Some("python")).unwrap();
        assert_eq!(template.name(), "app");
        assert_eq!(language, "python");
    }

    #[test]
    fn unknown_template_fails_before_io() {
        let root = templates_root();
        let work = TempDir::new().unwrap();
        let runner = RecordingRunner::default();
        let mut options = InstallOptions::new(work.path().join("proj"));
        options.template = Some("nope".to_string());
        options.language = Some("python".to_string());

        let err = Installer::new(TemplateCatalog::new(root.path()), &runner)
            .run(&options)
            .unwrap_err();

        assert!(matches!(err, Error::UnknownTemplate { .. }));
        assert!(!work.path().join("proj").exists());
    }

    #[test]
    fn unknown_template_lists_available_names() {
        let root = templates_root();
        let runner = RecordingRunner::default();
        let err = Installer::new(TemplateCatalog::new(root.path()), &runner)
            .resolve(Some("nope"), Some("python"))
            .unwrap_err();

        assert!(matches!(err, Error::UnknownTemplate { ref name, ref available }
            if name == "nope" && available == "app"));
    }

    #[test]
    fn alias_resolves_to_the_catalog_template() {
        let root = templates_root();
        let runner = RecordingRunner::default();
        let catalog = TemplateCatalog::new(root.path());
        let expected = catalog.resolve("default").unwrap().unwrap();

        let (template, _) =
            Installer::new(catalog, &runner).resolve(Some("default"), Some("python")).unwrap();
        assert_eq!(template.name(), expected.name());
    }

    #[test]
    fn missing_language_fails() {
        let root = templates_root();
        let runner = RecordingRunner::default();
        let err = Installer::new(TemplateCatalog::new(root.path()), &runner)
            .resolve(Some("app"), None)
            .unwrap_err();

        assert!(matches!(err, Error::MissingLanguage { ref available } if available == "python, typescript"));
    }

    #[test]
    fn generate_only_skips_bootstrap() {
        let root = templates_root();
        let work = TempDir::new().unwrap();
        let runner = RecordingRunner::default();
        let mut options = InstallOptions::new(work.path().join("my-app"));
        options.language = Some("typescript".to_string());
        options.generate_only = true;

        Installer::new(TemplateCatalog::new(root.path()), &runner).run(&options).unwrap();

        assert!(runner.calls.borrow().is_empty());
        assert_eq!(
            fs::read_to_string(work.path().join("my-app").join("package.json")).unwrap(),
            r#"{"name": "my-app"}"#
        );
    }

    #[test]
    fn full_run_bootstraps_git_then_npm() {
        let root = templates_root();
        let work = TempDir::new().unwrap();
        let target = work.path().join("web");
        let runner = RecordingRunner::default();
        let mut options = InstallOptions::new(&target);
        options.language = Some("typescript".to_string());

        Installer::new(TemplateCatalog::new(root.path()), &runner).run(&options).unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls.last().map(String::as_str), Some("npm install"));
        if !crate::git::is_inside_repository(work.path()) {
            assert_eq!(calls[0], "git init");
            assert_eq!(calls.len(), 4);
        }
    }

    #[test]
    fn version_defaults_to_crate_release() {
        let options = InstallOptions::new("x");
        assert!(!options.version.contains('+'));
        assert_eq!(options.version, release_version(env!("CARGO_PKG_VERSION")));
    }
}

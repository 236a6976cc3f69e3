use crate::{
    cli::{InitArgs, ListArgs},
    constants::TEMPLATES_DIR,
    error::Result,
    installer::{cli_init, InstallOptions},
    settings::{Configuration, Settings},
    template::TemplateCatalog,
};
use serde_json::json;
use std::path::{Path, PathBuf};

/// The templates shipped in the package source tree.
pub fn bundled_templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATES_DIR)
}

/// `init-templates` next to `exe` when it exists, the bundled templates otherwise.
fn templates_dir_for(exe: &Path) -> PathBuf {
    exe.parent()
        .map(|dir| dir.join(TEMPLATES_DIR))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(bundled_templates_dir)
}

/// Templates root used when `--templates-dir` is not given.
pub fn default_templates_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(templates_dir_for(&exe))
}

fn templates_catalog(templates_dir: Option<&Path>) -> Result<TemplateCatalog> {
    let root = match templates_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_templates_dir()?,
    };
    log::debug!("Using templates from {}", root.display());
    Ok(TemplateCatalog::new(root))
}

/// Command-line values as a settings layer.
pub fn settings_from_args(args: &InitArgs) -> Settings {
    // only an explicit --no-network overrides the default
    let can_use_network = args.no_network.then_some(false);
    Settings::new(json!({
        "template": args.template,
        "language": args.language,
        "canUseNetwork": can_use_network,
        "generateOnly": args.generate_only,
    }))
}

/// Builds the installer options from the effective configuration.
pub fn install_options(configuration: &Configuration, target_dir: PathBuf) -> InstallOptions {
    let settings = &configuration.settings;
    let mut options = InstallOptions::new(target_dir);
    options.template = settings.get_str(&["template"]);
    options.language = settings.get_str(&["language"]);
    options.can_use_network = settings.get_bool(&["canUseNetwork"]).unwrap_or(true);
    options.generate_only = settings.get_bool(&["generateOnly"]).unwrap_or(false);
    options
}

/// Runs `init`.
pub fn run_init(args: InitArgs) -> Result<()> {
    let configuration = Configuration::new(settings_from_args(&args));
    log::debug!("language: {:?}", configuration.settings.get(&["language"]));

    let target_dir = match &args.target_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let catalog = templates_catalog(args.templates_dir.as_deref())?;
    let options = install_options(&configuration, target_dir);

    cli_init(catalog, &options)?;
    println!("Project created in {}.", options.target_dir.display());
    Ok(())
}

/// Runs `list`.
pub fn run_list(args: ListArgs) -> Result<()> {
    let catalog = templates_catalog(args.templates_dir.as_deref())?;
    println!("Available templates:");
    for template in catalog.list_available()? {
        let aliases = if template.aliases().is_empty() {
            String::new()
        } else {
            format!(
                " (aliases: {})",
                template.aliases().iter().cloned().collect::<Vec<_>>().join(", ")
            )
        };
        println!("* {}{}: {}", template.name(), aliases, template.description());
        println!(
            "   └─ pj-init init {} --language=[{}]",
            template.name(),
            template.languages().join("|")
        );
    }
    Ok(())
}

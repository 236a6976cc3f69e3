use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Scaffold a new project from a language-specific template.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project from a template.
    Init(InitArgs),
    /// List the available templates.
    List(ListArgs),
}

/// CLI arguments for `init`.
#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Template name or alias (defaults to `default`).
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Language of the generated project.
    #[arg(short, long, env = "PJ_INIT_LANGUAGE")]
    pub language: Option<String>,

    /// Directory containing the templates.
    #[arg(long = "templates-dir", env = "PJ_INIT_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Directory to generate the project in (defaults to the current directory).
    #[arg(long = "target-dir")]
    pub target_dir: Option<PathBuf>,

    /// Only generate files; skip git initialization and package installation.
    #[arg(long = "generate-only")]
    pub generate_only: bool,

    /// Skip bootstrap steps that need network access.
    #[arg(long = "no-network")]
    pub no_network: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// CLI arguments for `list`.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Directory containing the templates.
    #[arg(long = "templates-dir", env = "PJ_INIT_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Commands {
    pub fn verbose(&self) -> u8 {
        match self {
            Commands::Init(args) => args.verbose,
            Commands::List(args) => args.verbose,
        }
    }
}

/// Parse command line arguments, printing help when no subcommand is given.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if matches!(
            e.kind(),
            ErrorKind::MissingSubcommand
                | ErrorKind::MissingRequiredArgument
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ) {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Warn,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Warn);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_init_with_language_alias() {
        let cli = Cli::parse_from(["pj-init", "init", "app", "-l", "typescript"]);
        let Commands::Init(args) = cli.command else {
            panic!("expected init");
        };
        assert_eq!(args.template.as_deref(), Some("app"));
        assert_eq!(args.language.as_deref(), Some("typescript"));
        assert!(!args.generate_only);
        assert!(!args.no_network);
    }

    #[test]
    fn parses_full_feature_flags() {
        let cli = Cli::parse_from([
            "pj-init",
            "init",
            "--language",
            "python",
            "--templates-dir",
            "/opt/templates",
            "--target-dir",
            "out",
            "--generate-only",
            "--no-network",
            "-vv",
        ]);
        let Commands::Init(args) = cli.command else {
            panic!("expected init");
        };
        assert_eq!(args.template, None);
        assert_eq!(args.language.as_deref(), Some("python"));
        assert_eq!(args.templates_dir, Some(PathBuf::from("/opt/templates")));
        assert_eq!(args.target_dir, Some(PathBuf::from("out")));
        assert!(args.generate_only);
        assert!(args.no_network);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn parses_list() {
        let cli = Cli::parse_from(["pj-init", "list", "-v"]);
        assert!(matches!(cli.command, Commands::List(_)));
        assert_eq!(cli.command.verbose(), 1);
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}

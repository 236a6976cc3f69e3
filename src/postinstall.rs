//! Language-specific bootstrap steps run after the project files are generated.

use std::path::Path;

use crate::error::Result;
use crate::process::CommandRunner;

/// A package-manager invocation that prepares a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bootstrap {
    pub command: &'static str,
    pub args: &'static [&'static str],
    /// Whether the step downloads packages.
    pub needs_network: bool,
}

const NPM_INSTALL: Bootstrap =
    Bootstrap { command: "npm", args: &["install"], needs_network: true };

/// Returns the bootstrap registered for `language`, if any.
pub fn bootstrap_for(language: &str) -> Option<Bootstrap> {
    match language {
        "typescript" | "javascript" => Some(NPM_INSTALL),
        _ => None,
    }
}

/// Dispatches the post-install bootstrap for the generated project's language.
pub struct LanguagePostInstall<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> LanguagePostInstall<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Unlike git bootstrap, a failing step here is returned to the caller.
    pub fn run<P: AsRef<Path>>(
        &self,
        language: &str,
        can_use_network: bool,
        target_dir: P,
    ) -> Result<()> {
        let Some(bootstrap) = bootstrap_for(language) else {
            log::debug!("No post-install step for language '{language}'");
            return Ok(());
        };

        if bootstrap.needs_network && !can_use_network {
            log::warn!(
                "Please run '{} {}'!",
                bootstrap.command,
                bootstrap.args.join(" ")
            );
            return Ok(());
        }

        log::info!("Executing '{} {}'...", bootstrap.command, bootstrap.args.join(" "));
        let stdout = self.runner.run(bootstrap.command, bootstrap.args, target_dir.as_ref())?;
        log::debug!("'{}' output: {stdout}", bootstrap.command);
        Ok(())
    }
}

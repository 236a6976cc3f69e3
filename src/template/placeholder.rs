//! Literal `%token%` substitution for template names and contents.

use crate::constants::tokens;
use crate::naming::ProjectInfo;

/// Strips build metadata (`+...`) from a semver string.
///
/// # Examples
/// ```
/// use pj_init::template::placeholder::release_version;
///
/// assert_eq!(release_version("1.4.0+build.7"), "1.4.0");
/// assert_eq!(release_version("1.4.0"), "1.4.0");
/// ```
pub fn release_version(version: &str) -> &str {
    version.split_once('+').map_or(version, |(release, _)| release)
}

/// Token table for one installation.
#[derive(Debug, Clone)]
pub struct Placeholders {
    replacements: Vec<(&'static str, String)>,
}

impl Placeholders {
    pub fn new(project: &ProjectInfo, version: &str) -> Self {
        let replacements = vec![
            (tokens::NAME, project.name.clone()),
            (tokens::NAME_CAMEL, project.camel_cased()),
            (tokens::NAME_PASCAL, project.pascal_cased()),
            (tokens::NAME_MODULE, project.python_module()),
            (tokens::NAME_STACK, project.stack_name()),
            (tokens::VERSION, release_version(version).to_string()),
        ];
        Self { replacements }
    }

    /// Replaces every occurrence of every known token; unknown `%...%` sequences are kept.
    pub fn expand(&self, input: &str) -> String {
        self.replacements
            .iter()
            .fold(input.to_string(), |acc, (token, value)| acc.replace(token, value))
    }
}

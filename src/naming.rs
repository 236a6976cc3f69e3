//! Derived project name forms used by placeholder expansion.

use std::path::Path;
use std::sync::OnceLock;

use cruet::case::{camel::to_camel_case, pascal::to_pascal_case};
use regex::Regex;

use crate::constants::patterns;
use crate::error::Result;
use crate::ext::PathExt;

fn stack_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(patterns::STACK_NAME_INVALID).expect("Invalid stack name regex")
    })
}

fn camel_hump_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(patterns::CAMEL_HUMP).expect("Invalid camel hump regex"))
}

fn name_separators_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(patterns::NAME_SEPARATORS).expect("Invalid name separator regex")
    })
}

/// Converts a raw project name into its lowercase hyphen-separated form.
///
/// `"My-Cool_App"` and `"MyCoolApp"` both become `"my-cool-app"`. Letters and
/// digits stay together, so `"app2"` is unchanged.
pub fn dash_case(raw: &str) -> String {
    let humps = camel_hump_regex().replace_all(raw, "$1-$2");
    name_separators_regex().replace_all(&humps, "-").to_lowercase()
}

/// `my-cool-app` -> `myCoolApp`
pub fn camel_cased(name: &str) -> String {
    to_camel_case(name)
}

/// `my-cool-app` -> `MyCoolApp`
pub fn pascal_cased(name: &str) -> String {
    to_pascal_case(name)
}

/// `my-cool-app` -> `my_cool_app`
pub fn python_module(name: &str) -> String {
    name.replace('-', "_")
}

/// Replaces every character outside `[A-Za-z0-9-]` with `-`.
pub fn stack_name(name: &str) -> String {
    stack_name_regex().replace_all(name, "-").into_owned()
}

/// Per-installation project information, derived from the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Lowercase hyphen-separated project name
    pub name: String,
}

impl ProjectInfo {
    pub fn new(raw_name: &str) -> Self {
        Self { name: dash_case(raw_name) }
    }

    /// Derives the project name from the final segment of `target_dir`.
    ///
    /// Relative paths such as `.` are resolved first so the real directory name is used.
    pub fn from_target_dir<P: AsRef<Path>>(target_dir: P) -> Result<Self> {
        let target_dir = target_dir.as_ref();
        let resolved = match target_dir.canonicalize() {
            Ok(path) => path,
            Err(_) => std::path::absolute(target_dir)?,
        };
        Ok(Self::new(resolved.file_name_checked()?))
    }

    pub fn camel_cased(&self) -> String {
        camel_cased(&self.name)
    }

    pub fn pascal_cased(&self) -> String {
        pascal_cased(&self.name)
    }

    pub fn python_module(&self) -> String {
        python_module(&self.name)
    }

    pub fn stack_name(&self) -> String {
        stack_name(&self.name)
    }
}

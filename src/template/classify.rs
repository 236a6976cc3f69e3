//! Classification of template tree entries by name.

use std::sync::OnceLock;

use regex::Regex;

use crate::constants::patterns;

fn template_file_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(patterns::TEMPLATE_FILE).expect("Invalid template file regex")
    })
}

/// What the installer does with one entry of a template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    /// Created in the target and recursed into.
    Directory,
    /// Content is expanded; written under `stripped_name`.
    TemplateFile { stripped_name: String },
    /// Copied byte-for-byte.
    VerbatimFile,
}

/// Removes the `.template` segment from `<stem>.template.<ext>` names.
///
/// Returns `None` when `name` does not follow that pattern, including names whose
/// extension carries further dots (`a.template.tar.gz`).
pub fn strip_template_segment(name: &str) -> Option<String> {
    template_file_regex()
        .captures(name)
        .map(|caps| format!("{}.{}", &caps["stem"], &caps["ext"]))
}

/// Classifies an entry. Total: every entry maps to exactly one kind.
pub fn classify(name: &str, is_dir: bool) -> FileKind {
    if is_dir {
        return FileKind::Directory;
    }
    match strip_template_segment(name) {
        Some(stripped_name) => FileKind::TemplateFile { stripped_name },
        None => FileKind::VerbatimFile,
    }
}

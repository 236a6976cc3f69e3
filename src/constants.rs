//! Constants used throughout pj-init

/// Template metadata file names in order of preference
pub const METADATA_FILENAMES: &[&str] = &["info.json", "info.yaml", "info.yml"];

/// Template used when none is named on the command line
pub const DEFAULT_TEMPLATE: &str = "default";

/// Directory holding the bundled templates
pub const TEMPLATES_DIR: &str = "init-templates";

/// Marker directory identifying a git working tree
pub const GIT_MARKER_DIR: &str = ".git";

/// Message used for the first commit of a freshly generated project
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// File name patterns used to classify template entries
pub mod patterns {
    /// `<stem>.template.<ext>` where `<ext>` carries no further dots
    pub const TEMPLATE_FILE: &str = r"^(?P<stem>.*)\.template\.(?P<ext>[^.]+)$";
    /// Characters allowed in a resource/stack name
    pub const STACK_NAME_INVALID: &str = r"[^A-Za-z0-9-]";
    /// Lowercase letter or digit directly followed by an uppercase letter
    pub const CAMEL_HUMP: &str = r"([a-z0-9])([A-Z])";
    /// Runs of separators that become a single `-` in the project name
    pub const NAME_SEPARATORS: &str = r"[_.\s]+";
}

/// Placeholder tokens recognised in template file names and contents
pub mod tokens {
    pub const NAME: &str = "%name%";
    pub const NAME_CAMEL: &str = "%name.camelCased%";
    pub const NAME_PASCAL: &str = "%name.PascalCased%";
    pub const NAME_MODULE: &str = "%name.PythonModule%";
    pub const NAME_STACK: &str = "%name.StackName%";
    pub const VERSION: &str = "%cdk-version%";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

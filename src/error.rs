use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk directory: {0}.")]
    WalkError(#[from] walkdir::Error),

    #[error("Failed to parse template metadata '{path}'. Original error: {e}")]
    MetadataParseError { path: String, e: String },

    #[error("No metadata file found in '{template_dir}'. Tried: {metadata_files}.")]
    MetadataNotFound { template_dir: String, metadata_files: String },

    #[error("Cannot proceed: templates directory '{templates_dir}' does not exist.")]
    TemplatesRootNotFound { templates_dir: String },

    #[error("Unknown init template: '{name}'. Available templates: {available}.")]
    UnknownTemplate { name: String, available: String },

    #[error("No language was selected. Available languages: {available}.")]
    MissingLanguage { available: String },

    #[error(
        "Unsupported language: '{language}'. Template '{template}' supports: {available}."
    )]
    UnsupportedLanguage { language: String, template: String, available: String },

    /// The command could not be started at all.
    #[error("Failed to spawn '{command}'. Original error: {source}")]
    CommandSpawnError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but finished with a non-zero status.
    #[error("'{command}' exited with {}", describe_status(.status))]
    CommandFailed { command: String, status: Option<i32> },

    #[error("Invalid path '{path}': {reason}.")]
    InvalidPath { path: String, reason: String },
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "no status (killed by signal)".to_string(),
    }
}

/// Convenience type alias for Results with pj-init's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// The debug representation is logged at `debug` level so `-vv` shows the full chain.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    log::debug!("{err:?}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}

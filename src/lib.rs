/// Handles argument parsing and command dispatch.
pub mod cli;

/// Shared constants.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// Git repository bootstrap.
pub mod git;

/// Top-level init workflow.
pub mod installer;

/// Project name transformations.
pub mod naming;

/// Language-specific post-install steps.
pub mod postinstall;

/// External command execution.
pub mod process;

/// Hierarchical settings.
pub mod settings;

/// Template discovery, classification and installation.
pub mod template;

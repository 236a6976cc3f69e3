//! Version-control bootstrap for freshly generated projects.

use std::path::{Path, PathBuf};

use crate::constants::{GIT_MARKER_DIR, INITIAL_COMMIT_MESSAGE};
use crate::error::Result;
use crate::process::CommandRunner;

/// Walks from `start_dir` up to the filesystem root and returns the first
/// directory holding a `.git` directory.
pub fn find_repository_root<P: AsRef<Path>>(start_dir: P) -> Option<PathBuf> {
    let start_dir = start_dir.as_ref();
    let start_dir =
        std::path::absolute(start_dir).unwrap_or_else(|_| start_dir.to_path_buf());
    start_dir
        .ancestors()
        .find(|dir| dir.join(GIT_MARKER_DIR).is_dir())
        .map(Path::to_path_buf)
}

/// Returns true if `start_dir` or any of its ancestors contains a `.git` directory.
pub fn is_inside_repository<P: AsRef<Path>>(start_dir: P) -> bool {
    find_repository_root(start_dir).is_some()
}

/// Initializes a git repository with an initial commit unless one already encloses the target.
pub struct GitBootstrapper<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> GitBootstrapper<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Never fails: any error from the git commands is downgraded to a warning.
    pub fn ensure_repository<P: AsRef<Path>>(&self, target_dir: P) {
        let target_dir = target_dir.as_ref();
        if is_inside_repository(target_dir) {
            log::debug!(
                "'{}' is already inside a git repository, skipping git init",
                target_dir.display()
            );
            return;
        }

        log::info!("Initializing a new git repository...");
        if let Err(e) = self.initial_commit(target_dir) {
            log::warn!("Unable to initialize git repository for your project: {e}");
        }
    }

    fn initial_commit(&self, target_dir: &Path) -> Result<()> {
        let message = format!("--message={INITIAL_COMMIT_MESSAGE}");
        self.runner.run("git", &["init"], target_dir)?;
        self.runner.run("git", &["add", "."], target_dir)?;
        self.runner.run("git", &["commit", &message, "--no-gpg-sign"], target_dir)?;
        Ok(())
    }
}

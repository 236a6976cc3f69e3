use std::borrow::Cow;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};

use crate::error::{Error, Result};

/// Runs external commands on behalf of the installer.
///
/// The seam exists so bootstrap steps can be exercised without touching real tools.
pub trait CommandRunner {
    /// Runs `command` with `args` inside `cwd` and returns its standard output.
    fn run(&self, command: &str, args: &[&str], cwd: &Path) -> Result<String>;
}

/// Runs commands as child processes.
///
/// - stdin is closed
/// - stderr is inherited so error output streams live to the user
/// - stdout is piped and buffered until the process exits
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &str, args: &[&str], cwd: &Path) -> Result<String> {
        log::debug!("Running '{} {}' in {}", command, args.join(" "), cwd.display());

        let mut child = Command::new(command)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| Error::CommandSpawnError {
                command: command.to_string(),
                source,
            })?;

        // Drain stdout before waiting for the process to complete
        let mut buffer = Vec::new();
        let read = match child.stdout.take() {
            Some(stdout) => BufReader::new(stdout).read_to_end(&mut buffer),
            None => Ok(0),
        };
        let status = reap(&mut child, read, &buffer)?;

        let decoded = String::from_utf8_lossy(&buffer);
        if matches!(decoded, Cow::Owned(_)) {
            log::warn!("'{command}' emitted non-UTF8 stdout; performing lossy conversion");
        }

        if !status.success() {
            flush_captured(&buffer)?;
            return Err(Error::CommandFailed {
                command: command.to_string(),
                status: status.code(),
            });
        }

        Ok(decoded.into_owned())
    }
}

/// Waits for `child` even when reading its stdout failed, then reports the read failure.
fn reap(child: &mut Child, read: std::io::Result<usize>, captured: &[u8]) -> Result<ExitStatus> {
    let status = child.wait();
    if let Err(e) = read {
        flush_captured(captured)?;
        return Err(e.into());
    }
    Ok(status?)
}

/// Surfaces whatever a failed command printed before failing.
fn flush_captured(buffer: &[u8]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(buffer)?;
    stdout.flush()?;
    Ok(())
}

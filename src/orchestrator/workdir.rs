//! Scoped change of the process working directory.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Enters a directory and returns to the previous one when dropped.
///
/// The working directory is process-wide state: only one guard should be
/// live at a time.
#[derive(Debug)]
#[must_use = "the previous directory is restored when the guard is dropped"]
pub struct WorkingDirGuard {
    previous: PathBuf,
}

impl WorkingDirGuard {
    /// Change into `dir`, remembering the current directory.
    pub fn enter(dir: &Path) -> io::Result<Self> {
        let previous = env::current_dir()?;
        env::set_current_dir(dir)?;
        tracing::debug!(from = %previous.display(), to = %dir.display(), "entered directory");
        Ok(Self { previous })
    }

    /// Directory that will be restored.
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            tracing::error!(
                path = %self.previous.display(),
                error = %e,
                "failed to restore working directory"
            );
        }
    }
}

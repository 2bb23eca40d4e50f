//! Output tracking for all-or-nothing runs.

use std::path::{Path, PathBuf};

use tracing::warn;

/// Records every file a run writes so a failed run can take them back.
///
/// The pipeline merges all nerve roots into one final mesh, so there is no
/// meaningful partial result: either the full output set exists or none of
/// it should.
#[derive(Debug, Default)]
pub(crate) struct OutputGuard {
    written: Vec<PathBuf>,
}

impl OutputGuard {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Remember a file written by the current run.
    pub(crate) fn track(&mut self, path: &Path) {
        self.written.push(path.to_path_buf());
    }

    /// Remove everything written so far (best effort, logged).
    pub(crate) fn discard(&self) {
        for path in &self.written {
            if let Err(e) = std::fs::remove_file(path) {
                warn!(path = %path.display(), error = %e, "could not remove partial output");
            } else {
                warn!(path = %path.display(), "removed partial output");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn discard_removes_tracked_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let kept = dir.path().join("kept.stl");
        let tracked = dir.path().join("tracked.stl");
        std::fs::write(&kept, b"x").expect("write");
        std::fs::write(&tracked, b"x").expect("write");

        let mut guard = OutputGuard::new();
        guard.track(&tracked);
        guard.discard();

        assert!(kept.exists());
        assert!(!tracked.exists());
    }

    #[test]
    fn discard_tolerates_missing_files() {
        let mut guard = OutputGuard::new();
        guard.track(Path::new("never_written.stl"));
        guard.discard(); // must not panic
    }
}

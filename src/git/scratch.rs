use crate::error::{GlocError, Result};
use crate::git::GitRepo;
use std::path::Path;
use tempfile::TempDir;
use tracing::{debug, warn};

/// A repository cloned into a private temporary directory.
///
/// The directory and everything checked out into it is removed when the
/// value is dropped, on success and on error paths alike.
pub struct ScratchClone {
    repo: GitRepo,
    dir: TempDir,
}

impl ScratchClone {
    pub fn clone_from(location: &str) -> Result<Self> {
        Self::clone_from_in(location, &std::env::temp_dir())
    }

    /// Like [`ScratchClone::clone_from`], with the scratch directory created
    /// inside `parent`.
    pub fn clone_from_in(location: &str, parent: &Path) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("gloc-")
            .tempdir_in(parent)
            .map_err(|e| GlocError::Clone {
                location: location.to_string(),
                reason: format!("could not create scratch directory: {e}"),
            })?;
        debug!(dir = %dir.path().display(), "cloning {location}");

        let repo = GitRepo::clone_into(location, dir.path())?;
        Ok(Self { repo, dir })
    }

    pub fn repo(&self) -> &GitRepo {
        &self.repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Remove the scratch directory now, reporting failures instead of
    /// ignoring them as `Drop` does.
    pub fn close(self) -> Result<()> {
        let Self { repo, dir } = self;
        drop(repo);
        let path = dir.path().to_path_buf();
        dir.close().map_err(|e| {
            warn!(dir = %path.display(), "failed to remove scratch directory: {e}");
            GlocError::Io(e)
        })
    }
}

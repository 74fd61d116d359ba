use crate::error::{GlocError, Result};
use crate::model::CommitInfo;
use crate::util::{short_id, timestamp_from_secs};
use gix::objs::tree::EntryKind;
use gix::{ObjectId, Repository};
use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository whose working tree is at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = gix::open(path.as_ref())?;
        Ok(Self::from_repository(repo))
    }

    /// Clone `location` (URL or local path) into the empty directory `dest`
    /// and check out its default branch.
    pub fn clone_into(location: &str, dest: &Path) -> Result<Self> {
        let clone_error = |reason: String| GlocError::Clone {
            location: location.to_string(),
            reason,
        };

        let mut prepare = gix::prepare_clone(location, dest).map_err(|e| clone_error(e.to_string()))?;
        let (mut checkout, _) = prepare
            .fetch_then_checkout(gix::progress::Discard, &gix::interrupt::IS_INTERRUPTED)
            .map_err(|e| clone_error(e.to_string()))?;
        let (repo, _) = checkout
            .main_worktree(gix::progress::Discard, &gix::interrupt::IS_INTERRUPTED)
            .map_err(|e| clone_error(e.to_string()))?;

        Ok(Self::from_repository(repo))
    }

    fn from_repository(repo: Repository) -> Self {
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        Self { repo, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Short name of the branch HEAD points at.
    pub fn active_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        let branch = head
            .referent_name()
            .map(|name| name.shorten().to_string())
            .ok_or(GlocError::NoActiveBranch)?;
        Ok(branch)
    }

    /// Every commit reachable from HEAD, newest first by committer time.
    ///
    /// An unborn branch yields an empty list.
    pub fn collect_commits(&self) -> Result<Vec<CommitInfo>> {
        let mut head = self.repo.head()?;
        if head.is_unborn() {
            return Ok(Vec::new());
        }
        let head_commit = head.peel_to_commit_in_place()?;

        let mut commits = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let timestamp = timestamp_from_secs(commit.time()?.seconds)?;

            commits.push(CommitInfo {
                id: commit_id,
                short_id: short_id(&commit_id),
                timestamp,
            });

            for pid in commit.parent_ids() {
                stack.push_back(pid.into());
            }
        }

        // Stable sort keeps discovery order between commits with equal times.
        commits.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(commits)
    }

    /// Make the working tree match `commit` exactly, removing anything the
    /// commit's tree does not contain. The `.git` directory is left alone.
    pub fn checkout(&self, commit: &CommitInfo) -> Result<()> {
        self.materialize(commit).map_err(|e| match e {
            GlocError::Checkout { .. } => e,
            other => GlocError::Checkout {
                commit: commit.id.to_string(),
                reason: other.to_string(),
            },
        })?;
        debug!(commit = %commit.short_id, "working tree checked out");
        Ok(())
    }

    fn materialize(&self, commit: &CommitInfo) -> Result<()> {
        let workdir = self.repo.workdir().ok_or_else(|| GlocError::Checkout {
            commit: commit.id.to_string(),
            reason: "repository has no working tree".to_string(),
        })?;

        let tree = self.repo.find_commit(commit.id)?.tree()?;
        let mut recorder = gix::traverse::tree::Recorder::default();
        tree.traverse().breadthfirst(&mut recorder).map_err(|e| GlocError::Checkout {
            commit: commit.id.to_string(),
            reason: e.to_string(),
        })?;

        clear_worktree(workdir)?;

        for entry in recorder.records {
            let target = workdir.join(gix::path::from_bstring(entry.filepath));
            match entry.mode.kind() {
                EntryKind::Tree | EntryKind::Commit => fs::create_dir_all(&target)?,
                EntryKind::Blob | EntryKind::BlobExecutable => {
                    let blob = self.repo.find_object(entry.oid)?;
                    write_file(&target, &blob.data)?;
                }
                EntryKind::Link => {
                    let blob = self.repo.find_object(entry.oid)?;
                    write_link(&target, &blob.data)?;
                }
            }
        }

        Ok(())
    }
}

fn clear_worktree(workdir: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(workdir)? {
        let entry = entry?;
        if entry.file_name() == ".git" {
            continue;
        }
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

fn write_file(target: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, data)
}

#[cfg(unix)]
fn write_link(target: &Path, data: &[u8]) -> std::io::Result<()> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    std::os::unix::fs::symlink(OsStr::from_bytes(data), target)
}

// Without symlink support the link target is stored as file content, as git
// does with `core.symlinks=false`.
#[cfg(not(unix))]
fn write_link(target: &Path, data: &[u8]) -> std::io::Result<()> {
    write_file(target, data)
}

/*!
 * Core types and data structures for the exporta application
 */

use std::fmt;
use std::path::PathBuf;

/// Version-control status of a discovered file
///
/// Only the states the changed-files export cares about are represented;
/// deletions, renames and conflicted entries are filtered out upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsStatus {
    /// Staged as new in the index
    Added,
    /// Modified in the index or the worktree
    Modified,
    /// Staged as new and modified again in the worktree
    AddedModified,
    /// Present in the worktree but unknown to the index
    Untracked,
}

impl VcsStatus {
    /// Short status code as printed by `git status --porcelain`
    pub fn code(&self) -> &'static str {
        match self {
            VcsStatus::Added => "A",
            VcsStatus::Modified => "M",
            VcsStatus::AddedModified => "AM",
            VcsStatus::Untracked => "??",
        }
    }
}

impl fmt::Display for VcsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A file selected for export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the scan root (or git workdir)
    pub path: PathBuf,
    /// Version-control status, when discovery went through git
    pub status: Option<VcsStatus>,
}

impl FileEntry {
    /// Entry produced by a directory walk
    pub fn walked(path: PathBuf) -> Self {
        Self { path, status: None }
    }

    /// Entry produced by a git status query
    pub fn changed(path: PathBuf, status: VcsStatus) -> Self {
        Self {
            path,
            status: Some(status),
        }
    }
}

/// A file whose content could not be read during emission
#[derive(Debug, Clone)]
pub struct ReadFailure {
    /// Path as listed in the report index
    pub path: String,
    /// Error text written into the inline marker
    pub message: String,
}

/*!
 * Git status queries for the changed-files export
 */

use std::path::{Path, PathBuf};

use git2::{Repository as Git2Repository, Status, StatusOptions};

use super::error::{GitError, GitResult};
use crate::types::{FileEntry, VcsStatus};

/// Local repository handle used by the changed-files export
pub struct GitRepo {
    /// Inner git2 repository instance
    inner: Git2Repository,
    /// Working directory the status paths are relative to
    workdir: PathBuf,
}

impl GitRepo {
    /// Discover the repository containing `path`
    pub fn discover(path: &Path) -> GitResult<Self> {
        let repo = Git2Repository::discover(path).map_err(GitError::OpenError)?;
        let workdir = repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| GitError::BareRepository(path.display().to_string()))?;

        Ok(Self {
            inner: repo,
            workdir,
        })
    }

    /// Working directory of the repository
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// List added/modified/untracked files, workdir-relative, in status order
    pub fn changed_files(&self) -> GitResult<Vec<FileEntry>> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.recurse_untracked_dirs(true);
        opts.include_ignored(false);

        let statuses = self
            .inner
            .statuses(Some(&mut opts))
            .map_err(GitError::StatusError)?;

        let mut entries = Vec::new();
        for entry in statuses.iter() {
            let Some(path) = entry.path() else { continue };
            if let Some(status) = classify(entry.status()) {
                entries.push(FileEntry::changed(PathBuf::from(path), status));
            }
        }

        Ok(entries)
    }
}

/// Map git2 status flags onto the porcelain codes the export keeps
///
/// Reconstructs the two-column short format; anything other than A, M, AM
/// or ?? (deletions, renames, MM, conflicts) is dropped.
pub(crate) fn classify(status: Status) -> Option<VcsStatus> {
    let index = if status.is_index_new() {
        'A'
    } else if status.is_index_modified() {
        'M'
    } else if status.is_index_deleted() {
        'D'
    } else if status.is_index_renamed() {
        'R'
    } else if status.is_index_typechange() {
        'T'
    } else {
        ' '
    };

    let worktree = if status.is_wt_new() {
        '?'
    } else if status.is_wt_modified() {
        'M'
    } else if status.is_wt_deleted() {
        'D'
    } else if status.is_wt_renamed() {
        'R'
    } else if status.is_wt_typechange() {
        'T'
    } else {
        ' '
    };

    match (index, worktree) {
        (' ', '?') => Some(VcsStatus::Untracked),
        ('A', ' ') => Some(VcsStatus::Added),
        ('A', 'M') => Some(VcsStatus::AddedModified),
        ('M', ' ') | (' ', 'M') => Some(VcsStatus::Modified),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_keeps_exported_statuses() {
        assert_eq!(classify(Status::WT_NEW), Some(VcsStatus::Untracked));
        assert_eq!(classify(Status::INDEX_NEW), Some(VcsStatus::Added));
        assert_eq!(
            classify(Status::INDEX_NEW | Status::WT_MODIFIED),
            Some(VcsStatus::AddedModified)
        );
        assert_eq!(classify(Status::WT_MODIFIED), Some(VcsStatus::Modified));
        assert_eq!(classify(Status::INDEX_MODIFIED), Some(VcsStatus::Modified));
    }

    #[test]
    fn test_classify_drops_other_statuses() {
        // MM, deletions, renames and clean entries are not exported
        assert_eq!(classify(Status::INDEX_MODIFIED | Status::WT_MODIFIED), None);
        assert_eq!(classify(Status::WT_DELETED), None);
        assert_eq!(classify(Status::INDEX_DELETED), None);
        assert_eq!(classify(Status::INDEX_RENAMED), None);
        assert_eq!(classify(Status::CURRENT), None);
    }
}

/*!
 * File discovery and filtering
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glob_match::glob_match;
use ignore::WalkBuilder;
use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::git::GitRepo;
use crate::types::FileEntry;
use crate::utils::{has_reserved_prefix, IGNORED_DIRS, IGNORED_FILES};

/// Scanner for export candidates
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Walk the target directory and return the filtered entries, sorted by path
    pub fn scan(&self) -> Result<Vec<FileEntry>> {
        self.progress.set_message(format!(
            "Scanning directory: {}",
            self.config.target_dir.display()
        ));

        let root = self.config.target_dir.clone();
        let mut files = if self.config.respect_gitignore {
            self.walk_with_gitignore(&root)
        } else {
            self.walk(&root)
        };

        // Index order of the report: plain byte-wise path sort
        files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

        Ok(files.into_iter().map(FileEntry::walked).collect())
    }

    /// Query version control for changed files and return the filtered
    /// entries, rebased onto the target directory, in status order
    pub fn scan_changed(&self) -> Result<Vec<FileEntry>> {
        self.progress.set_message("Querying repository status".to_string());

        let repo = GitRepo::discover(&self.config.target_dir)?;
        let target = fs::canonicalize(&self.config.target_dir)?;
        let workdir = fs::canonicalize(repo.workdir())?;

        let mut entries = Vec::new();
        for entry in repo.changed_files()? {
            // Status paths are workdir-relative; keep only files inside the
            // target directory and list them relative to it.
            let abs = workdir.join(&entry.path);
            let Ok(rel) = abs.strip_prefix(&target) else {
                continue;
            };
            if self.should_ignore(rel) || !self.should_include(rel) {
                continue;
            }
            entries.push(FileEntry {
                path: rel.to_path_buf(),
                status: entry.status,
            });
        }

        Ok(entries)
    }

    /// Check if a file should be excluded from every listing
    pub fn should_ignore(&self, path: &Path) -> bool {
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();

        if IGNORED_FILES.contains(file_name.as_ref()) {
            return true;
        }

        // Never re-export a previous report
        if has_reserved_prefix(&file_name) {
            return true;
        }

        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| glob_match(pattern, &file_name))
    }

    /// Check if a file should be included based on patterns
    pub fn should_include(&self, path: &Path) -> bool {
        // If no include patterns, include everything
        if self.config.include_patterns.is_empty() {
            return true;
        }

        let file_name = path.file_name().unwrap_or_default().to_string_lossy();

        self.config
            .include_patterns
            .iter()
            .any(|pattern| glob_match(pattern, &file_name))
    }

    /// Recursive walk with ignored folders pruned before descent
    fn walk(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_entry(keep_walkdir_entry)
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| !self.should_ignore(e.path()) && self.should_include(e.path()))
            .map(|e| {
                e.path()
                    .strip_prefix(root)
                    .unwrap_or_else(|_| e.path())
                    .to_path_buf()
            })
            .collect()
    }

    /// Walk honoring .gitignore files on top of the static folder list
    fn walk_with_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        let mut builder = WalkBuilder::new(root);
        builder.hidden(false);

        // Use custom gitignore file if specified
        if let Some(gitignore_path) = &self.config.gitignore_path {
            builder.add_ignore(gitignore_path);
        }

        builder.filter_entry(keep_ignore_entry);

        builder
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().map_or(false, |ft| ft.is_file()))
            .filter(|e| !self.should_ignore(e.path()) && self.should_include(e.path()))
            .map(|e| {
                e.path()
                    .strip_prefix(root)
                    .unwrap_or_else(|_| e.path())
                    .to_path_buf()
            })
            .collect()
    }
}

fn keep_walkdir_entry(entry: &walkdir::DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    !IGNORED_DIRS.contains(name.as_ref())
}

fn keep_ignore_entry(entry: &ignore::DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    if !entry.file_type().map_or(false, |ft| ft.is_dir()) {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    !IGNORED_DIRS.contains(name.as_ref())
}

/*!
 * Error types for Git operations
 */

use thiserror::Error;

/// Errors that can occur during Git operations
#[derive(Error, Debug)]
pub enum GitError {
    /// Error opening a Git repository
    #[error("Failed to open repository: {0}")]
    OpenError(git2::Error),

    /// Error reading the repository status
    #[error("Failed to read repository status: {0}")]
    StatusError(git2::Error),

    /// The repository has no working directory to export from
    #[error("Repository is bare, nothing to export: {0}")]
    BareRepository(String),

    /// Git2 error (generic)
    #[error("Git error: {0}")]
    Git2Error(#[from] git2::Error),

    /// IO error during Git operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Specialized Result type for Git operations
pub type GitResult<T> = Result<T, GitError>;

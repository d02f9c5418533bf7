/*!
 * Exporta - Export project file snapshots as timestamped text reports
 *
 * This library backs three small command-line utilities that write an
 * index plus the concatenated text contents of a project's files into a
 * single report file, either for the whole tree or for the files the
 * version control status marks as changed.
 */

pub mod config;
pub mod error;
pub mod git;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config, ExportKind};
pub use error::{ExportaError, Result};
pub use report::{ExportReport, FileReportInfo, ReportFormat, Reporter};
pub use scanner::Scanner;
pub use types::{FileEntry, ReadFailure, VcsStatus};
pub use writer::{ReportWriter, WriteOutcome};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/*!
 * Configuration handling for exporta
 */

use std::path::PathBuf;

use chrono::{DateTime, Local};
use clap::Parser;

use crate::error::Result;
use crate::{ensure, utils};

/// The three export variants shipped as separate binaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Files changed per version-control status, with contents
    Changed,
    /// Entire directory tree, with contents
    Full,
    /// Entire directory tree, index only
    Map,
}

impl ExportKind {
    /// Prefix of the generated report file name
    pub fn output_prefix(&self) -> &'static str {
        match self {
            ExportKind::Changed => "alterados",
            ExportKind::Full => "mapa_completo",
            ExportKind::Map => "mapa_arquivos",
        }
    }
}

/// Command-line arguments shared by the export binaries
#[derive(Parser, Debug, Clone)]
#[clap(
    version = env!("CARGO_PKG_VERSION"),
    about = "Export project file snapshots as timestamped text reports"
)]
pub struct Args {
    /// Target directory to process
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Directory the report file is written to (defaults to the target directory)
    #[clap(long)]
    pub output_dir: Option<String>,

    /// Comma-separated list of patterns to ignore
    #[clap(long, value_delimiter = ',')]
    pub ignore_patterns: Vec<String>,

    /// Comma-separated list of patterns to include (if specified, only matching files are included)
    #[clap(long, value_delimiter = ',')]
    pub include_patterns: Vec<String>,

    /// Respect .gitignore files in the target directory
    #[clap(long)]
    pub respect_gitignore: bool,

    /// Path to custom .gitignore file
    #[clap(long)]
    pub gitignore_path: Option<String>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to process
    pub target_dir: PathBuf,

    /// Which report this run produces
    pub kind: ExportKind,

    /// Directory the report file is written to
    pub output_dir: PathBuf,

    /// Patterns to ignore
    pub ignore_patterns: Vec<String>,

    /// Patterns to include (if empty, include all)
    pub include_patterns: Vec<String>,

    /// Whether to respect .gitignore files
    pub respect_gitignore: bool,

    /// Path to custom .gitignore file
    pub gitignore_path: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args, kind: ExportKind) -> Self {
        let target_dir = PathBuf::from(args.directory_path);
        let output_dir = args
            .output_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| target_dir.clone());

        Self {
            target_dir,
            kind,
            output_dir,
            ignore_patterns: args.ignore_patterns,
            include_patterns: args.include_patterns,
            respect_gitignore: args.respect_gitignore,
            gitignore_path: args.gitignore_path.map(PathBuf::from),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.is_dir(),
            PathNotFound,
            "Target directory not found: {}",
            self.target_dir.display()
        );

        ensure!(
            self.output_dir.is_dir(),
            PathNotFound,
            "Output directory not found: {}",
            self.output_dir.display()
        );

        if let Some(path) = &self.gitignore_path {
            ensure!(
                path.exists(),
                PathNotFound,
                "Custom .gitignore file not found: {}",
                path.display()
            );
        }

        Ok(())
    }

    /// Report file path for a run started at `now`
    pub fn output_file(&self, now: &DateTime<Local>) -> PathBuf {
        self.output_dir.join(format!(
            "{}_{}.txt",
            self.kind.output_prefix(),
            utils::file_timestamp(now)
        ))
    }
}

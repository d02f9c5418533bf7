/*!
 * Text report emission for exporta
 */

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use indicatif::ProgressBar;

use crate::config::{Config, ExportKind};
use crate::error::Result;
use crate::report::FileReportInfo;
use crate::types::{FileEntry, ReadFailure};
use crate::utils;

/// What a report run produced
#[derive(Debug, Clone, Default)]
pub struct WriteOutcome {
    /// Path of the report file
    pub output_file: PathBuf,
    /// Number of files listed or exported
    pub files_processed: usize,
    /// Total number of lines written from file contents
    pub total_lines: usize,
    /// Total number of characters written from file contents
    pub total_chars: usize,
    /// Details for each exported file
    pub file_details: HashMap<String, FileReportInfo>,
    /// Files whose content could not be read
    pub failures: Vec<ReadFailure>,
}

/// Report writer producing the timestamped output file
pub struct ReportWriter {
    /// Writer configuration
    config: Config,
    /// Progress bar
    progress: Arc<ProgressBar>,
}

impl ReportWriter {
    /// Create a new report writer
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Write the report for `entries`
    ///
    /// `tree` is the extra full-map index embedded in the changed-files
    /// report; other kinds ignore it. Individual read failures are recorded
    /// in the outcome and never abort the run.
    pub fn write(&self, entries: &[FileEntry], tree: Option<&[FileEntry]>) -> Result<WriteOutcome> {
        let now = Local::now();
        let output_file = self.config.output_file(&now);

        let file = File::create(&output_file)?;
        let mut out = BufWriter::new(file);
        let mut outcome = WriteOutcome {
            output_file: output_file.clone(),
            ..Default::default()
        };

        writeln!(out, "{}", utils::header_line(&now))?;

        match self.config.kind {
            ExportKind::Changed => {
                writeln!(out, "Mapeamento de arquivos alterados/adicionados:")?;
                write_index(&mut out, entries)?;
                writeln!(out)?;

                writeln!(out, "Mapeamento completo de arquivos (com pastas e subpastas):")?;
                write_index(&mut out, tree.unwrap_or_default())?;
                writeln!(out)?;
                writeln!(out)?;

                self.write_contents(&mut out, entries, &mut outcome)?;
            }
            ExportKind::Full => {
                writeln!(out, "Mapeamento completo de arquivos (com pastas e subpastas):")?;
                write_index(&mut out, entries)?;
                writeln!(out)?;
                writeln!(out)?;

                self.write_contents(&mut out, entries, &mut outcome)?;
            }
            ExportKind::Map => {
                writeln!(out, "Mapeamento completo de arquivos (com pastas e subpastas):")?;
                write_index(&mut out, entries)?;
                outcome.files_processed = entries.len();
            }
        }

        out.flush()?;
        Ok(outcome)
    }

    /// Write the numbered content sections, one per entry
    fn write_contents<W: Write>(
        &self,
        out: &mut W,
        entries: &[FileEntry],
        outcome: &mut WriteOutcome,
    ) -> Result<()> {
        for (idx, entry) in entries.iter().enumerate() {
            let path_str = entry.path.display().to_string();

            self.progress.inc(1);
            self.progress
                .set_message(format!("Current file: {}", truncate_name(&path_str)));

            writeln!(out, "--- [{}] {} ---", idx + 1, path_str)?;

            match fs::read_to_string(self.config.target_dir.join(&entry.path)) {
                Ok(content) => {
                    let lines = content.lines().count();
                    let chars = content.chars().count();
                    out.write_all(content.as_bytes())?;

                    outcome.total_lines += lines;
                    outcome.total_chars += chars;
                    outcome
                        .file_details
                        .insert(path_str, FileReportInfo { lines, chars });
                }
                Err(e) => {
                    writeln!(out, "[Erro ao ler o arquivo: {}]", e)?;
                    outcome.failures.push(ReadFailure {
                        path: path_str.clone(),
                        message: e.to_string(),
                    });
                    outcome
                        .file_details
                        .insert(path_str, FileReportInfo::default());
                }
            }

            outcome.files_processed += 1;
            write!(out, "\n\n")?;
        }

        Ok(())
    }
}

/// Write the enumerated path listing
fn write_index<W: Write>(out: &mut W, entries: &[FileEntry]) -> Result<()> {
    for (idx, entry) in entries.iter().enumerate() {
        writeln!(out, "{}. {}", idx + 1, entry.path.display())?;
    }
    Ok(())
}

/// Truncate a path for the progress message to avoid display issues
fn truncate_name(name: &str) -> String {
    let count = name.chars().count();
    if count > 40 {
        let tail: String = name.chars().skip(count - 37).collect();
        format!("...{}", tail)
    } else {
        name.to_string()
    }
}

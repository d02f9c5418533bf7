/*!
 * File map export: enumerated index of the tree, no contents, no pause
 */

use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use exporta::config::{Args, Config, ExportKind};
use exporta::report::{ExportReport, ReportFormat, Reporter};
use exporta::scanner::Scanner;
use exporta::writer::ReportWriter;

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Create configuration
    let config = Config::from_args(args, ExportKind::Map);

    // Validate configuration
    config.validate()?;

    // Create progress bar (spinner only; there are no content sections)
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg:.dim.white}")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));

    let progress = Arc::new(progress);
    let scanner = Scanner::new(config.clone(), Arc::clone(&progress));
    let writer = ReportWriter::new(config, Arc::clone(&progress));

    let start_time = Instant::now();

    let entries = scanner.scan()?;
    let outcome = writer.write(&entries, None)?;
    let total_duration = start_time.elapsed();

    progress.finish_and_clear();

    // Print the run summary and exit without waiting
    let report = ExportReport::from_outcome(&outcome, total_duration);
    Reporter::new(ReportFormat::ConsoleTable).print_report(&report);

    Ok(())
}

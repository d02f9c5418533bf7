/*!
 * Full export: index plus the contents of every readable file
 */

use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use exporta::config::{Args, Config, ExportKind};
use exporta::report::{ExportReport, ReportFormat, Reporter};
use exporta::scanner::Scanner;
use exporta::utils::wait_for_enter;
use exporta::writer::ReportWriter;

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Create configuration
    let config = Config::from_args(args, ExportKind::Full);

    // Validate configuration
    config.validate()?;

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Exporting");

    let progress = Arc::new(progress);
    let scanner = Scanner::new(config.clone(), Arc::clone(&progress));
    let writer = ReportWriter::new(config, Arc::clone(&progress));

    // Start timing both scan and write operations
    let start_time = Instant::now();

    // Discover files, then emit the report
    let entries = scanner.scan()?;
    progress.set_length(entries.len() as u64);

    let outcome = writer.write(&entries, None)?;
    let total_duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    // Print the run summary
    let report = ExportReport::from_outcome(&outcome, total_duration);
    Reporter::new(ReportFormat::ConsoleTable).print_report(&report);

    if outcome.failures.is_empty() {
        println!("\nTodos os arquivos foram processados corretamente!");
        wait_for_enter("Pressione Enter para sair...")?;
    } else {
        println!("\nOs seguintes arquivos tiveram erro ao serem processados:");
        for failure in &outcome.failures {
            println!("- {}", failure.path);
        }
        wait_for_enter("Pressione Enter para continuar...")?;
    }

    Ok(())
}

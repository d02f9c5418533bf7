/*!
 * End-to-end tests for the export pipeline
 */

use std::fs;
use std::sync::Arc;

use clap::Parser;
use indicatif::ProgressBar;
use tempfile::tempdir;

use exporta::config::{Args, Config, ExportKind};
use exporta::scanner::Scanner;
use exporta::writer::ReportWriter;

fn pipeline(config: &Config) -> (Scanner, ReportWriter) {
    let progress = Arc::new(ProgressBar::hidden());
    let scanner = Scanner::new(config.clone(), Arc::clone(&progress));
    let writer = ReportWriter::new(config.clone(), progress);
    (scanner, writer)
}

#[test]
fn full_export_of_two_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "first\n").unwrap();
    fs::write(dir.path().join("b.txt"), "second\n").unwrap();

    let args = Args::try_parse_from(["exportar-tudo", dir.path().to_str().unwrap()]).unwrap();
    let config = Config::from_args(args, ExportKind::Full);
    config.validate().unwrap();

    let (scanner, writer) = pipeline(&config);
    let entries = scanner.scan().unwrap();
    let outcome = writer.write(&entries, None).unwrap();
    let content = fs::read_to_string(&outcome.output_file).unwrap();

    let name = outcome.output_file.file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("mapa_completo_"));
    assert!(name.ends_with(".txt"));

    assert!(content.starts_with("Data de exportação: "));
    assert!(content.contains("1. a.txt\n2. b.txt\n"));
    assert!(content.contains("--- [1] a.txt ---\nfirst\n"));
    assert!(content.contains("--- [2] b.txt ---\nsecond\n"));
    assert!(outcome.failures.is_empty());
    assert_eq!(outcome.files_processed, 2);
}

#[test]
fn map_export_writes_index_only() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "first\n").unwrap();

    let args = Args::try_parse_from(["mapear-arquivos", dir.path().to_str().unwrap()]).unwrap();
    let config = Config::from_args(args, ExportKind::Map);
    config.validate().unwrap();

    let (scanner, writer) = pipeline(&config);
    let entries = scanner.scan().unwrap();
    let outcome = writer.write(&entries, None).unwrap();
    let content = fs::read_to_string(&outcome.output_file).unwrap();

    assert!(content.contains("1. a.txt\n"));
    assert!(!content.contains("--- ["));
}

#[test]
fn previous_reports_are_not_reexported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "first\n").unwrap();

    let args = Args::try_parse_from(["exportar-tudo", dir.path().to_str().unwrap()]).unwrap();
    let config = Config::from_args(args, ExportKind::Full);

    let (scanner, writer) = pipeline(&config);
    let entries = scanner.scan().unwrap();
    writer.write(&entries, None).unwrap();

    // The freshly written report sits in the scanned directory now; a
    // second discovery pass must not pick it up.
    let entries = scanner.scan().unwrap();
    let listed: Vec<String> = entries
        .iter()
        .map(|e| e.path.display().to_string())
        .collect();
    assert_eq!(listed, vec!["a.txt".to_string()]);
}

#[test]
fn rerun_in_same_minute_overwrites_the_report() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "first\n").unwrap();

    let args = Args::try_parse_from(["exportar-tudo", dir.path().to_str().unwrap()]).unwrap();
    let config = Config::from_args(args, ExportKind::Full);

    let (scanner, writer) = pipeline(&config);
    let entries = scanner.scan().unwrap();
    let first = writer.write(&entries, None).unwrap();
    let second = writer.write(&entries, None).unwrap();

    // Name collision within the same minute is accepted: the second run
    // simply rewrites the file. (The timestamps can straddle a minute
    // boundary, in which case two reports exist.)
    if first.output_file == second.output_file {
        let content = fs::read_to_string(&second.output_file).unwrap();
        assert!(content.contains("--- [1] a.txt ---\nfirst\n"));
    } else {
        assert!(first.output_file.exists());
        assert!(second.output_file.exists());
    }
}

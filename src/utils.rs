/*!
 * Utility functions for exporta
 */

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;

/// Folder names pruned before the walk descends into them
pub static IGNORED_DIRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        // Version control
        ".git",
        ".github",
        ".svn",
        ".hg",
        // Dependencies and build output
        "node_modules",
        "dist",
        "target",
        "__pycache__",
        "venv",
        ".venv",
        // IDEs
        ".idea",
        ".vscode",
        // Prior export archives
        "ARQUIVOS",
    ])
});

/// File names excluded from every listing
pub static IGNORED_FILES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([".DS_Store", "Thumbs.db", "desktop.ini"])
});

/// Report name prefixes; files starting with these are never re-exported
pub const RESERVED_PREFIXES: [&str; 2] = ["mapa_", "alterados_"];

/// Check whether a file name carries a reserved report prefix
pub fn has_reserved_prefix(file_name: &str) -> bool {
    RESERVED_PREFIXES.iter().any(|p| file_name.starts_with(p))
}

/// Timestamp fragment used in output file names (`DD-MM_HH-MM`)
pub fn file_timestamp(now: &DateTime<Local>) -> String {
    now.format("%d-%m_%H-%M").to_string()
}

/// Localized header line written at the top of every report
pub fn header_line(now: &DateTime<Local>) -> String {
    now.format("Data de exportação: %d/%m às %H:%M").to_string()
}

/// Print a prompt and block until the user presses Enter
pub fn wait_for_enter(prompt: &str) -> io::Result<()> {
    print!("\n{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

//! Terminal output utilities

use console::style;

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}: {}", style("error").red().bold(), message);
}

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", style("warning").yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}: {}", style("success").green().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{}: {}", style("info").blue().bold(), message);
}

/// Print packages one per line, numbered from 1
pub fn print_numbered(packages: &[String]) {
    let width = packages.len().to_string().len();
    for (i, pkg) in packages.iter().enumerate() {
        println!("{:>width$}. {}", i + 1, pkg, width = width);
    }
}

/// Print a value as pretty JSON to stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

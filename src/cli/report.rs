//! Output formatting for CLI commands.
//!
//! Kept apart from the commands so the formatting can be tested against any
//! writer.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{ResourceScanWarning, SupportedLanguage};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the language table to stdout.
pub fn print_languages(languages: &[SupportedLanguage]) {
    print_languages_to(languages, &mut io::stdout().lock());
}

/// Print the language table to a custom writer.
///
/// Tokens are padded to a common display width so names line up.
pub fn print_languages_to<W: Write>(languages: &[SupportedLanguage], writer: &mut W) {
    let width = languages
        .iter()
        .map(|l| UnicodeWidthStr::width(l.as_str()))
        .max()
        .unwrap_or(0);

    for language in languages {
        let token = language.as_str();
        let padding = width - UnicodeWidthStr::width(token);
        let _ = writeln!(
            writer,
            "{}{:padding$}  {}",
            token.bold(),
            "",
            language.display_name(),
            padding = padding
        );
    }
}

/// Print resource files that could not be loaded.
pub fn print_scan_warnings(warnings: &[ResourceScanWarning], verbose: bool) {
    print_scan_warnings_to(warnings, verbose, &mut io::stderr().lock());
}

/// Print scan warnings to a custom writer.
///
/// Without `verbose` only a count is shown.
pub fn print_scan_warnings_to<W: Write>(
    warnings: &[ResourceScanWarning],
    verbose: bool,
    writer: &mut W,
) {
    if warnings.is_empty() {
        return;
    }

    if !verbose {
        let _ = writeln!(
            writer,
            "{} {} resource file(s) could not be loaded (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
        return;
    }

    for warning in warnings {
        let _ = writeln!(
            writer,
            "{} {}",
            "warning:".bold().yellow(),
            warning.file_path
        );
        let _ = writeln!(writer, "  {} {}", "=".blue(), warning.error);
    }
}

/// Print a missing-key notice to stderr.
pub fn print_missing_key(key: &str, language: &str) {
    print_missing_key_to(key, language, &mut io::stderr().lock());
}

pub fn print_missing_key_to<W: Write>(key: &str, language: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!("No translation for \"{}\" in {}", key, language).red()
    );
}

/// Print an unknown-locale notice listing what is available.
pub fn print_missing_locale<'a>(locale: &str, available: impl Iterator<Item = &'a str>) {
    print_missing_locale_to(locale, available, &mut io::stderr().lock());
}

pub fn print_missing_locale_to<'a, W: Write>(
    locale: &str,
    available: impl Iterator<Item = &'a str>,
    writer: &mut W,
) {
    let available = available.collect::<Vec<_>>().join(", ");
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!("No resources for locale \"{}\"", locale).red()
    );
    let _ = writeln!(writer, "  {} available: {}", "=".blue(), available);
}

pub fn print_success(message: &str) {
    println!("{} {}", SUCCESS_MARK.green(), message.green());
}

//! Output formatting for the CLI.
//!
//! Separate from core logic to allow langjs to be used as a library.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::core::GenerationReport;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

/// Print the one-line summary after the output file is written.
pub fn print_success(target: &Path, report: &GenerationReport) {
    print_success_to(target, report, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(target: &Path, report: &GenerationReport, writer: &mut W) {
    let files = report.merged.len();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Created {} ({} {} from {} {})",
            target.display(),
            report.message_count,
            plural(report.message_count, "message", "messages"),
            files,
            plural(files, "file", "files"),
        )
        .green()
    );
}

/// Print per-file details to stderr.
pub fn print_details(source_root: &Path, report: &GenerationReport) {
    print_details_to(source_root, report, &mut io::stderr().lock());
}

pub fn print_details_to<W: Write>(source_root: &Path, report: &GenerationReport, writer: &mut W) {
    let relative = |path: &Path| {
        path.strip_prefix(source_root)
            .unwrap_or(path)
            .display()
            .to_string()
    };

    for file in &report.merged {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {})",
            "merged".bold().cyan(),
            relative(&file.path),
            format!("[{}.{}]", file.locale, file.group_id).dimmed(),
            file.key_count,
            plural(file.key_count, "key", "keys"),
        );
    }

    for path in &report.filtered {
        let _ = writeln!(
            writer,
            "{} {} (not in group filter)",
            "filtered".bold().blue(),
            relative(path)
        );
    }

    for path in &report.skipped {
        let _ = writeln!(
            writer,
            "{} {} (not a translation file)",
            "skipped".bold().dimmed(),
            relative(path)
        );
    }

    for key in &report.overwritten {
        let _ = writeln!(
            writer,
            "{} \"{}\" defined more than once, last definition wins",
            "warning:".bold().yellow(),
            key
        );
    }
}

/// Warn when nothing was bundled; usually a wrong source path or filter.
pub fn print_empty_warning(report: &GenerationReport) {
    print_empty_warning_to(report, &mut io::stderr().lock());
}

pub fn print_empty_warning_to<W: Write>(report: &GenerationReport, writer: &mut W) {
    if report.message_count == 0 {
        let _ = writeln!(
            writer,
            "{} no messages found (check the source directory and group filter)",
            "warning:".bold().yellow()
        );
    }
}

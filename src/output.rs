//! CLI output formatting for all subcommands.
//!
//! # Information-First Display
//!
//! `check` output is information-centric: each category leads with its
//! positional index, name, and figure count, followed by its (truncated)
//! description and the derived figure titles, with file names shown as
//! indented `Source:` lines.
//!
//! ```text
//! Categories
//! 001 bp_nk_sync (2 figures)
//!     Biopac, NK (iEEG) and behavioural data synchronisation proce...
//!     001 a - Synchronization Story
//!         Source: a_sync_story.html
//!     002 b Timeline - Pre-sync
//!         Source: b_timeline_presync.html
//! 002 emp_vs_bp (0 figures)
//!     Comparative analysis between Empatica wearable sensors and B...
//! ```
//!
//! `build` output is one `wrote <path>` line per listing file plus a
//! summary; `rename` output is one old → new line per mapping plus a
//! completion line annotated for dry runs.
//!
//! # Architecture
//!
//! Each subcommand has a `format_*` function (returns lines) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::generate::BuildReport;
use crate::rename::Mapping;
use crate::scan::Manifest;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

// ============================================================================
// check
// ============================================================================

/// Format the discovered category/figure inventory.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Categories".to_string());

    for (i, category) in manifest.categories.iter().enumerate() {
        lines.push(format!(
            "{} {} ({} figures)",
            format_index(i + 1),
            category.name,
            category.figures.len()
        ));

        let desc = truncate_desc(category.description.trim(), 60);
        if !desc.is_empty() {
            lines.push(format!("    {}", desc));
        }

        for (j, figure) in category.figures.iter().enumerate() {
            lines.push(format!("    {} {}", format_index(j + 1), figure.title));
            lines.push(format!("        Source: {}", figure.filename));
        }
    }

    lines
}

/// Print check output to stdout.
pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

/// Format build output: one line per written file, then the summary.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .written
        .iter()
        .map(|path| format!("wrote {}", path.display()))
        .collect();
    lines.push(format!(
        "Rebuilt root index + {} category pages",
        report.categories
    ));
    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// rename
// ============================================================================

/// Format one rename mapping as an old → new line.
pub fn format_rename_line(mapping: &Mapping, dry_run: bool) -> String {
    let from = mapping
        .from
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| mapping.from.display().to_string());
    let to = mapping
        .to
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| mapping.to.display().to_string());

    if dry_run {
        format!("[dry-run] {} \u{2192} {}", from, to)
    } else {
        format!("renaming {} \u{2192} {}", from, to)
    }
}

/// Format the rename completion line.
pub fn format_rename_summary(dry_run: bool) -> String {
    if dry_run {
        "Completed (dry-run, nothing changed)".to_string()
    } else {
        "Completed".to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

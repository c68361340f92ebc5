//! Sequential renaming of figure files.
//!
//! Normalizes a flat directory of Plotly `.html` files into an anonymized
//! naming scheme, `PR07-file<NNN>.<ext>`, destroying whatever identifying
//! information (patient codes, dates) the original names carried.
//!
//! Renaming is two-phase: [`plan`] computes the full old→new mapping as a
//! pure function of the sorted directory listing, and [`apply`] executes it.
//! The dry-run mode prints the plan without touching the filesystem.
//!
//! Sequence numbers follow sorted discovery order, so the mapping is
//! deterministic for a fixed file set — and shifts wholesale when files are
//! added or removed between runs. There is no stable per-file identity and
//! no rollback: a rename failure aborts mid-run, leaving earlier renames in
//! place.

use crate::output;
use crate::scan::is_page_file;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("data directory not found: {0}")]
    DataDirMissing(PathBuf),
    #[error("no page files found in {0}")]
    NoPageFiles(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Prefix for anonymized file names: `PR07-file001.html`, `PR07-file002.html`, ...
pub const SEQUENCE_PREFIX: &str = "PR07-file";

/// One planned rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Compute the rename plan for all page files directly in `data_dir`.
///
/// Files are sorted by name; the file at 1-based sorted position `i` maps to
/// `PR07-file<i:03>.<original extension>`. Fails without touching anything
/// if the directory is missing or holds no page files.
pub fn plan(data_dir: &Path) -> Result<Vec<Mapping>, RenameError> {
    if !data_dir.is_dir() {
        return Err(RenameError::DataDirMissing(data_dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(data_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_page_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    if files.is_empty() {
        return Err(RenameError::NoPageFiles(data_dir.to_path_buf()));
    }

    let mappings = files
        .into_iter()
        .enumerate()
        .map(|(i, from)| {
            // is_page_file guarantees an extension
            let ext = from
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default();
            let new_name = format!("{}{:03}.{}", SEQUENCE_PREFIX, i + 1, ext);
            let to = from.with_file_name(new_name);
            Mapping { from, to }
        })
        .collect();

    Ok(mappings)
}

/// Execute a rename plan, printing each mapping as it is processed.
///
/// In dry-run mode nothing on disk changes. In live mode each rename is
/// applied in plan order; the first failure aborts the run with earlier
/// renames left in place.
pub fn apply(mappings: &[Mapping], dry_run: bool) -> Result<(), RenameError> {
    for mapping in mappings {
        println!("{}", output::format_rename_line(mapping, dry_run));
        if !dry_run {
            fs::rename(&mapping.from, &mapping.to)?;
        }
    }
    println!("{}", output::format_rename_summary(dry_run));
    Ok(())
}

//! Filesystem scanning and manifest generation.
//!
//! Walks the data directory to discover categories and their figure files,
//! producing the structured manifest that `check` prints and `build` renders.
//!
//! ## Directory Structure
//!
//! ```text
//! data/                            # Data root
//! ├── config.toml                  # Site configuration (optional)
//! ├── bp_nk_sync/                  # Category
//! │   ├── index.html               # Generated listing page (never a figure)
//! │   ├── hr_sync_story.html       # Figure
//! │   └── eda_timeline_presync.html
//! └── emp_vs_bp/                   # Category with no figures yet
//! ```
//!
//! ## Discovery Rules
//!
//! - Every first-level directory is a category, including empty ones.
//! - Figures are the `.html` files directly inside a category, excluding
//!   the generated `index.html` so a rebuild never indexes its own output.
//! - Categories and figures are both sorted lexicographically by name.
//! - No recursion: subdirectories inside a category are ignored.

use crate::config::{self, SiteConfig};
use crate::generate::INDEX_FILE;
use crate::titles;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("data directory not found: {0}")]
    DataDirMissing(PathBuf),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Everything one build run knows about the data directory.
#[derive(Debug)]
pub struct Manifest {
    pub categories: Vec<Category>,
    pub config: SiteConfig,
}

/// A first-level directory under the data root.
#[derive(Debug, Clone)]
pub struct Category {
    /// Directory name — display title and relative URL segment.
    pub name: String,
    /// Resolved description (mapped, or the configured fallback).
    pub description: String,
    /// Figures directly inside this category, sorted by file name.
    pub figures: Vec<Figure>,
}

/// A figure file discovered inside a category.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// File name relative to the category directory.
    pub filename: String,
    /// Display title derived from the file name stem.
    pub title: String,
}

/// Extension identifying Plotly page files.
const PAGE_EXTENSION: &str = "html";

/// True for files the index and the renamer treat as page files.
pub(crate) fn is_page_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case(PAGE_EXTENSION))
        .unwrap_or(false)
}

/// Scan the data directory into a [`Manifest`].
///
/// Fails before any other work if the data directory is missing, so a bad
/// invocation never produces partial output.
pub fn scan(data_dir: &Path) -> Result<Manifest, ScanError> {
    if !data_dir.is_dir() {
        return Err(ScanError::DataDirMissing(data_dir.to_path_buf()));
    }

    let config = config::load_config(data_dir)?;

    let mut categories = Vec::new();
    for dir in list_category_dirs(data_dir)? {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let figures = list_figures(&dir)?;
        let description = config.description_for(&name).to_string();
        categories.push(Category {
            name,
            description,
            figures,
        });
    }

    Ok(Manifest { categories, config })
}

/// First-level directories under the data root, sorted by name.
fn list_category_dirs(data_dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(data_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

/// Page files directly inside a category, sorted by name.
///
/// The generated listing page is excluded so regeneration never links to
/// itself.
fn list_figures(category_dir: &Path) -> Result<Vec<Figure>, ScanError> {
    let mut figures = Vec::new();
    for entry in WalkDir::new(category_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_page_file(entry.path()) {
            continue;
        }
        let filename = entry.file_name().to_string_lossy().into_owned();
        if filename == INDEX_FILE {
            continue;
        }
        let stem = entry
            .path()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        figures.push(Figure {
            title: titles::derive_title(&stem),
            filename,
        });
    }
    Ok(figures)
}

//! Shared test utilities for the figdex test suite.
//!
//! Provides a canonical fixture tree plus lookup helpers over the scan
//! manifest. Fixtures are built programmatically in a temp directory so
//! every test gets an isolated copy it can mutate freely.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::scan::{Category, Manifest};

/// Build the canonical sample tree and return `(tempdir, data_dir)`.
///
/// ```text
/// <tmp>/data/
/// ├── bp_nk_sync/
/// │   ├── a_sync_story.html
/// │   └── b_timeline_presync.html
/// └── emp_vs_bp/
/// ```
///
/// Keep the `TempDir` alive for the duration of the test — dropping it
/// deletes the tree.
pub fn sample_data_dir() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("data");

    let bp = data.join("bp_nk_sync");
    fs::create_dir_all(&bp).unwrap();
    fs::write(bp.join("a_sync_story.html"), "<html></html>").unwrap();
    fs::write(bp.join("b_timeline_presync.html"), "<html></html>").unwrap();

    fs::create_dir_all(data.join("emp_vs_bp")).unwrap();

    (tmp, data)
}

/// A fixed date for assertions on the generated footer.
pub fn fixed_date() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2021, 6, 15).unwrap()
}

/// Find a category by name. Panics with the available names on a miss.
pub fn find_category<'a>(manifest: &'a Manifest, name: &str) -> &'a Category {
    manifest
        .categories
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| {
            let names: Vec<&str> = manifest
                .categories
                .iter()
                .map(|c| c.name.as_str())
                .collect();
            panic!("category '{name}' not found. Available: {names:?}")
        })
}

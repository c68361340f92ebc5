//! # figdex
//!
//! A minimal static index generator for Plotly figure archives.
//! Your filesystem is the data source: first-level directories under the
//! data root are categories, and the Plotly `.html` files inside each
//! category become the linked figures.
//!
//! # Architecture: Scan, Then Render
//!
//! A build is a single synchronous pass:
//!
//! ```text
//! 1. Scan      data/      →  Manifest      (filesystem → structured data)
//! 2. Generate  Manifest   →  index pages   (root index + one per category)
//! ```
//!
//! The scan produces an in-memory [`scan::Manifest`] that rendering consumes.
//! Keeping the two apart means `figdex check` can print the discovered
//! structure without writing anything, and unit tests can exercise rendering
//! against hand-built manifests without touching the filesystem.
//!
//! A second, independent tool shares the binary: `figdex rename` normalizes
//! a flat directory of figure files into an anonymized sequential naming
//! scheme, destroying whatever identifying information the original names
//! carried. It never runs as part of a build.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the data directory, discovers categories and figures, produces the manifest |
//! | [`titles`] | Marker-based rewrite rules that turn figure file names into display titles |
//! | [`generate`] | Renders the root index and per-category listing pages with Maud |
//! | [`rename`] | Plans and applies the sequential rename scheme, with a dry-run mode |
//! | [`config`] | `config.toml` loading: site text and the category description mapping |
//! | [`output`] | CLI output formatting — pure `format_*` functions plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, and every interpolation is escaped by default — a
//! category directory named `<script>` ends up as text, not markup.
//!
//! ## Deterministic Ordering
//!
//! Platform directory iteration order is not guaranteed, so every listing is
//! explicitly sorted by name. Two runs against the same tree produce the same
//! pages (modulo the dated footer) and the same rename mapping.
//!
//! ## One Level, No Recursion
//!
//! Categories are exactly the first-level directories and figures are exactly
//! the files directly inside them. Subdirectories inside a category are
//! ignored. Deeper nesting is a deliberate non-feature, not an oversight.

pub mod config;
pub mod generate;
pub mod output;
pub mod rename;
pub mod scan;
pub mod titles;

#[cfg(test)]
pub(crate) mod test_helpers;

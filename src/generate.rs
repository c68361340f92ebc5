//! HTML index generation.
//!
//! Takes the scan manifest and writes the static listing pages: one root
//! index linking to every category, and one listing page per category
//! linking to its figures.
//!
//! ## Generated Pages
//!
//! - **Root index** (`index.html`, beside the data directory): site heading,
//!   intro paragraph, one card per category with its description and an
//!   `Explore →` link.
//! - **Category pages** (`data/{category}/index.html`): category heading and
//!   description, a list of figure links (or a placeholder when the category
//!   is empty), a back-link to the root index, and a dated footer.
//!
//! Existing listing files are overwritten unconditionally; a build always
//! reflects the current filesystem state.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping, so
//! category and figure names containing reserved characters render as text.
//! The shared stylesheet is embedded at compile time and inlined into every
//! page, keeping each generated file self-contained.

use crate::config::SiteConfig;
use crate::scan::{Category, Manifest};
use chrono::NaiveDate;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// File name of every generated listing page.
pub const INDEX_FILE: &str = "index.html";

const CSS: &str = include_str!("../static/style.css");

/// What a build run wrote, in write order.
#[derive(Debug)]
pub struct BuildReport {
    /// Paths of all written listing files (category pages, then root index).
    pub written: Vec<PathBuf>,
    /// Number of category pages written.
    pub categories: usize,
}

/// Write all listing pages for the manifest.
///
/// Category pages land inside their category directories; the root index
/// lands beside the data directory. `today` is stamped into every footer —
/// passed in by the caller so rendering stays a pure function of its inputs.
pub fn generate(
    manifest: &Manifest,
    data_dir: &Path,
    today: NaiveDate,
) -> Result<BuildReport, GenerateError> {
    let mut written = Vec::new();

    for category in &manifest.categories {
        let page = render_category_page(category, &manifest.config, today);
        let path = data_dir.join(&category.name).join(INDEX_FILE);
        fs::write(&path, page.into_string())?;
        written.push(path);
    }

    let data_dir_name = data_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| crate::config::DEFAULT_DATA_DIR.to_string());
    let root_page = render_root_page(manifest, &data_dir_name, today);
    let root_path = match data_dir.parent() {
        Some(parent) => parent.join(INDEX_FILE),
        None => PathBuf::from(INDEX_FILE),
    };
    fs::write(&root_path, root_page.into_string())?;
    written.push(root_path);

    Ok(BuildReport {
        written,
        categories: manifest.categories.len(),
    })
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure shared by all listing pages.
fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                div.container {
                    (content)
                }
            }
        }
    }
}

/// Renders the dated footer shown on every page.
fn footer(today: NaiveDate) -> Markup {
    html! {
        div.footer {
            small { "Last updated " (today) }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the root index with one card per category.
pub fn render_root_page(manifest: &Manifest, data_dir_name: &str, today: NaiveDate) -> Markup {
    let config = &manifest.config;
    let title = format!("{} – {}", config.site_name, config.tagline);

    let content = html! {
        h1 { (config.heading) }
        div.intro {
            p { (config.intro) }
        }
        h2 { "Projects" }
        div.category-grid {
            @for category in &manifest.categories {
                div.category-card {
                    h3 { (category.name) }
                    p { (category.description) }
                    a href={ (data_dir_name) "/" (category.name) "/" } { "Explore →" }
                }
            }
        }
        (footer(today))
    };

    base_document(&title, content)
}

/// Renders a category listing page with one link per figure.
pub fn render_category_page(category: &Category, config: &SiteConfig, today: NaiveDate) -> Markup {
    let title = format!("{} – {}", category.name, config.site_name);

    let content = html! {
        h1 { (category.name) }
        div.intro {
            p { (category.description) }
        }
        h2 { "Available Figures" }
        ul.figure-list {
            @if category.figures.is_empty() {
                li { em { "No figures available yet" } }
            } @else {
                @for figure in &category.figures {
                    li {
                        a href=(figure.filename) { (figure.title) }
                    }
                }
            }
        }
        div.back-link {
            a href="../../index.html" { "← Back to Categories" }
        }
        (footer(today))
    };

    base_document(&title, content)
}

// ============================================================================
// Tests
// ============================================================================

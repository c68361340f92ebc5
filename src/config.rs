//! Site configuration module.
//!
//! Handles loading `config.toml` from the data directory root. Configuration
//! covers the site text shown on the root index and the category
//! name→description mapping; everything has compiled-in defaults, so the
//! file is optional and may override just the values it names.
//!
//! ## Config File Location
//!
//! Place `config.toml` directly inside the data directory:
//!
//! ```text
//! data/
//! ├── config.toml          # Optional — overrides the defaults below
//! ├── bp_nk_sync/
//! │   └── ...
//! └── emp_vs_bp/
//!     └── ...
//! ```
//!
//! The file itself is never treated as a category or a figure: only
//! directories become categories, and the renamer matches on the page
//! extension.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_name = "DBS Peripheral Phys"
//! tagline = "Interactive Data Visualisations"
//! heading = "DBS Peripheral Physiology"
//! intro = "Multimodal data collection and visualisation of peripheral physiological data during deep brain stimulation monitoring research."
//!
//! # Shown for any category missing from [descriptions]
//! fallback_description = "Interactive data visualisations and analysis results."
//!
//! [descriptions]
//! bp_nk_sync = "Biopac, NK (iEEG) and behavioural data synchronisation process to align data streams."
//! emp_vs_bp = "Comparative analysis between Empatica wearable sensors and Bioac laboratory measurements for physiological monitoring validation."
//! ```
//!
//! A `[descriptions]` table in the file replaces the default mapping
//! wholesale rather than merging into it. Unknown keys are rejected to
//! catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default data directory, relative to the current working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Config file name looked up inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults matching the deployed archive. User config files
/// need only specify the values they want to override. Unknown keys are
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Short site name, used in page `<title>` text.
    #[serde(default = "default_site_name")]
    pub site_name: String,
    /// Tagline appended to the root page `<title>`.
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// Heading shown at the top of the root index.
    #[serde(default = "default_heading")]
    pub heading: String,
    /// Introductory paragraph on the root index.
    #[serde(default = "default_intro")]
    pub intro: String,
    /// Description shown for categories missing from `descriptions`.
    #[serde(default = "default_fallback_description")]
    pub fallback_description: String,
    /// Category name → description mapping.
    #[serde(default = "default_descriptions")]
    pub descriptions: BTreeMap<String, String>,
}

fn default_site_name() -> String {
    "DBS Peripheral Phys".to_string()
}

fn default_tagline() -> String {
    "Interactive Data Visualisations".to_string()
}

fn default_heading() -> String {
    "DBS Peripheral Physiology".to_string()
}

fn default_intro() -> String {
    "Multimodal data collection and visualisation of peripheral physiological \
     data during deep brain stimulation monitoring research."
        .to_string()
}

fn default_fallback_description() -> String {
    "Interactive data visualisations and analysis results.".to_string()
}

fn default_descriptions() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "bp_nk_sync".to_string(),
            "Biopac, NK (iEEG) and behavioural data synchronisation process \
             to align data streams."
                .to_string(),
        ),
        (
            "emp_vs_bp".to_string(),
            "Comparative analysis between Empatica wearable sensors and Bioac \
             laboratory measurements for physiological monitoring validation."
                .to_string(),
        ),
    ])
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            tagline: default_tagline(),
            heading: default_heading(),
            intro: default_intro(),
            fallback_description: default_fallback_description(),
            descriptions: default_descriptions(),
        }
    }
}

impl SiteConfig {
    /// Look up the description for a category name, falling back to the
    /// generic description for unmapped names.
    pub fn description_for(&self, name: &str) -> &str {
        self.descriptions
            .get(name)
            .map(String::as_str)
            .unwrap_or(&self.fallback_description)
    }
}

/// Load site config from `config.toml` in the data directory.
///
/// Uses defaults if the file doesn't exist.
pub fn load_config(data_dir: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = data_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_toml() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();

        assert_eq!(config.site_name, "DBS Peripheral Phys");
        assert_eq!(config.heading, "DBS Peripheral Physiology");
        assert!(config.descriptions.contains_key("bp_nk_sync"));
        assert!(config.descriptions.contains_key("emp_vs_bp"));
    }

    #[test]
    fn description_for_mapped_category() {
        let config = SiteConfig::default();
        assert!(
            config
                .description_for("bp_nk_sync")
                .contains("synchronisation")
        );
    }

    #[test]
    fn description_for_unmapped_category_uses_fallback() {
        let config = SiteConfig::default();
        assert_eq!(
            config.description_for("brand_new_project"),
            "Interactive data visualisations and analysis results."
        );
    }

    #[test]
    fn partial_config_overrides_only_named_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"heading = "My Research Figures""#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.heading, "My Research Figures");
        // Untouched fields keep their defaults
        assert_eq!(config.site_name, "DBS Peripheral Phys");
        assert!(config.descriptions.contains_key("emp_vs_bp"));
    }

    #[test]
    fn descriptions_table_replaces_default_mapping() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "[descriptions]\nmy_cat = \"My category.\"\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.description_for("my_cat"), "My category.");
        // Replaced, not merged: the stock entries are gone
        assert_eq!(
            config.description_for("bp_nk_sync"),
            config.fallback_description
        );
    }

    #[test]
    fn unknown_keys_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "headng = \"typo\"").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "not toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }
}

//! Site configuration module.
//!
//! Handles loading and validating the site's `config.toml`. The file lives
//! in the site root, next to the download directory and the template page:
//!
//! ```text
//! site/
//! ├── config.toml          # Site config (optional)
//! ├── index.html           # Template page with generated-list markers
//! └── download/            # Release artifacts
//!     └── app_dev_20251010_c101_v1.1.70_release.apk
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! prefix = "app"             # Filename prefix release artifacts must carry
//! icon = "📱"                # Glyph shown in release cards and the header
//! display_name_ko = "데모 앱" # Product name used in cards, title, header
//! download_dir = "download"  # Artifact directory, relative to the site root
//! page = "index.html"        # Template page rewritten in place
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Filename prefix that release artifacts must carry to be listed.
    pub prefix: String,
    /// Glyph inserted into release cards and the page header. May be empty,
    /// in which case the header drops the glyph entirely.
    pub icon: String,
    /// Human-readable product name used in cards, page title, and header.
    pub display_name_ko: String,
    /// Directory of release artifacts, relative to the site root. Also the
    /// link path prefix in rendered download buttons.
    pub download_dir: String,
    /// Template page rewritten in place, relative to the site root.
    pub page: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            prefix: "app".to_string(),
            icon: "📱".to_string(),
            display_name_ko: "데모 앱".to_string(),
            download_dir: "download".to_string(),
            page: "index.html".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::Validation("prefix must not be empty".into()));
        }
        if self.download_dir.is_empty() {
            return Err(ConfigError::Validation(
                "download_dir must not be empty".into(),
            ));
        }
        if self.page.is_empty() {
            return Err(ConfigError::Validation("page must not be empty".into()));
        }
        Ok(())
    }
}

/// Load config from `config.toml` in the given directory.
///
/// Returns the stock defaults when no file exists. Rejects unknown keys and
/// validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# apk-index Configuration
# =======================
#
# Place this file as config.toml in the site root (next to index.html and
# the download/ directory). All options are optional; defaults shown.

# Filename prefix release artifacts must carry. Only files named
# {prefix}_{dev|stg}_{YYYYMMDD}_c{build}_v{x}.{y}.{z}_release.apk are listed.
prefix = "app"

# Glyph inserted into release cards and the page header.
# Set to "" to drop the glyph from the header.
icon = "📱"

# Human-readable product name used in release cards, the page <title>,
# and the header <h1>.
display_name_ko = "데모 앱"

# Directory of release artifacts, relative to the site root. Also used as
# the link path prefix in rendered download buttons (./download/<file>).
download_dir = "download"

# Template page rewritten in place, relative to the site root.
page = "index.html"
"##
}

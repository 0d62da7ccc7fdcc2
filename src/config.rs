//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an mdsplit.toml, and if present we load settings from there.
//! This provides the output locations and URL layout, which command line flags can override.

use facet::Facet;
use std::fs;
use std::path::Path;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "mdsplit.toml";

/// Default directory for split files.
pub const DEFAULT_OUTPUT_DIR: &str = "docs";
/// Default TOC location.
pub const DEFAULT_TOC_FILE: &str = "llms.txt";
/// Default scheme and host for TOC links.
pub const DEFAULT_URL_PREFIX: &str = "https://example.com";
/// Default path the split files are served from.
pub const DEFAULT_BASE_PATH: &str = "/docs";
/// Default split level, every heading.
pub const DEFAULT_MAX_LEVEL: u8 = 6;

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from mdsplit.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_OUTPUT_DIR.to_string())]
    /// Directory the section files are written to.
    pub output_dir: String,
    #[facet(default = DEFAULT_TOC_FILE.to_string())]
    /// Path of the generated table of contents.
    pub toc_file: String,
    #[facet(default = DEFAULT_URL_PREFIX.to_string())]
    /// Scheme and host prepended to every TOC link.
    pub url_prefix: String,
    #[facet(default = DEFAULT_BASE_PATH.to_string())]
    /// Path segment between the prefix and the filename.
    pub base_path: String,
    #[facet(default = DEFAULT_MAX_LEVEL)]
    /// Deepest heading level that starts its own file.
    pub max_level: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            toc_file: DEFAULT_TOC_FILE.to_string(),
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            max_level: DEFAULT_MAX_LEVEL,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from mdsplit.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => {
                log::debug!("Loaded configuration from {}", path.display());
                config
            }
            Err(_) => {
                log::warn!("Ignoring {}: not a valid configuration", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;

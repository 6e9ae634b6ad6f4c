//! Boot configuration.

use std::path::{Path, PathBuf};

/// Environment variable overriding the asset directory.
pub const ASSET_DIR_ENV: &str = "INTERLEXI_ASSET_DIR";

const DEFAULT_ASSET_DIR: &str = "assets";
const CATALOG_FILE: &str = "data.json";
const FONT_FILE: &str = "fonts/arial.ttf";
const LOGO_FILE: &str = "logo/logo.png";

/// Where the app finds its bundled resources.
///
/// Asset names are relative to `asset_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub asset_dir: PathBuf,
    pub catalog_file: PathBuf,
    pub font_file: PathBuf,
    pub logo_file: PathBuf,
}

impl AppConfig {
    /// Default asset layout rooted at `asset_dir`.
    pub fn with_asset_dir(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            catalog_file: PathBuf::from(CATALOG_FILE),
            font_file: PathBuf::from(FONT_FILE),
            logo_file: PathBuf::from(LOGO_FILE),
        }
    }

    /// Reads `INTERLEXI_ASSET_DIR`, falling back to `./assets`.
    ///
    /// Blank values are treated as unset.
    pub fn from_env() -> Self {
        Self::with_asset_dir(resolve_asset_dir(std::env::var(ASSET_DIR_ENV).ok()))
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.asset_dir.join(&self.catalog_file)
    }
}

fn resolve_asset_dir(raw: Option<String>) -> PathBuf {
    match raw {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value.trim()),
        _ => Path::new(DEFAULT_ASSET_DIR).to_path_buf(),
    }
}

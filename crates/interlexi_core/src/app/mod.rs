//! App bootstrap.
//!
//! # Responsibility
//! - Run one-time process initialization before navigation starts.
//! - Load the catalog exactly once and share it with every screen.
//!
//! # Invariants
//! - Boot either returns a fully built app or a `DataLoadError`.
//! - Missing decorative assets become warnings, never boot failures.

mod config;

pub use config::{AppConfig, ASSET_DIR_ENV};

use crate::assets::{register_display_font, AssetKind, AssetLocator, FontRegistration};
use crate::catalog::{load_catalog, DataLoadResult};
use crate::model::catalog::Catalog;
use crate::nav::Navigator;
use log::info;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// A booted phrasebook session.
#[derive(Debug)]
pub struct PhrasebookApp {
    config: AppConfig,
    catalog: Arc<Catalog>,
    font: FontRegistration,
    navigator: Navigator,
    warnings: Vec<String>,
}

impl PhrasebookApp {
    /// Resolves assets, registers the font, loads the catalog and builds
    /// every screen.
    ///
    /// # Errors
    /// - Any `DataLoadError` from reading the catalog file.
    pub fn boot(config: &AppConfig) -> DataLoadResult<Self> {
        let started_at = Instant::now();
        info!(
            "event=app_boot module=app status=start asset_dir={}",
            config.asset_dir.display()
        );

        let locator = AssetLocator::new(config.asset_dir.as_path());
        let font = register_display_font(&locator, config.font_file.as_path());
        let logo = locator.resolve(AssetKind::Logo, config.logo_file.as_path());

        let catalog = Arc::new(load_catalog(config.catalog_path())?);

        let warnings = [font.source.fallback(), logo.fallback()]
            .into_iter()
            .flatten()
            .map(ToString::to_string)
            .collect::<Vec<_>>();

        let navigator = Navigator::new(Arc::clone(&catalog), logo.path().map(Path::to_path_buf));

        info!(
            "event=app_boot module=app status=ok duration_ms={} topics={} warnings={}",
            started_at.elapsed().as_millis(),
            catalog.len(),
            warnings.len()
        );

        Ok(Self {
            config: config.clone(),
            catalog,
            font,
            navigator,
            warnings,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shared read-only catalog.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn font(&self) -> &FontRegistration {
        &self.font
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    /// Human-readable asset fallback notices collected during boot.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

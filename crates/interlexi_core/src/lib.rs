//! Core logic for the InterLexi Arabic phrasebook.
//! This crate owns the catalog invariants, text preparation and navigation;
//! UI shells only render what it produces.

pub mod app;
pub mod assets;
pub mod catalog;
pub mod logging;
pub mod model;
pub mod nav;
pub mod text;

pub use app::{AppConfig, PhrasebookApp, ASSET_DIR_ENV};
pub use assets::{AssetKind, AssetMissingError, AssetResolution, FontRegistration};
pub use catalog::{load_catalog, parse_catalog, DataLoadError, DataLoadResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::catalog::{Catalog, CatalogValidationError, Phrase, Topic, TopicId};
pub use nav::{
    NavEvent, NavigationError, Navigator, Screen, ScreenView, SlideDirection, TocEntry, TocView,
    TopicScreen,
};
pub use text::prepare_for_display;

/// Minimal health-check API for shell integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Bundled catalog loading.
//!
//! # Responsibility
//! - Read the bundled data file once and turn it into a validated `Catalog`.
//! - Classify every failure as a fatal `DataLoadError`.
//!
//! # Invariants
//! - No partial catalog is ever returned.
//! - Loading performs no retries; bundled data is trusted and local.

mod loader;

pub use loader::{load_catalog, parse_catalog, DataLoadError, DataLoadResult};

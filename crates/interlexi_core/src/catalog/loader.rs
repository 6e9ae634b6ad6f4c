use crate::model::catalog::{Catalog, CatalogDocument, CatalogValidationError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type DataLoadResult<T> = Result<T, DataLoadError>;

/// Fatal startup failure while reading the bundled catalog.
#[derive(Debug)]
pub enum DataLoadError {
    /// The data file does not exist.
    Missing(PathBuf),
    /// The data file exists but could not be read.
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The content is not JSON or does not match the expected shape.
    Malformed(serde_json::Error),
    /// The content parsed but violates catalog invariants.
    Invalid(CatalogValidationError),
}

impl DataLoadError {
    /// Stable machine-readable code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Missing(_) => "catalog_missing",
            Self::Unreadable { .. } => "catalog_unreadable",
            Self::Malformed(_) => "catalog_malformed",
            Self::Invalid(_) => "catalog_invalid",
        }
    }
}

impl Display for DataLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(path) => write!(f, "catalog file not found: {}", path.display()),
            Self::Unreadable { path, source } => {
                write!(f, "catalog file unreadable: {}: {source}", path.display())
            }
            Self::Malformed(err) => write!(f, "catalog content is malformed: {err}"),
            Self::Invalid(err) => write!(f, "catalog content is invalid: {err}"),
        }
    }
}

impl Error for DataLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Missing(_) => None,
            Self::Unreadable { source, .. } => Some(source),
            Self::Malformed(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DataLoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

impl From<CatalogValidationError> for DataLoadError {
    fn from(value: CatalogValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Reads and validates the catalog file at `path`.
///
/// # Side effects
/// - Emits `catalog_load` logging events with duration and status.
///
/// # Errors
/// - `Missing` when the file does not exist.
/// - `Unreadable` for any other I/O failure (including invalid UTF-8).
/// - `Malformed` / `Invalid` as documented on [`parse_catalog`].
pub fn load_catalog(path: impl AsRef<Path>) -> DataLoadResult<Catalog> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=catalog_load module=catalog status=start mode=file");

    let result = std::fs::read_to_string(path)
        .map_err(|err| match err.kind() {
            ErrorKind::NotFound => DataLoadError::Missing(path.to_path_buf()),
            _ => DataLoadError::Unreadable {
                path: path.to_path_buf(),
                source: err,
            },
        })
        .and_then(|raw| decode(raw.as_str()));

    log_outcome("file", started_at, &result);
    result
}

/// Parses and validates catalog JSON held in memory.
///
/// # Errors
/// - `Malformed` when the text is not JSON, `topics` is missing, a topic lacks
///   `id`/`name`/`phrases`, or a phrase lacks `text`/`translation`.
/// - `Invalid` when two topics share an id.
pub fn parse_catalog(json: &str) -> DataLoadResult<Catalog> {
    let started_at = Instant::now();
    info!("event=catalog_load module=catalog status=start mode=memory");
    let result = decode(json);
    log_outcome("memory", started_at, &result);
    result
}

fn decode(json: &str) -> DataLoadResult<Catalog> {
    let document: CatalogDocument = serde_json::from_str(json)?;
    Ok(Catalog::new(document.topics)?)
}

fn log_outcome(mode: &str, started_at: Instant, result: &DataLoadResult<Catalog>) {
    match result {
        Ok(catalog) => info!(
            "event=catalog_load module=catalog status=ok mode={} duration_ms={} topics={} phrases={}",
            mode,
            started_at.elapsed().as_millis(),
            catalog.len(),
            catalog.phrase_count()
        ),
        Err(err) => error!(
            "event=catalog_load module=catalog status=error mode={} duration_ms={} error_code={} error={}",
            mode,
            started_at.elapsed().as_millis(),
            err.code(),
            err
        ),
    }
}

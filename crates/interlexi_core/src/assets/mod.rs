//! Bundled asset resolution.
//!
//! # Responsibility
//! - Resolve asset paths relative to one asset directory.
//! - Degrade missing font/logo resources to the system default.
//!
//! # Invariants
//! - A missing decorative asset never aborts boot.
//! - Every fallback is logged and reported back to the caller.

use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Family name the display font is registered under.
pub const DISPLAY_FONT_FAMILY: &str = "Arial";

/// Kinds of optional bundled resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Font,
    Logo,
}

impl AssetKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Font => "font",
            Self::Logo => "logo",
        }
    }
}

/// Bundled resource that could not be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetMissingError {
    pub kind: AssetKind,
    pub path: PathBuf,
}

impl Display for AssetMissingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} asset not found: {}; using system default",
            self.kind.label(),
            self.path.display()
        )
    }
}

impl Error for AssetMissingError {}

/// Outcome of resolving one optional asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetResolution {
    Bundled(PathBuf),
    SystemDefault(AssetMissingError),
}

impl AssetResolution {
    /// Bundled path, or `None` when the system default is in effect.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Bundled(path) => Some(path.as_path()),
            Self::SystemDefault(_) => None,
        }
    }

    pub fn fallback(&self) -> Option<&AssetMissingError> {
        match self {
            Self::Bundled(_) => None,
            Self::SystemDefault(err) => Some(err),
        }
    }
}

/// Resolves asset names against an asset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLocator {
    root: PathBuf,
}

impl AssetLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Path of `relative` inside the asset directory. Does not touch disk.
    pub fn path_of(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Resolves an optional asset, falling back when the file is absent.
    pub fn resolve(&self, kind: AssetKind, relative: impl AsRef<Path>) -> AssetResolution {
        let path = self.path_of(relative);
        if path.is_file() {
            info!(
                "event=asset_resolve module=assets status=ok kind={} path={}",
                kind.label(),
                path.display()
            );
            return AssetResolution::Bundled(path);
        }

        let err = AssetMissingError { kind, path };
        warn!(
            "event=asset_resolve module=assets status=fallback kind={} error={}",
            kind.label(),
            err
        );
        AssetResolution::SystemDefault(err)
    }
}

/// Display font registration result for the UI shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRegistration {
    pub family: &'static str,
    pub source: AssetResolution,
}

/// Registers the bundled display font under [`DISPLAY_FONT_FAMILY`].
pub fn register_display_font(
    locator: &AssetLocator,
    relative: impl AsRef<Path>,
) -> FontRegistration {
    FontRegistration {
        family: DISPLAY_FONT_FAMILY,
        source: locator.resolve(AssetKind::Font, relative),
    }
}

#[cfg(test)]
mod tests {
    use super::{register_display_font, AssetKind, AssetLocator, AssetResolution};

    #[test]
    fn resolves_existing_file_as_bundled() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("logo")).unwrap();
        std::fs::write(dir.path().join("logo/logo.png"), b"png").unwrap();

        let locator = AssetLocator::new(dir.path());
        let resolution = locator.resolve(AssetKind::Logo, "logo/logo.png");
        assert_eq!(
            resolution,
            AssetResolution::Bundled(dir.path().join("logo/logo.png"))
        );
        assert!(resolution.fallback().is_none());
    }

    #[test]
    fn missing_font_falls_back_to_system_default() {
        let dir = tempfile::tempdir().unwrap();
        let locator = AssetLocator::new(dir.path());

        let registration = register_display_font(&locator, "fonts/arial.ttf");
        assert_eq!(registration.family, "Arial");
        assert!(registration.source.path().is_none());
        let err = registration.source.fallback().expect("fallback expected");
        assert_eq!(err.kind, AssetKind::Font);
        assert!(err.to_string().contains("system default"));
    }

    #[test]
    fn directories_do_not_count_as_assets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("fonts/arial.ttf")).unwrap();
        let locator = AssetLocator::new(dir.path());
        assert!(locator
            .resolve(AssetKind::Font, "fonts/arial.ttf")
            .fallback()
            .is_some());
    }
}

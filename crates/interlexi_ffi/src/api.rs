//! FFI use-case API for the Flutter shell.
//!
//! # Responsibility
//! - Expose boot, navigation taps and screen snapshots to Dart via FRB.
//! - Flatten core views into plain structs the shell can render directly.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - At most one app is booted per process; its catalog is loaded once.
//! - Failures come back as messages in the response envelope.

use interlexi_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    prepare_for_display as prepare_for_display_inner, AppConfig, NavEvent, PhrasebookApp,
    ScreenView, TopicId,
};
use log::error;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static APP: OnceLock<Mutex<PhrasebookApp>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory for rolling logs.
/// - Idempotent for the same `level + log_dir`; conflicting calls fail.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Shapes and reorders Arabic text for left-to-right glyph rendering.
#[flutter_rust_bridge::frb(sync)]
pub fn prepare_for_display(text: String) -> String {
    prepare_for_display_inner(text.as_str())
}

/// Result of booting the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootResponse {
    pub ok: bool,
    /// Human-readable outcome; "unable to load content: ..." on failure.
    pub message: String,
    pub topic_count: u32,
    /// Registered display font family.
    pub font_family: String,
    /// Bundled font path, `None` when the system default font is used.
    pub font_path: Option<String>,
    /// Asset fallback notices to surface to the user.
    pub warnings: Vec<String>,
}

impl BootResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            topic_count: 0,
            font_family: String::new(),
            font_path: None,
            warnings: Vec::new(),
        }
    }
}

/// One tappable row on the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocItem {
    /// Pass back to [`nav_select_topic`] when the row is tapped.
    pub topic_id: String,
    pub label: String,
}

/// Flattened view of the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSnapshot {
    /// `home|toc|topic`.
    pub kind: String,
    /// Set for `topic` screens.
    pub topic_id: Option<String>,
    pub title: String,
    /// Logo path on `home`, when bundled.
    pub logo_path: Option<String>,
    /// Primary button label on `home`.
    pub action_label: Option<String>,
    /// Back button label on `toc` and `topic`.
    pub back_label: Option<String>,
    /// Rows on `toc`.
    pub toc_items: Vec<TocItem>,
    /// Phrase lines on `topic`.
    pub phrase_lines: Vec<String>,
    /// Scrollable content height in layout units.
    pub layout_height: u32,
    /// `left|right` for the transition that produced this screen.
    pub slide: Option<String>,
}

/// Envelope for navigation calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavResponse {
    pub ok: bool,
    pub message: String,
    /// Current screen after the call; `None` only when the app is not booted.
    pub screen: Option<ScreenSnapshot>,
}

/// Boots the app from `asset_dir` (or `INTERLEXI_ASSET_DIR` / `./assets`
/// when blank).
///
/// # FFI contract
/// - Sync call; reads the catalog file on first success only.
/// - Idempotent for the same asset directory.
/// - Booting from a different directory after success fails.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn app_boot(asset_dir: String) -> BootResponse {
    let config = resolve_config(asset_dir.as_str());

    if let Some(response) = existing_boot(&config) {
        return response;
    }

    let app = match PhrasebookApp::boot(&config) {
        Ok(app) => app,
        Err(err) => {
            error!(
                "event=ffi_boot module=ffi status=error error_code={} error={}",
                err.code(),
                err
            );
            return BootResponse::failure(format!("unable to load content: {err}"));
        }
    };

    let response = boot_summary(&app, "App booted.");
    if APP.set(Mutex::new(app)).is_err() {
        // Lost a concurrent boot; report against whichever app won.
        return existing_boot(&config)
            .unwrap_or_else(|| BootResponse::failure("app_boot failed: state unavailable"));
    }
    response
}

/// "Go to Table of Contents" tap.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_view_contents() -> NavResponse {
    navigate(NavEvent::ViewContents)
}

/// Table-of-contents row tap for `topic_id`.
///
/// The id must be passed back exactly as a snapshot reported it.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_select_topic(topic_id: String) -> NavResponse {
    navigate(select_topic_event(topic_id))
}

/// "Back" tap.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_back() -> NavResponse {
    navigate(NavEvent::Back)
}

/// Snapshot of the current screen without changing it.
#[flutter_rust_bridge::frb(sync)]
pub fn current_screen() -> NavResponse {
    match with_app(|app| snapshot(app)) {
        Ok(screen) => NavResponse {
            ok: true,
            message: String::new(),
            screen: Some(screen),
        },
        Err(message) => NavResponse {
            ok: false,
            message,
            screen: None,
        },
    }
}

fn select_topic_event(topic_id: String) -> NavEvent {
    NavEvent::SelectTopic(TopicId::new(topic_id))
}

fn navigate(event: NavEvent) -> NavResponse {
    let outcome = with_app(|app| {
        let result = app
            .navigator_mut()
            .dispatch(event)
            .map(|_| ())
            .map_err(|err| err.to_string());
        Ok((result, snapshot(app)?))
    });

    match outcome {
        Ok((Ok(()), screen)) => NavResponse {
            ok: true,
            message: String::new(),
            screen: Some(screen),
        },
        Ok((Err(message), screen)) => NavResponse {
            ok: false,
            message,
            screen: Some(screen),
        },
        Err(message) => NavResponse {
            ok: false,
            message,
            screen: None,
        },
    }
}

fn resolve_config(asset_dir: &str) -> AppConfig {
    let trimmed = asset_dir.trim();
    if trimmed.is_empty() {
        AppConfig::from_env()
    } else {
        AppConfig::with_asset_dir(PathBuf::from(trimmed))
    }
}

fn existing_boot(config: &AppConfig) -> Option<BootResponse> {
    let app = APP.get()?;
    let response = match app.lock() {
        Ok(app) if app.config().asset_dir == config.asset_dir => {
            boot_summary(&app, "App already booted.")
        }
        Ok(app) => BootResponse::failure(format!(
            "app already booted from `{}`; refusing to switch to `{}`",
            app.config().asset_dir.display(),
            config.asset_dir.display()
        )),
        Err(_) => BootResponse::failure("app state is poisoned"),
    };
    Some(response)
}

fn boot_summary(app: &PhrasebookApp, message: &str) -> BootResponse {
    BootResponse {
        ok: true,
        message: message.to_string(),
        topic_count: u32::try_from(app.catalog().len()).unwrap_or(u32::MAX),
        font_family: app.font().family.to_string(),
        font_path: app
            .font()
            .source
            .path()
            .map(|path| path.display().to_string()),
        warnings: app.warnings().to_vec(),
    }
}

fn with_app<T>(f: impl FnOnce(&mut PhrasebookApp) -> Result<T, String>) -> Result<T, String> {
    let app = APP
        .get()
        .ok_or_else(|| "app not booted; call app_boot first".to_string())?;
    let mut guard = app
        .lock()
        .map_err(|_| "app state is poisoned".to_string())?;
    f(&mut guard)
}

fn snapshot(app: &PhrasebookApp) -> Result<ScreenSnapshot, String> {
    let navigator = app.navigator();
    let slide = navigator.last_slide().map(|slide| slide.label().to_string());
    let view = navigator.view().map_err(|err| {
        error!(
            "event=ffi_snapshot module=ffi status=error error={}",
            err
        );
        err.to_string()
    })?;

    let snapshot = match view {
        ScreenView::Home(home) => ScreenSnapshot {
            kind: "home".to_string(),
            topic_id: None,
            title: home.title.to_string(),
            logo_path: home.logo.as_ref().map(|path| path.display().to_string()),
            action_label: Some(home.contents_label.to_string()),
            back_label: None,
            toc_items: Vec::new(),
            phrase_lines: Vec::new(),
            layout_height: 0,
            slide,
        },
        ScreenView::TableOfContents(toc) => ScreenSnapshot {
            kind: "toc".to_string(),
            topic_id: None,
            title: toc.title.to_string(),
            logo_path: None,
            action_label: None,
            back_label: Some(toc.back_label.to_string()),
            toc_items: toc
                .entries
                .iter()
                .map(|entry| TocItem {
                    topic_id: entry.topic_id.to_string(),
                    label: entry.label.clone(),
                })
                .collect(),
            phrase_lines: Vec::new(),
            layout_height: toc.layout_height(),
            slide,
        },
        ScreenView::TopicDetail(screen) => ScreenSnapshot {
            kind: "topic".to_string(),
            topic_id: Some(screen.topic_id().to_string()),
            title: screen.title().to_string(),
            logo_path: None,
            action_label: None,
            back_label: Some(screen.back_label().to_string()),
            toc_items: Vec::new(),
            phrase_lines: screen.phrase_lines().to_vec(),
            layout_height: screen.layout_height(),
            slide,
        },
    };
    Ok(snapshot)
}

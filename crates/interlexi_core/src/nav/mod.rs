//! Screen navigation state machine.
//!
//! # Responsibility
//! - Track the current screen (home, table of contents, topic detail).
//! - Apply tap events as explicit transitions with slide direction.
//! - Render each screen as a display-ready view over the shared catalog.
//!
//! # Invariants
//! - The initial screen is `Screen::Home`.
//! - A failed event leaves the current screen unchanged.
//! - Entering a topic detail screen always repopulates it from scratch.

mod navigator;
mod screen;

pub use navigator::{NavEvent, NavigationError, Navigator, SlideDirection};
pub use screen::{
    HomeView, Screen, ScreenView, TocEntry, TocView, TopicScreen, APP_TITLE, BACK_LABEL,
    CONTENTS_BUTTON_LABEL, PHRASE_LINE_HEIGHT, TOC_ROW_HEIGHT, TOC_TITLE,
};

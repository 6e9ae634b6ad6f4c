//! Navigation transitions over a shared catalog.

use super::screen::{HomeView, Screen, ScreenView, TocView, TopicScreen};
use crate::model::catalog::{Catalog, TopicId};
use log::{error, info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

/// Tap-driven navigation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// "Go to Table of Contents" on the home screen.
    ViewContents,
    /// A table-of-contents row; carries the row's topic id.
    SelectTopic(TopicId),
    /// "Back" on the table of contents or a topic screen.
    Back,
}

impl Display for NavEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ViewContents => f.write_str("view_contents"),
            Self::SelectTopic(id) => write!(f, "select_topic:{id}"),
            Self::Back => f.write_str("back"),
        }
    }
}

/// Slide animation requested by the last transition.
///
/// `Left` moves deeper into the flow, `Right` moves back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Left,
    Right,
}

impl SlideDirection {
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Navigation failures. Both leave the current screen untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The requested topic has no screen in this catalog.
    UnknownTopic(TopicId),
    /// The event has no transition out of the current screen.
    UnsupportedEvent { screen: Screen, event: NavEvent },
}

impl Display for NavigationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTopic(id) => write!(f, "no screen for topic: {id}"),
            Self::UnsupportedEvent { screen, event } => {
                write!(f, "event `{event}` is not available on screen `{screen}`")
            }
        }
    }
}

impl Error for NavigationError {}

/// Screen state machine for one app session.
///
/// Screens are built once from the catalog: the table of contents up front,
/// and one empty `TopicScreen` per topic that is repopulated on every visit.
#[derive(Debug)]
pub struct Navigator {
    catalog: Arc<Catalog>,
    current: Screen,
    last_slide: Option<SlideDirection>,
    home: HomeView,
    toc: TocView,
    topic_screens: BTreeMap<TopicId, TopicScreen>,
}

impl Navigator {
    /// Builds every screen for `catalog` and starts on `Screen::Home`.
    pub fn new(catalog: Arc<Catalog>, logo: Option<PathBuf>) -> Self {
        let toc = TocView::from_catalog(&catalog);
        let topic_screens = catalog
            .topics()
            .iter()
            .map(|topic| (topic.id.clone(), TopicScreen::new(topic.id.clone())))
            .collect::<BTreeMap<_, _>>();

        info!(
            "event=nav_init module=nav status=ok topic_screens={}",
            topic_screens.len()
        );

        Self {
            catalog,
            current: Screen::Home,
            last_slide: None,
            home: HomeView::new(logo),
            toc,
            topic_screens,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current(&self) -> &Screen {
        &self.current
    }

    /// Slide direction of the last successful transition, if any.
    pub fn last_slide(&self) -> Option<SlideDirection> {
        self.last_slide
    }

    /// Number of topic detail screens registered at startup.
    pub fn topic_screen_count(&self) -> usize {
        self.topic_screens.len()
    }

    /// Applies one tap event and returns the new current screen.
    ///
    /// # Errors
    /// - `UnknownTopic` when `SelectTopic` names a topic outside the catalog.
    /// - `UnsupportedEvent` when the event has no transition from the
    ///   current screen.
    pub fn dispatch(&mut self, event: NavEvent) -> Result<&Screen, NavigationError> {
        let current = self.current.clone();
        let (next, slide) = match (current, event) {
            (Screen::Home, NavEvent::ViewContents) => {
                (Screen::TableOfContents, SlideDirection::Left)
            }
            (Screen::TableOfContents, NavEvent::SelectTopic(id)) => {
                self.enter_topic(&id)?;
                (Screen::TopicDetail(id), SlideDirection::Left)
            }
            (Screen::TableOfContents, NavEvent::Back) => (Screen::Home, SlideDirection::Right),
            (Screen::TopicDetail(_), NavEvent::Back) => {
                (Screen::TableOfContents, SlideDirection::Right)
            }
            (screen, event) => {
                let err = NavigationError::UnsupportedEvent { screen, event };
                warn!(
                    "event=nav_transition module=nav status=rejected error={}",
                    err
                );
                return Err(err);
            }
        };

        info!(
            "event=nav_transition module=nav status=ok from={} to={} slide={}",
            self.current,
            next,
            slide.label()
        );
        self.current = next;
        self.last_slide = Some(slide);
        Ok(&self.current)
    }

    /// Borrowed view of the current screen.
    ///
    /// # Errors
    /// - `UnknownTopic` if the current detail screen has no backing screen,
    ///   which `dispatch` never produces.
    pub fn view(&self) -> Result<ScreenView<'_>, NavigationError> {
        match &self.current {
            Screen::Home => Ok(ScreenView::Home(&self.home)),
            Screen::TableOfContents => Ok(ScreenView::TableOfContents(&self.toc)),
            Screen::TopicDetail(id) => self
                .topic_screens
                .get(id)
                .map(ScreenView::TopicDetail)
                .ok_or_else(|| NavigationError::UnknownTopic(id.clone())),
        }
    }

    fn enter_topic(&mut self, id: &TopicId) -> Result<(), NavigationError> {
        let (Some(topic), Some(screen)) = (self.catalog.topic(id), self.topic_screens.get_mut(id))
        else {
            let err = NavigationError::UnknownTopic(id.clone());
            error!(
                "event=nav_transition module=nav status=error error_code=unknown_topic error={}",
                err
            );
            return Err(err);
        };
        screen.populate(topic);
        Ok(())
    }
}

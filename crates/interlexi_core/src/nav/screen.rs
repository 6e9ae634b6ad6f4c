//! Screen identities and display-ready screen views.

use crate::model::catalog::{Catalog, Topic, TopicId};
use crate::text::prepare_for_display;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const APP_TITLE: &str = "InterLexi Arabic";
pub const CONTENTS_BUTTON_LABEL: &str = "Go to Table of Contents";
pub const TOC_TITLE: &str = "Table of Contents";
pub const BACK_LABEL: &str = "Back";

/// Height of one table-of-contents row, including spacing.
pub const TOC_ROW_HEIGHT: u32 = 60;
/// Height of one phrase line on a topic screen.
pub const PHRASE_LINE_HEIGHT: u32 = 40;

/// One navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,
    TableOfContents,
    TopicDetail(TopicId),
}

impl Display for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => f.write_str("home"),
            Self::TableOfContents => f.write_str("toc"),
            Self::TopicDetail(id) => write!(f, "topic:{id}"),
        }
    }
}

/// Landing screen content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub title: &'static str,
    /// Bundled logo path; `None` means the shell shows its default.
    pub logo: Option<PathBuf>,
    pub contents_label: &'static str,
}

impl HomeView {
    pub fn new(logo: Option<PathBuf>) -> Self {
        Self {
            title: APP_TITLE,
            logo,
            contents_label: CONTENTS_BUTTON_LABEL,
        }
    }
}

/// One selectable table-of-contents row.
///
/// Tapping the row dispatches `NavEvent::SelectTopic(topic_id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub topic_id: TopicId,
    /// Shaped, visually ordered topic name.
    pub label: String,
}

/// Table of contents built once from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocView {
    pub title: &'static str,
    pub entries: Vec<TocEntry>,
    pub back_label: &'static str,
}

impl TocView {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let entries = catalog
            .topics()
            .iter()
            .map(|topic| TocEntry {
                topic_id: topic.id.clone(),
                label: prepare_for_display(topic.name.as_str()),
            })
            .collect();
        Self {
            title: TOC_TITLE,
            entries,
            back_label: BACK_LABEL,
        }
    }

    /// Scrollable list height: one fixed-height row per topic.
    pub fn layout_height(&self) -> u32 {
        row_span(self.entries.len(), TOC_ROW_HEIGHT)
    }
}

/// Reusable detail screen for one topic.
///
/// Starts empty and is filled by [`TopicScreen::populate`] on every entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicScreen {
    topic_id: TopicId,
    title: String,
    phrase_lines: Vec<String>,
}

impl TopicScreen {
    pub fn new(topic_id: TopicId) -> Self {
        Self {
            topic_id,
            title: String::new(),
            phrase_lines: Vec::new(),
        }
    }

    pub fn topic_id(&self) -> &TopicId {
        &self.topic_id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn phrase_lines(&self) -> &[String] {
        &self.phrase_lines
    }

    pub fn back_label(&self) -> &'static str {
        BACK_LABEL
    }

    /// Replaces any prior content with `topic`'s title and phrases.
    ///
    /// Each line reads `"{translation} = {shaped text}"`, in catalog order.
    pub fn populate(&mut self, topic: &Topic) {
        self.title = prepare_for_display(topic.name.as_str());
        self.phrase_lines.clear();
        self.phrase_lines.extend(topic.phrases.iter().map(|phrase| {
            format!(
                "{} = {}",
                phrase.translation,
                prepare_for_display(phrase.text.as_str())
            )
        }));
    }

    /// Minimum height of the phrase column.
    pub fn layout_height(&self) -> u32 {
        row_span(self.phrase_lines.len(), PHRASE_LINE_HEIGHT)
    }
}

/// Borrowed view of whichever screen is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenView<'a> {
    Home(&'a HomeView),
    TableOfContents(&'a TocView),
    TopicDetail(&'a TopicScreen),
}

fn row_span(rows: usize, row_height: u32) -> u32 {
    u32::try_from(rows)
        .unwrap_or(u32::MAX)
        .saturating_mul(row_height)
}

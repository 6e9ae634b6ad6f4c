//! Display preparation for right-to-left source text.
//!
//! # Responsibility
//! - Reshape Arabic into contextual presentation forms.
//! - Reorder shaped text into visual order with UAX #9.
//!
//! # Invariants
//! - All functions are pure and deterministic.
//! - Text without right-to-left characters passes through unchanged.
//! - Translations never go through this module.

use unicode_bidi::{bidi_class, BidiClass, BidiInfo};

/// Prepares source-language text for a renderer that draws glyphs strictly
/// left to right.
///
/// Equivalent to `reorder_visual(&reshape(text))`.
pub fn prepare_for_display(source_text: &str) -> String {
    if source_text.is_empty() {
        return String::new();
    }
    reorder_visual(reshape(source_text).as_str())
}

/// Replaces logical Arabic letters with their joined presentation forms.
pub fn reshape(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    ar_reshaper::reshape_line(text)
}

/// Reorders text into visual order, one bidi paragraph at a time.
///
/// The paragraph direction comes from the first strong character, so a
/// leading Arabic word makes the whole line right-to-left while embedded
/// numerals and Latin runs keep their left-to-right order.
pub fn reorder_visual(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let bidi_info = BidiInfo::new(text, None);
    if !bidi_info.levels.iter().any(|level| level.is_rtl()) {
        return text.to_string();
    }

    let mut visual = String::with_capacity(text.len());
    for paragraph in &bidi_info.paragraphs {
        // The separator takes the paragraph level; keep it out of the reversal.
        let body_end = paragraph_body_end(text, paragraph.range.clone());
        let line = paragraph.range.start..body_end;
        visual.push_str(&bidi_info.reorder_line(paragraph, line));
        visual.push_str(&text[body_end..paragraph.range.end]);
    }
    visual
}

fn paragraph_body_end(text: &str, range: std::ops::Range<usize>) -> usize {
    let body = text[range.clone()].trim_end_matches(|c| bidi_class(c) == BidiClass::B);
    range.start + body.len()
}

//! Document layout.
//!
//! The portfolio renders as one vertical strip of rows. Every frame
//! the document is rebuilt for the current width, so section geometry
//! and animation anchors are always a live query, never a cache.

use std::collections::HashMap;

use ratatui::text::Line;

use crate::app::App;
use crate::fx::{NavSection, RowSpan};
use crate::widgets;

/// Page sections in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Education,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Education => "Education",
            SectionId::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Identity of an animatable element within the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKey {
    /// Stat counter by index
    Stat(usize),
    /// Skill bar by (group, skill) index
    Skill(usize, usize),
    /// Section heading reveal
    Section(SectionId),
}

/// Lines of one section plus its animation anchors, rows relative to
/// the section top
pub struct SectionBlock {
    pub lines: Vec<Line<'static>>,
    pub anchors: Vec<(TargetKey, RowSpan)>,
}

impl SectionBlock {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            anchors: Vec::new(),
        }
    }

    pub fn anchor_here(&mut self, key: TargetKey, height: u16) {
        let top = self.lines.len() as u16;
        self.anchors.push((key, RowSpan::new(top, height)));
    }
}

impl Default for SectionBlock {
    fn default() -> Self {
        Self::new()
    }
}

/// The laid-out document for one frame
pub struct Document {
    pub lines: Vec<Line<'static>>,
    pub sections: Vec<NavSection<SectionId>>,
    pub anchors: HashMap<TargetKey, RowSpan>,
}

impl Document {
    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.height().saturating_sub(viewport_height)
    }

    pub fn section_top(&self, id: SectionId) -> u16 {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.top)
            .unwrap_or(0)
    }
}

/// Build the document for the current width and effect state
pub fn build_document(app: &App, width: u16) -> Document {
    let mut lines = Vec::new();
    let mut sections = Vec::new();
    let mut anchors = HashMap::new();

    for id in SectionId::ALL {
        let block = match id {
            SectionId::Home => widgets::hero::lines(app, width),
            SectionId::About => widgets::about::lines(app, width),
            SectionId::Skills => widgets::skills::lines(app, width),
            SectionId::Projects => widgets::projects::lines(app, width),
            SectionId::Education => widgets::education::lines(app, width),
            SectionId::Contact => widgets::contact::lines(app, width),
        };

        let top = lines.len() as u16;
        sections.push(NavSection::new(id, top, block.lines.len() as u16));
        for (key, span) in block.anchors {
            anchors.insert(key, RowSpan::new(top + span.top, span.height));
        }
        lines.extend(block.lines);
    }

    Document {
        lines,
        sections,
        anchors,
    }
}

/// Greedy word wrap on character count; long words are split hard
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut out = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if current.is_empty() {
            if word_len <= width {
                current.push_str(word);
            } else {
                // Hard-split an overlong word
                let mut chars = word.chars().peekable();
                while chars.peek().is_some() {
                    let chunk: String = chars.by_ref().take(width).collect();
                    out.push(chunk);
                }
            }
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            out.push(std::mem::take(&mut current));
            if word_len <= width {
                current.push_str(word);
            } else {
                let mut chars = word.chars().peekable();
                while chars.peek().is_some() {
                    let chunk: String = chars.by_ref().take(width).collect();
                    out.push(chunk);
                }
            }
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    use termfolio_core::prefs::MemoryPreferenceStore;
    use termfolio_core::{AppConfig, Portfolio, ThemeController};

    fn test_app() -> App {
        let controller = ThemeController::load(Box::new(MemoryPreferenceStore::default()));
        App::new(
            std::sync::Arc::new(AppConfig::default()),
            Portfolio::sample(),
            controller,
            Instant::now(),
        )
    }

    #[test]
    fn test_wrap_text_basic() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_text_long_word() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_sections_tile_the_document() {
        let app = test_app();
        let doc = build_document(&app, 80);

        let mut expected_top = 0;
        for (section, id) in doc.sections.iter().zip(SectionId::ALL) {
            assert_eq!(section.id, id);
            assert_eq!(section.top, expected_top, "gap before {:?}", id);
            assert!(section.height > 0, "empty section {:?}", id);
            expected_top += section.height;
        }
        assert_eq!(expected_top, doc.height());
    }

    #[test]
    fn test_anchors_lie_inside_their_section() {
        let app = test_app();
        let doc = build_document(&app, 80);

        for (key, span) in &doc.anchors {
            let section = match key {
                TargetKey::Stat(_) => SectionId::About,
                TargetKey::Skill(_, _) => SectionId::Skills,
                TargetKey::Section(id) => *id,
            };
            let nav = doc
                .sections
                .iter()
                .find(|s| s.id == section)
                .expect("section exists");
            assert!(
                span.top >= nav.top && span.bottom() <= nav.top + nav.height,
                "{:?} at {:?} escapes {:?}",
                key,
                span,
                section
            );
        }
    }

    #[test]
    fn test_every_stat_and_skill_has_an_anchor() {
        let app = test_app();
        let doc = build_document(&app, 80);
        let portfolio = Portfolio::sample();

        for i in 0..portfolio.stats.len() {
            assert!(doc.anchors.contains_key(&TargetKey::Stat(i)));
        }
        for (g, group) in portfolio.skills.iter().enumerate() {
            for s in 0..group.skills.len() {
                assert!(doc.anchors.contains_key(&TargetKey::Skill(g, s)));
            }
        }
    }

    #[test]
    fn test_narrow_width_still_tiles() {
        let app = test_app();
        let doc = build_document(&app, 24);
        let total: u16 = doc.sections.iter().map(|s| s.height).sum();
        assert_eq!(total, doc.height());
    }
}

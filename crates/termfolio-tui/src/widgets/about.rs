//! About section: bio paragraphs and the animated stat counters.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::layout::{wrap_text, SectionBlock, SectionId, TargetKey};
use crate::widgets::{body_style, section_heading};

pub fn lines(app: &App, width: u16) -> SectionBlock {
    let mut block = SectionBlock::new();
    section_heading(&mut block, app, SectionId::About, width);

    let body = body_style(app, SectionId::About);
    let text_width = width.saturating_sub(4).max(10);
    for paragraph in &app.portfolio.about {
        for row in wrap_text(paragraph, text_width) {
            block
                .lines
                .push(Line::from(Span::styled(format!("  {}", row), body)));
        }
        block.lines.push(Line::default());
    }

    // Stat counters, one per row, counting up once scrolled into view
    for (i, stat) in app.portfolio.stats.iter().enumerate() {
        block.anchor_here(TargetKey::Stat(i), 1);
        let value = app
            .counters
            .get(i)
            .map(|c| c.display())
            .unwrap_or_default();
        block.lines.push(Line::from(vec![
            Span::styled(
                format!("  {:>6}", value),
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", stat.label), body),
        ]));
    }
    block.lines.push(Line::default());

    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Instant;

    use termfolio_core::prefs::MemoryPreferenceStore;
    use termfolio_core::{AppConfig, Portfolio, ThemeController};

    fn test_app() -> App {
        let controller = ThemeController::load(Box::new(MemoryPreferenceStore::default()));
        App::new(
            Arc::new(AppConfig::default()),
            Portfolio::sample(),
            controller,
            Instant::now(),
        )
    }

    #[test]
    fn test_one_anchor_per_stat() {
        let app = test_app();
        let block = lines(&app, 80);
        let stat_anchors = block
            .anchors
            .iter()
            .filter(|(k, _)| matches!(k, TargetKey::Stat(_)))
            .count();
        assert_eq!(stat_anchors, app.portfolio.stats.len());
    }

    #[test]
    fn test_counters_start_at_zero() {
        let app = test_app();
        let block = lines(&app, 80);
        let text: String = block
            .lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        // Untriggered counters show zero, not their target
        assert!(text.contains('0'));
        assert!(!text.contains("25+"));
    }
}

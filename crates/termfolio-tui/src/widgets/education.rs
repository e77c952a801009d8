//! Education section: a vertical timeline.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::layout::{wrap_text, SectionBlock, SectionId};
use crate::widgets::{body_style, section_heading};

pub fn lines(app: &App, width: u16) -> SectionBlock {
    let mut block = SectionBlock::new();
    section_heading(&mut block, app, SectionId::Education, width);

    let body = body_style(app, SectionId::Education);
    let rail = Style::default().fg(app.theme.bg2);
    let text_width = width.saturating_sub(8).max(10);

    let last = app.portfolio.education.len().saturating_sub(1);
    for (i, entry) in app.portfolio.education.iter().enumerate() {
        block.lines.push(Line::from(vec![
            Span::styled("  ● ", Style::default().fg(app.theme.accent)),
            Span::styled(
                entry.degree.clone(),
                Style::default()
                    .fg(app.theme.fg0)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        block.lines.push(Line::from(vec![
            Span::styled("  │ ", rail),
            Span::styled(entry.institution.clone(), body),
            Span::styled(format!("  {}", entry.period), Style::default().fg(app.theme.dim)),
        ]));
        if let Some(note) = &entry.note {
            for row in wrap_text(note, text_width) {
                block.lines.push(Line::from(vec![
                    Span::styled("  │ ", rail),
                    Span::styled(row, Style::default().fg(app.theme.dim)),
                ]));
            }
        }
        if i != last {
            block.lines.push(Line::from(Span::styled("  │", rail)));
        }
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

    #[test]
    fn test_all_entries_on_the_timeline() {
        let controller = ThemeController::load(Box::new(MemoryPreferenceStore::default()));
        let app = App::new(
            Arc::new(AppConfig::default()),
            Portfolio::sample(),
            controller,
            Instant::now(),
        );
        let block = lines(&app, 80);
        let text: String = block
            .lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        for entry in &app.portfolio.education {
            assert!(text.contains(&entry.degree));
            assert!(text.contains(&entry.institution));
        }
    }
}

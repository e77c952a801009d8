//! Landing section: greeting, typed role line and parallax backdrop.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::layout::{SectionBlock, SectionId, TargetKey};

/// Backdrop glyph columns, as fractions of the width
const PARTICLES: [(f32, char); 6] = [
    (0.12, '·'),
    (0.30, '✦'),
    (0.47, '·'),
    (0.63, '○'),
    (0.78, '·'),
    (0.92, '✦'),
];

pub fn lines(app: &App, width: u16) -> SectionBlock {
    let mut block = SectionBlock::new();
    let accent = Style::default().fg(app.theme.accent);
    let bold_accent = accent.add_modifier(Modifier::BOLD);

    block.lines.push(Line::default());
    block.anchor_here(TargetKey::Section(SectionId::Home), 3);
    block.lines.push(particle_row(app, width, 0));

    block.lines.push(Line::from(vec![
        Span::styled("  Hi, I'm ", Style::default().fg(app.theme.fg1)),
        Span::styled(app.portfolio.name.clone(), bold_accent),
    ]));
    block.lines.push(Line::default());

    // Typed role with a block cursor
    block.lines.push(Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            app.typewriter.text().to_string(),
            Style::default().fg(app.theme.fg0),
        ),
        Span::styled("█", accent),
    ]));
    block.lines.push(Line::default());
    block.lines.push(particle_row(app, width, 1));
    block.lines.push(Line::default());

    block.lines.push(Line::from(Span::styled(
        "  j/k scroll · Tab next section · c contact · t theme · q quit",
        Style::default().fg(app.theme.dim),
    )));
    block.lines.push(particle_row(app, width, 2));
    block.lines.push(Line::default());

    block
}

/// A row of backdrop glyphs drifting at half the scroll speed
fn particle_row(app: &App, width: u16, row: u16) -> Line<'static> {
    let width = width.max(1);
    // Parallax: the backdrop trails the scroll at half speed
    let shift = (app.scroll.current_scroll() / 2).wrapping_add(row * 7);
    let mut cells = vec![' '; width as usize];
    for (i, (frac, glyph)) in PARTICLES.iter().enumerate() {
        let base = (*frac * width as f32) as u16;
        let col = (base + shift * (i as u16 % 2 + 1)) % width;
        cells[col as usize] = *glyph;
    }
    Line::from(Span::styled(
        cells.into_iter().collect::<String>(),
        Style::default().fg(app.theme.bg2),
    ))
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
    fn test_hero_mentions_name() {
        let app = test_app();
        let block = lines(&app, 80);
        let text: String = block
            .lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains(&app.portfolio.name));
    }

    #[test]
    fn test_particle_row_fits_width() {
        let app = test_app();
        for width in [10u16, 40, 80] {
            let line = particle_row(&app, width, 0);
            assert!(line.to_string().chars().count() <= width as usize);
        }
    }
}

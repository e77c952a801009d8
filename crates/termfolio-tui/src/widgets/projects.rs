//! Projects section: focusable cards, Enter opens the detail popup.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::{App, RippleHost};
use crate::layout::{wrap_text, SectionBlock, SectionId};
use crate::widgets::{body_style, section_heading};

pub fn lines(app: &App, width: u16) -> SectionBlock {
    let mut block = SectionBlock::new();
    section_heading(&mut block, app, SectionId::Projects, width);

    let body = body_style(app, SectionId::Projects);
    let text_width = width.saturating_sub(6).max(10);

    for (i, project) in app.portfolio.projects.iter().enumerate() {
        let focused = i == app.focused_project;
        let rippling = app.ripple_intensity(RippleHost::ProjectCard(i), app.now) > 0.0;

        let marker = if focused { "▸" } else { " " };
        let title_style = if rippling {
            Style::default()
                .fg(app.theme.bg0)
                .bg(app.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else if focused {
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.fg0)
        };

        block.lines.push(Line::from(vec![
            Span::styled(format!("  {} ", marker), Style::default().fg(app.theme.accent)),
            Span::styled(project.title.clone(), title_style),
        ]));

        for row in wrap_text(&project.summary, text_width) {
            block
                .lines
                .push(Line::from(Span::styled(format!("      {}", row), body)));
        }

        block.lines.push(Line::from(Span::styled(
            format!("      {}", project.tech.join(" · ")),
            Style::default().fg(app.theme.dim),
        )));
        block.lines.push(Line::default());
    }

    block.lines.push(Line::from(Span::styled(
        "  n/p switch project · Enter details",
        Style::default().fg(app.theme.dim),
    )));
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
    fn test_all_projects_listed() {
        let app = test_app();
        let block = lines(&app, 80);
        let text: String = block
            .lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        for project in &app.portfolio.projects {
            assert!(text.contains(&project.title), "missing {}", project.title);
        }
    }

    #[test]
    fn test_focus_marker_follows_selection() {
        let mut app = test_app();
        app.focus_next_project();
        let block = lines(&app, 80);
        let marked: Vec<String> = block
            .lines
            .iter()
            .map(|l| l.to_string())
            .filter(|l| l.contains('▸'))
            .collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains(&app.portfolio.projects[1].title));
    }
}

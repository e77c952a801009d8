//! Sticky top navigation bar.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, RippleHost};
use crate::layout::SectionId;

pub struct NavbarWidget;

impl NavbarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        // The bar picks up a raised background once the page scrolls
        let bg = if app.fxc.navbar_scrolled {
            app.theme.bg2
        } else {
            app.theme.bg1
        };

        let active = app.active_section();
        let mut spans = vec![Span::styled(
            " termfolio ",
            Style::default()
                .fg(app.theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )];

        for (i, id) in SectionId::ALL.into_iter().enumerate() {
            let rippling = app.ripple_intensity(RippleHost::NavLink(id), app.now) > 0.0;
            let style = if rippling {
                Style::default()
                    .fg(app.theme.bg0)
                    .bg(app.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else if id == active {
                Style::default()
                    .fg(app.theme.accent)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(app.theme.fg1).bg(bg)
            };
            spans.push(Span::styled(
                format!(" {}:{} ", i + 1, id.title()),
                style,
            ));
        }

        // Theme glyph mirrors the current mode
        let glyph = match app.theme_mode() {
            termfolio_core::ThemeMode::Dark => " ☾ ",
            termfolio_core::ThemeMode::Light => " ☀ ",
        };
        spans.push(Span::styled(
            glyph,
            Style::default().fg(app.theme.warning).bg(bg),
        ));

        let line = Line::from(spans).style(Style::default().bg(bg));
        frame.render_widget(Paragraph::new(line), area);
    }
}

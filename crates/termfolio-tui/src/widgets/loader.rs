//! Startup splash that covers the page, then fades out.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::app::{App, LoaderPhase};

const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];

pub struct LoaderWidget;

impl LoaderWidget {
    /// Render the splash; no-op once the fade has finished
    pub fn render(frame: &mut Frame, app: &App) {
        let phase = app.loader.phase(app.now);
        if phase == LoaderPhase::Done {
            return;
        }
        let area = frame.area();

        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(app.theme.bg0)),
            area,
        );

        // During the fade the splash text recedes into the background
        let fg = match phase {
            LoaderPhase::Covering => app.theme.accent,
            _ => app.theme.bg2,
        };

        let spinner =
            SPINNER[(app.loader.elapsed_ms(app.now) / 120) as usize % SPINNER.len()];
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                app.portfolio.name.clone(),
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                spinner.to_string(),
                Style::default().fg(fg),
            )),
        ];

        let top = area.height.saturating_sub(4) / 2;
        let mut centered = area;
        centered.y = area.y + top;
        centered.height = area.height.saturating_sub(top);
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            centered,
        );
    }
}

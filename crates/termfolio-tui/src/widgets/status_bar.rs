//! Bottom status bar.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode, RippleHost};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, scroll_percent: u8) {
        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::ContactForm => "FORM",
            Mode::Modal(_) => "DETAIL",
        };

        let status_text = format!(
            " {} | {} | {}% | {}",
            mode_str,
            app.active_section().title(),
            scroll_percent,
            app.theme_mode().as_str()
        );

        let to_top = if app.fxc.to_top_visible { " ↑ top (T) " } else { "" };
        let help_hint = " j/k:scroll Tab:section c:contact t:theme q:quit ";

        let padding_len = area.width.saturating_sub(
            (status_text.width() + to_top.width() + help_hint.width()) as u16,
        ) as usize;

        let to_top_style = if app.ripple_intensity(RippleHost::ToTop, app.now) > 0.0 {
            Style::default().fg(app.theme.bg0).bg(app.theme.accent)
        } else {
            Style::default().fg(app.theme.accent).bg(app.theme.bg2)
        };

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg0).bg(app.theme.bg2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(app.theme.bg2),
            ),
            Span::styled(to_top.to_string(), to_top_style),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.dim).bg(app.theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

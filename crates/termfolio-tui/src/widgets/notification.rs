//! Transient notification banner, pinned to the top-right corner.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, NoticeKind};

pub struct NotificationWidget;

impl NotificationWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let Some(notice) = &app.notification else {
            return;
        };
        let area = frame.area();

        let text_width = (notice.text.width() as u16 + 4).min(area.width.saturating_sub(2));
        let banner = Rect::new(
            area.width.saturating_sub(text_width + 1),
            1,
            text_width,
            3.min(area.height),
        );

        let color = match notice.kind {
            NoticeKind::Success => app.theme.success,
            NoticeKind::Error => app.theme.error,
            NoticeKind::Info => app.theme.info,
        };

        frame.render_widget(Clear, banner);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(app.theme.bg1));
        let inner = block.inner(banner);
        frame.render_widget(block, banner);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", notice.text),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))),
            inner,
        );
    }
}

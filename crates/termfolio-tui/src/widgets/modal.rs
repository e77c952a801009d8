//! Project detail popup.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::layout::wrap_text;

pub struct ModalWidget;

impl ModalWidget {
    /// Render the detail popup for a project by index
    pub fn render(frame: &mut Frame, app: &App, index: usize) {
        let Some(project) = app.portfolio.projects.get(index) else {
            return;
        };
        let area = frame.area();

        let popup_width = 64u16.min(area.width.saturating_sub(4));
        let popup_height = 16u16.min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        // Clear the background area
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!(" {} ", project.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent))
            .style(Style::default().bg(app.theme.bg1));

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let text_width = inner.width.saturating_sub(2).max(10);
        let detail = if project.detail.is_empty() {
            &project.summary
        } else {
            &project.detail
        };

        let mut lines = Vec::new();
        for row in wrap_text(detail, text_width) {
            lines.push(Line::from(Span::styled(
                format!(" {}", row),
                Style::default().fg(app.theme.fg0),
            )));
        }
        lines.push(Line::default());
        if !project.tech.is_empty() {
            lines.push(Line::from(Span::styled(
                format!(" {}", project.tech.join(" · ")),
                Style::default().fg(app.theme.dim),
            )));
        }
        if let Some(url) = &project.demo_url {
            lines.push(link_line(app, "demo", url));
        }
        if let Some(url) = &project.repo_url {
            lines.push(link_line(app, "repo", url));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " [d]emo  [r]epo  [n/p] switch  [q] close",
            Style::default().fg(app.theme.dim),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn link_line(app: &App, label: &str, url: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {}: ", label),
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(url.to_string(), Style::default().fg(app.theme.info)),
    ])
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

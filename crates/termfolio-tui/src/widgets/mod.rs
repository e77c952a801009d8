//! Page sections and chrome.
//!
//! Section widgets build their rows as a `SectionBlock` for the
//! document layout; chrome widgets (navbar, status bar, popups) render
//! directly into the frame.

pub mod about;
pub mod contact;
pub mod education;
pub mod hero;
pub mod loader;
pub mod modal;
pub mod navbar;
pub mod notification;
pub mod projects;
pub mod skills;
pub mod status_bar;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::layout::{SectionBlock, SectionId, TargetKey};

/// Push a section heading: a blank spacer, the title and an underline.
/// The heading carries the section's reveal anchor and renders dim
/// until the reveal fires.
pub(crate) fn section_heading(block: &mut SectionBlock, app: &App, id: SectionId, width: u16) {
    block.lines.push(Line::default());
    block.anchor_here(TargetKey::Section(id), 2);

    let style = if app.revealed.contains(&id) {
        Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim)
    };
    block
        .lines
        .push(Line::from(Span::styled(format!("  {}", id.title()), style)));

    let rule_width = (id.title().len() as u16 + 4).min(width.max(8)) as usize;
    block.lines.push(Line::from(Span::styled(
        format!("  {}", "─".repeat(rule_width.saturating_sub(2))),
        Style::default().fg(app.theme.bg2),
    )));
    block.lines.push(Line::default());
}

/// Body style for a section: dim before its reveal fires
pub(crate) fn body_style(app: &App, id: SectionId) -> Style {
    if app.revealed.contains(&id) {
        Style::default().fg(app.theme.fg1)
    } else {
        Style::default().fg(app.theme.dim)
    }
}

/// Truncate a string to max length with ellipsis
pub(crate) fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a very long string", 10), "a very ...");
    }
}

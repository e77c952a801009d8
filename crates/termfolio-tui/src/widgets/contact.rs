//! Contact section: reach-out details, social links and the message
//! form.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use termfolio_core::contact::Field;

use crate::app::{App, Mode, RippleHost};
use crate::layout::{SectionBlock, SectionId};
use crate::widgets::{body_style, section_heading};

const FIELD_LABELS: [(Field, &str); 4] = [
    (Field::Name, "Name"),
    (Field::Email, "Email"),
    (Field::Subject, "Subject"),
    (Field::Message, "Message"),
];

pub fn lines(app: &App, width: u16) -> SectionBlock {
    let mut block = SectionBlock::new();
    section_heading(&mut block, app, SectionId::Contact, width);

    let body = body_style(app, SectionId::Contact);
    let dim = Style::default().fg(app.theme.dim);
    let info = &app.portfolio.contact;

    block.lines.push(Line::from(vec![
        Span::styled("  ✉ ", Style::default().fg(app.theme.accent)),
        Span::styled(info.email.clone(), body),
        Span::styled("   (m to compose)", dim),
    ]));
    if !info.location.is_empty() {
        block.lines.push(Line::from(vec![
            Span::styled("  ⌂ ", Style::default().fg(app.theme.accent)),
            Span::styled(info.location.clone(), body),
        ]));
    }
    for link in &info.social {
        block.lines.push(Line::from(vec![
            Span::styled("  ↗ ", Style::default().fg(app.theme.accent)),
            Span::styled(format!("{}: ", link.label), body),
            Span::styled(link.url.clone(), dim),
        ]));
    }
    block.lines.push(Line::default());

    // The message form
    let editing = app.mode == Mode::ContactForm;
    let field_width = width.saturating_sub(14).max(10) as usize;

    for (field, label) in FIELD_LABELS {
        let focused = editing && app.form.focus == field;
        let label_style = if focused {
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            dim
        };

        let mut spans = vec![Span::styled(format!("  {:<8} ", label), label_style)];
        let mut value: String = app
            .form
            .value(field)
            .chars()
            .rev()
            .take(field_width)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        if focused {
            value.push('▏');
        }
        spans.push(Span::styled(value, Style::default().fg(app.theme.fg0)));
        block.lines.push(Line::from(spans));

        if let Some(message) = app.form.error(field) {
            block.lines.push(Line::from(Span::styled(
                format!("           {}", message),
                Style::default().fg(app.theme.error),
            )));
        }
    }

    block.lines.push(Line::default());
    block.lines.push(submit_line(app, editing));
    if editing {
        block.lines.push(Line::from(Span::styled(
            "  Tab next field · Ctrl+S send · Esc cancel",
            dim,
        )));
    } else {
        block.lines.push(Line::from(Span::styled(
            "  c to fill in the form",
            dim,
        )));
    }
    block.lines.push(Line::default());

    block
}

fn submit_line(app: &App, editing: bool) -> Line<'static> {
    let label = if app.form.sending {
        "[ Sending... ]"
    } else {
        "[ Send Message ]"
    };
    let style = if app.ripple_intensity(RippleHost::Submit, app.now) > 0.0 {
        Style::default()
            .fg(app.theme.bg0)
            .bg(app.theme.accent)
            .add_modifier(Modifier::BOLD)
    } else if app.form.sending {
        Style::default().fg(app.theme.dim)
    } else if editing {
        Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim)
    };
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(label, style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Instant;

    use termfolio_core::prefs::MemoryPreferenceStore;
    use termfolio_core::{AppConfig, Portfolio, ThemeController};

    use crate::app::ContactFormState;

    fn test_app() -> App {
        let controller = ThemeController::load(Box::new(MemoryPreferenceStore::default()));
        App::new(
            Arc::new(AppConfig::default()),
            Portfolio::sample(),
            controller,
            Instant::now(),
        )
    }

    fn rendered(app: &App) -> String {
        lines(app, 80)
            .lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_field_labels_match_form_order() {
        assert_eq!(
            FIELD_LABELS.map(|(f, _)| f),
            ContactFormState::FIELDS
        );
    }

    #[test]
    fn test_errors_render_under_their_field() {
        let mut app = test_app();
        app.mode = Mode::ContactForm;
        assert!(app.submit_form().is_none());
        let text = rendered(&app);
        assert!(text.contains("Name is required"));
        assert!(text.contains("Please enter a valid email address"));
        assert!(text.contains("Subject is required"));
        assert!(text.contains("Message is required"));
    }

    #[test]
    fn test_sending_state_swaps_submit_label() {
        let mut app = test_app();
        app.form.sending = true;
        let text = rendered(&app);
        assert!(text.contains("[ Sending... ]"));
        assert!(!text.contains("[ Send Message ]"));
    }

    #[test]
    fn test_social_links_listed() {
        let app = test_app();
        let text = rendered(&app);
        for link in &app.portfolio.contact.social {
            assert!(text.contains(&link.label));
        }
    }
}

//! Skills section: grouped proficiency bars that fill after reveal.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::layout::{SectionBlock, SectionId, TargetKey};
use crate::widgets::{body_style, section_heading, truncate_str};

const BAR_WIDTH: u16 = 24;
const NAME_WIDTH: usize = 16;

pub fn lines(app: &App, width: u16) -> SectionBlock {
    let mut block = SectionBlock::new();
    section_heading(&mut block, app, SectionId::Skills, width);

    let body = body_style(app, SectionId::Skills);
    let bar_width = BAR_WIDTH.min(width.saturating_sub(NAME_WIDTH as u16 + 12).max(8));

    for (g, group) in app.portfolio.skills.iter().enumerate() {
        block.lines.push(Line::from(Span::styled(
            format!("  {}", group.name),
            Style::default()
                .fg(app.theme.fg0)
                .add_modifier(Modifier::BOLD),
        )));

        for (s, skill) in group.skills.iter().enumerate() {
            block.anchor_here(TargetKey::Skill(g, s), 1);
            let fill = app
                .bars
                .get(g)
                .and_then(|row| row.get(s))
                .map(|cell| cell.fill)
                .unwrap_or(0);
            block
                .lines
                .push(bar_line(app, &skill.name, fill, bar_width, body));
        }
        block.lines.push(Line::default());
    }

    block
}

fn bar_line(app: &App, name: &str, fill: u8, bar_width: u16, body: Style) -> Line<'static> {
    let filled = (u32::from(fill) * u32::from(bar_width) / 100) as u16;
    let empty = bar_width - filled;

    Line::from(vec![
        Span::styled(
            format!("    {:<width$}", truncate_str(name, NAME_WIDTH), width = NAME_WIDTH),
            body,
        ),
        Span::styled(
            "█".repeat(filled as usize),
            Style::default().fg(app.theme.accent),
        ),
        Span::styled("░".repeat(empty as usize), Style::default().fg(app.theme.bg2)),
        Span::styled(format!(" {:>3}%", fill), Style::default().fg(app.theme.dim)),
    ])
}

//! Skills region with textual proficiency bars.

use crate::theme::{skill_level_color, MidnightTheme};
use crate::views::helpers::{blank, heading, level_bar, MARGIN};
use folio_core::Profile;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

const BAR_WIDTH: usize = 30;

pub fn lines(profile: &Profile, theme: &MidnightTheme, width: u16) -> Vec<Line<'static>> {
    let mut out = vec![
        blank(),
        heading("My Skills", Style::default().fg(theme.primary), width),
        blank(),
    ];
    for skill in &profile.skills {
        let color = skill_level_color(skill.level, theme);
        out.push(Line::from(vec![
            Span::styled(
                format!("{MARGIN}{:<12}", skill.name),
                Style::default().fg(theme.text),
            ),
            Span::styled(level_bar(skill.level, BAR_WIDTH), Style::default().fg(color)),
            Span::styled(
                format!(" {:>3}%", skill.level),
                Style::default().fg(theme.text_dim),
            ),
        ]));
    }
    out.push(blank());
    out
}

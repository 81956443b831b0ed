//! Services region.

use crate::theme::MidnightTheme;
use crate::views::helpers::{blank, heading, wrapped, MARGIN};
use folio_core::Profile;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

pub fn lines(profile: &Profile, theme: &MidnightTheme, width: u16) -> Vec<Line<'static>> {
    let mut out = vec![
        blank(),
        heading("My Services", Style::default().fg(theme.primary), width),
        blank(),
    ];
    for service in &profile.services {
        out.push(Line::from(Span::styled(
            format!("{MARGIN}◆ {}", service.title),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )));
        out.extend(wrapped(
            &service.desc,
            width,
            Style::default().fg(theme.text_dim),
        ));
        out.push(blank());
    }
    out
}

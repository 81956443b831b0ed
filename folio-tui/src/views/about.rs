//! About region.

use crate::theme::MidnightTheme;
use crate::views::helpers::{blank, heading, wrapped};
use folio_core::Profile;
use ratatui::{style::Style, text::Line};

pub fn lines(profile: &Profile, theme: &MidnightTheme, width: u16) -> Vec<Line<'static>> {
    let mut out = vec![
        blank(),
        heading("About Me", Style::default().fg(theme.primary), width),
        blank(),
    ];
    for paragraph in &profile.about {
        out.extend(wrapped(paragraph, width, Style::default().fg(theme.text)));
        out.push(blank());
    }
    out
}

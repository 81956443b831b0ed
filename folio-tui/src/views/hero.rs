//! Hero region: greeting, name, the typed tagline, and the summary.

use crate::theme::MidnightTheme;
use crate::views::helpers::{blank, wrapped, MARGIN};
use folio_core::Profile;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

pub fn lines(
    profile: &Profile,
    typed: &str,
    theme: &MidnightTheme,
    width: u16,
) -> Vec<Line<'static>> {
    let mut out = vec![
        blank(),
        Line::from(Span::styled(
            format!("{MARGIN}{}", profile.greeting),
            Style::default().fg(theme.text_dim),
        )),
        Line::from(Span::styled(
            format!("{MARGIN}{}", profile.name),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        blank(),
        Line::from(vec![
            Span::styled(
                format!("{MARGIN}{}", profile.tagline_prefix),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                typed.to_string(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("▌".to_string(), Style::default().fg(theme.primary)),
        ]),
        blank(),
    ];
    out.extend(wrapped(
        &profile.summary,
        width,
        Style::default().fg(theme.text_dim),
    ));
    out.push(blank());
    out.push(Line::from(Span::styled(
        format!("{MARGIN}More about me [2] · Download CV [v] · Social links [a]"),
        Style::default().fg(theme.text_muted),
    )));
    out
}

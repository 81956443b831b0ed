//! Contact region: reach-out details and the message form.

use crate::state::FormState;
use crate::theme::MidnightTheme;
use crate::views::helpers::{blank, editable_line, heading, label_value, wrapped, MARGIN};
use folio_core::{Field, Profile};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use tui_textarea::TextArea;

/// Rows shown for the message field. The window follows the cursor so the
/// region height never depends on how much was typed.
const MESSAGE_ROWS: usize = 5;

pub fn lines(
    profile: &Profile,
    form: &FormState,
    theme: &MidnightTheme,
    width: u16,
) -> Vec<Line<'static>> {
    let mut out = vec![
        blank(),
        heading("Contact Me", Style::default().fg(theme.primary), width),
        blank(),
    ];
    out.extend(wrapped(
        &profile.contact.pitch,
        width,
        Style::default().fg(theme.text_dim),
    ));
    out.push(blank());

    let label_style = Style::default().fg(theme.primary);
    let value_style = Style::default().fg(theme.text);
    out.push(label_value("Email", &profile.contact.email, label_style, value_style));
    out.push(label_value("Phone", &profile.contact.phone, label_style, value_style));
    out.push(label_value("Location", &profile.contact.location, label_style, value_style));
    out.push(blank());

    out.push(Line::from(Span::styled(
        format!("{MARGIN}Send me a message"),
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )));
    out.push(blank());
    out.extend(field_lines(
        "Name",
        form.area(Field::Name),
        form.focus == Some(Field::Name),
        1,
        "Enter your Name",
        theme,
    ));
    out.extend(field_lines(
        "Email",
        form.area(Field::Email),
        form.focus == Some(Field::Email),
        1,
        "Enter your Email",
        theme,
    ));
    out.extend(field_lines(
        "Message",
        form.area(Field::Message),
        form.focus == Some(Field::Message),
        MESSAGE_ROWS,
        "Your Message",
        theme,
    ));
    out.push(blank());
    out.push(Line::from(Span::styled(
        format!("{MARGIN}[i] write · [Tab] next field · [Enter] send · [Esc] done"),
        Style::default().fg(theme.text_muted),
    )));
    out
}

/// Render one form field as `rows` lines with a fixed height.
fn field_lines(
    label: &str,
    area: &TextArea<'static>,
    focused: bool,
    rows: usize,
    placeholder: &str,
    theme: &MidnightTheme,
) -> Vec<Line<'static>> {
    let label_style = if focused {
        Style::default()
            .fg(theme.border_focus)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_dim)
    };
    let value_style = Style::default().fg(theme.text);
    let (cursor_row, cursor_col) = area.cursor();
    let content = area.lines();
    let empty = content.iter().all(|l| l.is_empty());

    // Window the content rows so the cursor row is always shown.
    let start = if focused {
        cursor_row.saturating_sub(rows.saturating_sub(1))
    } else {
        0
    };

    let mut out = Vec::with_capacity(rows);
    for offset in 0..rows {
        let row = start + offset;
        let prefix = if offset == 0 {
            Span::styled(format!("{MARGIN}{label:<9}▏ "), label_style)
        } else {
            Span::styled(format!("{MARGIN}{:<9}▏ ", ""), label_style)
        };
        if empty && !focused && offset == 0 {
            out.push(Line::from(vec![
                prefix,
                Span::styled(
                    placeholder.to_string(),
                    Style::default()
                        .fg(theme.text_muted)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]));
            continue;
        }
        let text = content.get(row).map(String::as_str).unwrap_or("");
        let cursor = (focused && row == cursor_row).then_some(cursor_col);
        out.push(editable_line(prefix, text, cursor, value_style));
    }
    out
}

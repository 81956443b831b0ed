//! Common line-building helpers for the page renderers.
//!
//! The page body is one tall column of styled lines scrolled behind the
//! viewport, so the section renderers build `Line` values rather than
//! widgets. Everything here returns owned lines.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Left margin applied to body text.
pub const MARGIN: &str = "  ";

pub fn blank() -> Line<'static> {
    Line::from("")
}

/// A centered, bold section heading.
pub fn heading(text: &str, style: Style, width: u16) -> Line<'static> {
    let len = text.chars().count();
    let pad = (usize::from(width).saturating_sub(len)) / 2;
    Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(text.to_string(), style.add_modifier(Modifier::BOLD)),
    ])
}

/// Wrap a paragraph to the body width, one styled line per row.
pub fn wrapped(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    let usable = usize::from(width).saturating_sub(MARGIN.len() * 2).max(20);
    let options = textwrap::Options::new(usable)
        .initial_indent(MARGIN)
        .subsequent_indent(MARGIN);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|row| Line::from(Span::styled(row.into_owned(), style)))
        .collect()
}

/// A "Label: value" row.
pub fn label_value(
    label: &str,
    value: &str,
    label_style: Style,
    value_style: Style,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{MARGIN}{label:<10}"), label_style),
        Span::styled(value.to_string(), value_style),
    ])
}

/// A textual proficiency bar, `width` cells wide.
pub fn level_bar(level: u8, width: usize) -> String {
    let filled = usize::from(level.min(100)) * width / 100;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

/// One row of an editable field. When `cursor` names a char offset the char
/// under it is drawn reversed, standing in for the terminal cursor.
pub fn editable_line(
    prefix: Span<'static>,
    text: &str,
    cursor: Option<usize>,
    style: Style,
) -> Line<'static> {
    let mut spans = vec![prefix];
    match cursor {
        Some(col) => {
            let before: String = text.chars().take(col).collect();
            let at: String = text.chars().nth(col).map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());
            let after: String = text.chars().skip(col + 1).collect();
            spans.push(Span::styled(before, style));
            spans.push(Span::styled(at, style.add_modifier(Modifier::REVERSED)));
            spans.push(Span::styled(after, style));
        }
        None => spans.push(Span::styled(text.to_string(), style)),
    }
    Line::from(spans)
}

/// Centered popup rectangle, `percent_x`/`percent_y` of the full area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

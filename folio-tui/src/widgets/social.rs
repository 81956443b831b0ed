//! Social links panel.
//!
//! A toggleable popup listing the profile's four outbound links; the
//! selected one can be opened in the system browser.

use folio_core::SocialLink;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

/// Selection state for the panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct SocialState {
    pub selected: usize,
}

impl SocialState {
    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_previous(&mut self, len: usize) {
        if len > 0 {
            self.selected = if self.selected == 0 {
                len - 1
            } else {
                self.selected - 1
            };
        }
    }
}

pub struct SocialPanel<'a> {
    pub title: &'a str,
    pub links: &'a [SocialLink],
    pub selected: usize,
    pub normal: Style,
    pub highlight: Style,
    pub border: Style,
}

impl<'a> SocialPanel<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = self
            .links
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let style = if i == self.selected {
                    self.highlight.add_modifier(Modifier::BOLD)
                } else {
                    self.normal
                };
                let marker = if i == self.selected { "> " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}{:<10}", marker, link.kind.label()), style),
                    Span::styled(link.url.clone(), self.normal),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(self.title)
                .borders(Borders::ALL)
                .border_style(self.border),
        );
        f.render_widget(Clear, area);
        f.render_widget(list, area);
    }
}

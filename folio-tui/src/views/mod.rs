//! Page assembly and rendering.
//!
//! The page is one tall column of lines. `build_page` assembles it and
//! reports each region's bounds; the same call backs both the layout used
//! by the visibility observer and the lines drawn each frame, so geometry
//! and pixels cannot drift apart.

pub mod about;
pub mod contact;
pub mod helpers;
pub mod hero;
pub mod services;
pub mod skills;

pub use helpers::centered_rect;

use crate::notifications::NotificationLevel;
use crate::state::{App, FormState, Modal, NavMenu};
use crate::theme::{notification_color, MidnightTheme};
use crate::widgets::SocialPanel;
use folio_core::{Profile, RegionBounds, ABOUT, CONTACT, HOME, SERVICES, SKILLS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 2;

/// The assembled page: its lines and the region geometry they imply.
pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub regions: Vec<RegionBounds>,
    pub height: u16,
}

/// Build the page at `width`. Every region is padded to at least
/// `min_region_height` lines, which keeps one region dominant in the
/// viewport at a time.
pub fn build_page(
    profile: &Profile,
    form: &FormState,
    typed: &str,
    theme: &MidnightTheme,
    width: u16,
    min_region_height: u16,
) -> Page {
    let sections: [(&str, Vec<Line<'static>>); 5] = [
        (HOME, hero::lines(profile, typed, theme, width)),
        (ABOUT, about::lines(profile, theme, width)),
        (SERVICES, services::lines(profile, theme, width)),
        (SKILLS, skills::lines(profile, theme, width)),
        (CONTACT, contact::lines(profile, form, theme, width)),
    ];

    let mut lines = Vec::new();
    let mut regions = Vec::new();
    let mut top = 0u16;
    for (id, mut section_lines) in sections {
        while (section_lines.len() as u16) < min_region_height {
            section_lines.push(helpers::blank());
        }
        let height = section_lines.len() as u16;
        regions.push(RegionBounds::new(id, top, height));
        top = top.saturating_add(height);
        lines.extend(section_lines);
    }

    Page {
        lines,
        regions,
        height: top,
    }
}

pub fn render_page(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);
    render_body(f, app, layout[1]);
    render_footer(f, app, layout[2]);

    if let Some(menu) = &app.nav_menu {
        render_nav_menu(f, app, menu);
    }
    if app.links_panel_visible {
        render_links_panel(f, app);
    }
    if let Some(modal) = &app.modal {
        render_modal(f, app, modal);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            app.profile.name.clone(),
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    for (i, entry) in app.nav.iter().enumerate() {
        let active = entry.target_id == app.session.active_id();
        let style = if active {
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(app.theme.text_dim)
        };
        spans.push(Span::styled(format!("{} [{}]", entry.label, i + 1), style));
        spans.push(Span::raw("  "));
    }
    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(header, area);
}

fn render_body(f: &mut Frame<'_>, app: &App, area: Rect) {
    let page = build_page(
        &app.profile,
        &app.form,
        app.session.typed_text(),
        &app.theme,
        area.width,
        app.viewport_height,
    );
    let body = Paragraph::new(Text::from(page.lines))
        .style(Style::default().bg(app.theme.bg).fg(app.theme.text))
        .scroll((app.scroll.current, 0));
    f.render_widget(body, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = "j/k scroll · Tab/1-5 sections · i message · v CV · a links · m menu · ? help · q quit";
    let (text, style) = if let Some(note) = app.notifications.last() {
        let label = match note.level {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "SUCCESS",
        };
        let color = notification_color(note.level, &app.theme);
        (
            format!("{}: {}", label, note.message),
            Style::default().fg(color),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .style(style);
    f.render_widget(footer, area);
}

fn render_nav_menu(f: &mut Frame<'_>, app: &App, menu: &NavMenu) {
    let area = centered_rect(30, 40, f.size());
    let items: Vec<ListItem> = app
        .nav
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == menu.selected {
                Style::default()
                    .fg(app.theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text)
            };
            let marker = if i == menu.selected { "> " } else { "  " };
            ListItem::new(Span::styled(format!("{marker}{}", entry.label), style))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title("Navigate")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border_focus)),
    );
    f.render_widget(Clear, area);
    f.render_widget(list, area);
}

fn render_links_panel(f: &mut Frame<'_>, app: &App) {
    let area = centered_rect(70, 30, f.size());
    let panel = SocialPanel {
        title: "Social links [Enter to open]",
        links: &app.profile.social,
        selected: app.links.selected,
        normal: Style::default().fg(app.theme.text),
        highlight: Style::default().fg(app.theme.primary),
        border: Style::default().fg(app.theme.border_focus),
    };
    panel.render(f, area);
}

fn render_modal(f: &mut Frame<'_>, app: &App, modal: &Modal) {
    let area = centered_rect(60, 40, f.size());
    let body = Paragraph::new(modal.message.clone())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(app.theme.text))
        .block(
            Block::default()
                .title(modal.title.clone())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focus)),
        );
    f.render_widget(Clear, area);
    f.render_widget(body, area);
}

// ============================================================================
// TESTS
// ============================================================================

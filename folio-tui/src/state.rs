//! Application state and UI interaction logic.

use crate::config::TuiConfig;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::MidnightTheme;
use crate::views;
use crate::widgets::SocialState;
use crossterm::event::KeyEvent;
use folio_core::{
    nav_entries, ContactForm, Field, NavEntry, NullDelivery, Profile, RegionBounds, ViewSession,
    Viewport, CONTACT,
};
use std::process::{Command, Stdio};
use std::time::Instant;
use tui_textarea::TextArea;

/// Scroll position over the page, in lines. `target` is where the viewport
/// is headed; `step` closes a quarter of the remaining distance per tick so
/// navigation glides instead of jumping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub current: u16,
    pub target: u16,
}

impl ScrollState {
    /// Move one animation step toward the target. Returns whether the
    /// position changed.
    pub fn step(&mut self) -> bool {
        if self.current == self.target {
            return false;
        }
        let diff = i32::from(self.target) - i32::from(self.current);
        let magnitude = (diff.abs() / 4).max(1) as u16;
        if diff > 0 {
            self.current = self.current.saturating_add(magnitude).min(self.target);
        } else {
            self.current = self.current.saturating_sub(magnitude).max(self.target);
        }
        true
    }

    /// Clamp both positions after the page shrank.
    pub fn clamp_to(&mut self, max: u16) {
        self.current = self.current.min(max);
        self.target = self.target.min(max);
    }
}

/// The navigation overlay: every entry in a list with a selection cursor.
#[derive(Debug, Clone)]
pub struct NavMenu {
    pub selected: usize,
}

impl NavMenu {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

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

impl Default for NavMenu {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

/// Editor state for the contact form. The text areas own the keystrokes;
/// the core [`ContactForm`] model is synced from them at submit time.
pub struct FormState {
    pub name: TextArea<'static>,
    pub email: TextArea<'static>,
    pub message: TextArea<'static>,
    pub focus: Option<Field>,
    pub model: ContactForm,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            name: TextArea::default(),
            email: TextArea::default(),
            message: TextArea::default(),
            focus: None,
            model: ContactForm::new(),
        }
    }

    pub fn area(&self, field: Field) -> &TextArea<'static> {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn area_mut(&mut self, field: Field) -> &mut TextArea<'static> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn value(&self, field: Field) -> String {
        self.area(field).lines().join("\n")
    }

    /// Route a keystroke to the focused field.
    pub fn input(&mut self, key: KeyEvent) {
        if let Some(field) = self.focus {
            self.area_mut(field).input(key);
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.map(|f| f.next()).or(Some(Field::Name));
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.map(|f| f.previous()).or(Some(Field::Name));
    }

    pub fn sync_model(&mut self) {
        for field in Field::all() {
            let value = self.value(*field);
            self.model.set(*field, value);
        }
    }

    pub fn reset_inputs(&mut self) {
        self.name = TextArea::default();
        self.email = TextArea::default();
        self.message = TextArea::default();
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct App {
    pub config: TuiConfig,
    pub theme: MidnightTheme,
    pub profile: Profile,
    pub nav: Vec<NavEntry>,
    pub session: ViewSession,

    pub scroll: ScrollState,
    pub layout: Vec<RegionBounds>,
    pub page_height: u16,
    pub viewport_height: u16,

    pub form: FormState,
    pub nav_menu: Option<NavMenu>,
    pub links_panel_visible: bool,
    pub links: SocialState,
    pub modal: Option<Modal>,
    pub notifications: Vec<Notification>,
}

impl App {
    pub fn new(config: TuiConfig, profile: Profile, now: Instant) -> Self {
        let nav = nav_entries();
        let session = ViewSession::mount(&nav, profile.phrases.clone(), config.typed_timing(), now);
        Self {
            theme: MidnightTheme::midnight(),
            config,
            profile,
            nav,
            session,
            scroll: ScrollState::default(),
            layout: Vec::new(),
            page_height: 0,
            viewport_height: 0,
            form: FormState::new(),
            nav_menu: None,
            links_panel_visible: false,
            links: SocialState::default(),
            modal: None,
            notifications: Vec::new(),
        }
    }

    /// Recompute the page layout for a terminal size. Called at startup and
    /// on every resize; region heights depend only on width and viewport
    /// height, so the layout stays valid between calls.
    pub fn relayout(&mut self, width: u16, height: u16) {
        self.viewport_height = height.saturating_sub(views::HEADER_HEIGHT + views::FOOTER_HEIGHT);
        let page = views::build_page(
            &self.profile,
            &self.form,
            self.session.typed_text(),
            &self.theme,
            width,
            self.viewport_height,
        );
        self.layout = page.regions;
        self.page_height = page.height;
        let max = self.max_scroll();
        self.scroll.clamp_to(max);
    }

    pub fn max_scroll(&self) -> u16 {
        self.page_height.saturating_sub(self.viewport_height)
    }

    /// One event-loop tick: advance the typing effect, move the scroll
    /// animation, and re-observe visibility if the viewport moved.
    pub fn on_tick(&mut self, now: Instant) {
        self.session.advance(now);
        if self.scroll.step() {
            self.observe_now();
        }
    }

    /// Feed the current geometry through the visibility observer.
    pub fn observe_now(&mut self) {
        let viewport = Viewport::new(self.scroll.current, self.viewport_height);
        self.session.observe(&self.layout, viewport);
    }

    /// Scroll toward the region with `target_id` and close the nav overlay.
    /// Does not touch the active region; that follows from the crossing the
    /// scroll produces. An unknown target only closes the overlay.
    pub fn navigate(&mut self, target_id: &str) {
        self.nav_menu = None;
        let Some(region) = self.layout.iter().find(|r| r.id == target_id) else {
            return;
        };
        self.scroll.target = region.top.min(self.max_scroll());
        tracing::debug!(target = target_id, "navigate");
    }

    pub fn jump_to(&mut self, index: usize) {
        if let Some(entry) = self.nav.get(index) {
            let target = entry.target_id.clone();
            self.navigate(&target);
        }
    }

    /// Navigate to the entry before/after the one currently active.
    pub fn navigate_adjacent(&mut self, step: i32) {
        if self.nav.is_empty() {
            return;
        }
        let position = self
            .nav
            .iter()
            .position(|e| e.target_id == self.session.active_id())
            .unwrap_or(0);
        let len = self.nav.len() as i32;
        let next = (position as i32 + step).rem_euclid(len) as usize;
        self.jump_to(next);
    }

    pub fn scroll_lines(&mut self, delta: i32) {
        let max = i32::from(self.max_scroll());
        let target = (i32::from(self.scroll.target) + delta).clamp(0, max);
        self.scroll.target = target as u16;
    }

    pub fn scroll_up(&mut self) {
        if let Some(menu) = &mut self.nav_menu {
            let len = self.nav.len();
            menu.select_previous(len);
        } else if self.links_panel_visible {
            self.links.select_previous(self.profile.social.len());
        } else {
            self.scroll_lines(-1);
        }
    }

    pub fn scroll_down(&mut self) {
        if let Some(menu) = &mut self.nav_menu {
            let len = self.nav.len();
            menu.select_next(len);
        } else if self.links_panel_visible {
            self.links.select_next(self.profile.social.len());
        } else {
            self.scroll_lines(1);
        }
    }

    pub fn page_up(&mut self) {
        self.scroll_lines(-i32::from(self.viewport_height.max(1)));
    }

    pub fn page_down(&mut self) {
        self.scroll_lines(i32::from(self.viewport_height.max(1)));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.target = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.target = self.max_scroll();
    }

    pub fn toggle_menu(&mut self) {
        self.nav_menu = match self.nav_menu {
            Some(_) => None,
            None => Some(NavMenu::new()),
        };
    }

    pub fn toggle_links(&mut self) {
        self.links_panel_visible = !self.links_panel_visible;
    }

    pub fn open_help(&mut self) {
        self.modal = Some(Modal {
            title: "Keybindings".to_string(),
            message: "j/k or arrows scroll, Tab/1-5 jump to a section, m menu, \
                      i write a message, v download CV, a social links, q quit."
                .to_string(),
        });
    }

    /// Focus the contact form and bring its region into view.
    pub fn focus_form(&mut self) {
        self.form.focus = Some(Field::Name);
        self.navigate(CONTACT);
    }

    /// Context-sensitive confirm: overlays first, then the contact region.
    pub fn confirm(&mut self) {
        if self.modal.take().is_some() {
            return;
        }
        if let Some(menu) = &self.nav_menu {
            let target = self.nav.get(menu.selected).map(|e| e.target_id.clone());
            if let Some(target) = target {
                self.navigate(&target);
            } else {
                self.nav_menu = None;
            }
            return;
        }
        if self.links_panel_visible {
            self.open_selected_link();
            return;
        }
        if self.session.active_id() == CONTACT {
            self.focus_form();
        }
    }

    pub fn cancel(&mut self) {
        if self.modal.take().is_some() {
            return;
        }
        if self.nav_menu.take().is_some() {
            return;
        }
        self.links_panel_visible = false;
    }

    /// Submit the contact form: a complete form yields exactly one success
    /// acknowledgment and clears every field; an incomplete one changes
    /// nothing and reports the missing field.
    pub fn submit_form(&mut self) {
        self.form.sync_model();
        match self.form.model.submit(&NullDelivery) {
            Ok(_) => {
                self.form.reset_inputs();
                self.form.focus = None;
                self.notify(NotificationLevel::Success, "Message sent successfully!");
            }
            Err(err) => {
                self.notify(NotificationLevel::Warning, err.to_string());
            }
        }
    }

    /// Copy the configured CV into the download directory. The source is not
    /// checked beforehand; a failed copy is reported like a failed download.
    pub fn download_cv(&mut self) {
        let file_name = self
            .config
            .cv_source
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "cv.pdf".into());
        let dest = self.config.download_dir.join(file_name);
        match std::fs::copy(&self.config.cv_source, &dest) {
            Ok(_) => {
                tracing::info!(dest = %dest.display(), "cv exported");
                self.notify(
                    NotificationLevel::Success,
                    format!("CV saved to {}", dest.display()),
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "cv export failed");
                self.notify(
                    NotificationLevel::Error,
                    format!("CV download failed: {err}"),
                );
            }
        }
    }

    /// Open the selected social link in the system browser.
    pub fn open_selected_link(&mut self) {
        let Some(link) = self.profile.social.get(self.links.selected) else {
            return;
        };
        let url = link.url.clone();
        let label = link.kind.label();
        match Command::new("xdg-open")
            .arg(&url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(_) => self.notify(NotificationLevel::Info, format!("Opening {label}")),
            Err(err) => self.notify(
                NotificationLevel::Error,
                format!("Failed to open {url}: {err}"),
            ),
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    /// Detach the view session; nothing observable mutates afterwards.
    pub fn detach(&mut self) {
        self.session.detach();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{ABOUT, HOME, SKILLS};
    use std::time::Duration;

    fn app() -> App {
        let mut app = App::new(TuiConfig::default(), Profile::default(), Instant::now());
        app.relayout(100, 40);
        app.observe_now();
        app
    }

    fn success_count(app: &App) -> usize {
        app.notifications
            .iter()
            .filter(|n| n.level == NotificationLevel::Success)
            .count()
    }

    fn settle(app: &mut App, start: Instant) {
        let mut now = start;
        for _ in 0..500 {
            now += Duration::from_millis(25);
            app.on_tick(now);
            if app.scroll.current == app.scroll.target {
                break;
            }
        }
    }

    fn type_into(app: &mut App, field: Field, text: &str) {
        use crossterm::event::{KeyCode, KeyModifiers};
        app.form.focus = Some(field);
        for c in text.chars() {
            app.form
                .input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    // ========================================================================
    // Scroll Animation Tests
    // ========================================================================

    #[test]
    fn test_scroll_step_converges_without_overshoot() {
        let mut scroll = ScrollState {
            current: 0,
            target: 100,
        };
        let mut previous = 0;
        for _ in 0..200 {
            scroll.step();
            assert!(scroll.current <= scroll.target);
            assert!(scroll.current >= previous);
            previous = scroll.current;
        }
        assert_eq!(scroll.current, 100);
    }

    #[test]
    fn test_scroll_step_backwards() {
        let mut scroll = ScrollState {
            current: 80,
            target: 10,
        };
        for _ in 0..200 {
            scroll.step();
        }
        assert_eq!(scroll.current, 10);
    }

    #[test]
    fn test_scroll_step_at_target_is_noop() {
        let mut scroll = ScrollState {
            current: 5,
            target: 5,
        };
        assert!(!scroll.step());
    }

    // ========================================================================
    // Navigation Tests
    // ========================================================================

    #[test]
    fn test_initial_active_region_is_home() {
        let app = app();
        assert_eq!(app.session.active_id(), HOME);
    }

    #[test]
    fn test_navigate_sets_scroll_target() {
        let mut app = app();
        app.navigate(ABOUT);
        let about = app.layout.iter().find(|r| r.id == ABOUT).unwrap();
        assert_eq!(app.scroll.target, about.top.min(app.max_scroll()));
    }

    // The highlight intentionally lags a nav click: navigate only scrolls,
    // and the active region updates when the moving viewport produces the
    // next crossing.
    #[test]
    fn test_navigate_leaves_active_id_until_observation() {
        let mut app = app();
        app.navigate("contact");
        assert_eq!(app.session.active_id(), HOME);

        settle(&mut app, Instant::now());
        assert_eq!(app.session.active_id(), "contact");
    }

    #[test]
    fn test_navigate_closes_nav_overlay() {
        let mut app = app();
        app.nav_menu = Some(NavMenu::new());
        app.navigate("contact");
        assert!(app.nav_menu.is_none());
    }

    #[test]
    fn test_navigate_unknown_target_is_noop_but_closes_overlay() {
        let mut app = app();
        app.nav_menu = Some(NavMenu::new());
        let before = app.scroll;
        app.navigate("blog");
        assert_eq!(app.scroll, before);
        assert!(app.nav_menu.is_none());
    }

    #[test]
    fn test_scrolling_to_skills_updates_active_region() {
        let mut app = app();
        app.navigate(SKILLS);
        settle(&mut app, Instant::now());
        assert_eq!(app.session.active_id(), SKILLS);
    }

    #[test]
    fn test_jump_to_out_of_range_is_noop() {
        let mut app = app();
        let before = app.scroll;
        app.jump_to(99);
        assert_eq!(app.scroll, before);
    }

    #[test]
    fn test_confirm_in_menu_navigates_to_selection() {
        let mut app = app();
        app.toggle_menu();
        app.scroll_down(); // select "About"
        app.confirm();
        assert!(app.nav_menu.is_none());
        let about = app.layout.iter().find(|r| r.id == ABOUT).unwrap();
        assert_eq!(app.scroll.target, about.top.min(app.max_scroll()));
    }

    #[test]
    fn test_manual_scroll_clamps_to_page() {
        let mut app = app();
        app.scroll_lines(-10);
        assert_eq!(app.scroll.target, 0);
        app.scroll_lines(i32::from(u16::MAX));
        assert_eq!(app.scroll.target, app.max_scroll());
    }

    // ========================================================================
    // Contact Form Tests
    // ========================================================================

    #[test]
    fn test_submit_complete_form_acknowledges_once_and_clears() {
        let mut app = app();
        type_into(&mut app, Field::Name, "Ada");
        type_into(&mut app, Field::Email, "ada@example.com");
        type_into(&mut app, Field::Message, "Hello!");

        app.submit_form();

        assert_eq!(success_count(&app), 1);
        assert!(app.form.value(Field::Name).is_empty());
        assert!(app.form.value(Field::Email).is_empty());
        assert!(app.form.value(Field::Message).is_empty());
        assert!(app.form.focus.is_none());
    }

    #[test]
    fn test_submit_incomplete_form_produces_no_success() {
        let mut app = app();
        type_into(&mut app, Field::Name, "Ada");

        app.submit_form();

        assert_eq!(success_count(&app), 0);
        // The populated field is untouched.
        assert_eq!(app.form.value(Field::Name), "Ada");
    }

    #[test]
    fn test_focus_form_targets_contact_region() {
        let mut app = app();
        app.focus_form();
        assert_eq!(app.form.focus, Some(Field::Name));
        let contact = app.layout.iter().find(|r| r.id == "contact").unwrap();
        assert_eq!(app.scroll.target, contact.top.min(app.max_scroll()));
    }

    // ========================================================================
    // CV Export Tests
    // ========================================================================

    #[test]
    fn test_download_cv_copies_into_download_dir() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("cv.pdf");
        std::fs::write(&source, b"pdf bytes").unwrap();

        let mut app = app();
        app.config.cv_source = source;
        app.config.download_dir = dir.path().join("downloads");
        std::fs::create_dir_all(&app.config.download_dir).unwrap();

        app.download_cv();

        assert_eq!(success_count(&app), 1);
        assert!(app.config.download_dir.join("cv.pdf").exists());
    }

    #[test]
    fn test_download_cv_missing_source_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app();
        app.config.cv_source = dir.path().join("missing.pdf");
        app.config.download_dir = dir.path().to_path_buf();

        app.download_cv();

        assert_eq!(success_count(&app), 0);
        assert!(app
            .notifications
            .iter()
            .any(|n| n.level == NotificationLevel::Error));
    }

    // ========================================================================
    // Teardown Tests
    // ========================================================================

    #[test]
    fn test_detach_stops_all_mutation() {
        let mut app = app();
        let now = Instant::now();
        settle(&mut app, now);
        let text = app.session.typed_text().to_string();
        let active = app.session.active_id().to_string();

        app.detach();
        app.navigate("contact");
        settle(&mut app, now + Duration::from_secs(60));

        assert_eq!(app.session.typed_text(), text);
        assert_eq!(app.session.active_id(), active);
    }
}

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

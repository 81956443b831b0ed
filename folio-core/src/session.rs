//! View mount/unmount lifecycle.
//!
//! A [`ViewSession`] owns the pieces that run for as long as the page is
//! mounted: the visibility observer, the section tracker, and the phrase
//! cycler. Constructing it is the mount; [`ViewSession::detach`] is the
//! unmount. After detach every entry point is a no-op, so nothing observable
//! mutates once the view is gone.

use crate::content::NavEntry;
use crate::tracker::{RegionBounds, SectionTracker, Viewport, ViewportObserver, VisibilityObserver};
use crate::typed::{TypedPhrase, TypedTiming};
use std::time::Instant;

#[derive(Debug)]
pub struct ViewSession {
    tracker: SectionTracker,
    observer: ViewportObserver,
    cycler: TypedPhrase,
    attached: bool,
}

impl ViewSession {
    /// Mount the view: the active region starts as the first nav entry's
    /// target and the cycler starts on the first phrase.
    pub fn mount(
        entries: &[NavEntry],
        phrases: Vec<String>,
        timing: TypedTiming,
        now: Instant,
    ) -> Self {
        let initial = entries
            .first()
            .map(|e| e.target_id.clone())
            .unwrap_or_default();
        Self {
            tracker: SectionTracker::new(initial),
            observer: ViewportObserver::new(),
            cycler: TypedPhrase::new(phrases, timing, now),
            attached: true,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn active_id(&self) -> &str {
        self.tracker.active_id()
    }

    pub fn typed_text(&self) -> &str {
        self.cycler.text()
    }

    pub fn typed_index(&self) -> usize {
        self.cycler.index()
    }

    /// Advance the phrase cycler to `now`. No-op once detached.
    pub fn advance(&mut self, now: Instant) {
        if self.attached {
            self.cycler.advance(now);
        }
    }

    /// Run one observation pass over the current region geometry and apply
    /// any crossings to the active region. No-op once detached.
    pub fn observe(&mut self, regions: &[RegionBounds], viewport: Viewport) {
        if self.attached {
            let batch = self.observer.observe(regions, viewport);
            self.tracker.observe(&batch);
        }
    }

    /// Unmount: stop the cycler and drop the observation state. Idempotent.
    pub fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            self.cycler.stop();
            self.observer.reset();
            tracing::debug!("view session detached");
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::nav_entries;
    use std::time::Duration;

    fn session(now: Instant) -> ViewSession {
        ViewSession::mount(
            &nav_entries(),
            vec!["Developer".to_string(), "Builder".to_string()],
            TypedTiming::default(),
            now,
        )
    }

    fn regions() -> Vec<RegionBounds> {
        vec![
            RegionBounds::new("home", 0, 20),
            RegionBounds::new("about", 20, 10),
        ]
    }

    #[test]
    fn test_mount_seeds_active_from_first_entry() {
        let session = session(Instant::now());
        assert_eq!(session.active_id(), "home");
        assert!(session.is_attached());
    }

    #[test]
    fn test_mount_with_no_entries_has_empty_active() {
        let session = ViewSession::mount(
            &[],
            vec!["Developer".to_string()],
            TypedTiming::default(),
            Instant::now(),
        );
        assert_eq!(session.active_id(), "");
    }

    #[test]
    fn test_observe_updates_active_region() {
        let now = Instant::now();
        let mut session = session(now);
        session.observe(&regions(), Viewport::new(0, 20));
        assert_eq!(session.active_id(), "home");
        session.observe(&regions(), Viewport::new(16, 20));
        assert_eq!(session.active_id(), "about");
    }

    #[test]
    fn test_detach_freezes_everything() {
        let now = Instant::now();
        let mut session = session(now);
        session.advance(now + Duration::from_millis(400));
        session.observe(&regions(), Viewport::new(0, 20));
        let text = session.typed_text().to_string();
        let active = session.active_id().to_string();

        session.detach();
        assert!(!session.is_attached());

        session.advance(now + Duration::from_secs(30));
        session.observe(&regions(), Viewport::new(16, 20));
        assert_eq!(session.typed_text(), text);
        assert_eq!(session.active_id(), active);
    }

    #[test]
    fn test_detach_is_idempotent() {
        let mut session = session(Instant::now());
        session.detach();
        session.detach();
        assert!(!session.is_attached());
    }
}

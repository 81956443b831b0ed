//! Region visibility tracking and the active-region state.
//!
//! The tracker answers one question for the nav bar: which content region is
//! currently considered active. It only ever reacts to crossing events, a
//! region's visible fraction moving from below the threshold to at-or-above
//! it. The platform side (scroll geometry here, an intersection API in a
//! browser) is abstracted behind [`VisibilityObserver`] so the tracker logic
//! is testable on its own.

use std::collections::HashMap;

/// Fraction of a region that must be visible before it becomes active.
pub const VISIBILITY_THRESHOLD: f32 = 0.5;

/// A content region's position within the page, in line units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionBounds {
    pub id: String,
    /// First page line of the region.
    pub top: u16,
    /// Height in lines. A zero-height region is never visible.
    pub height: u16,
}

impl RegionBounds {
    pub fn new(id: impl Into<String>, top: u16, height: u16) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Line just past the bottom of the region.
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// The visible line window over the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// Notification that a region's visible fraction crossed the threshold
/// upward in the latest observation.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossingEvent {
    pub id: String,
    /// Visible fraction at observation time, in [0, 1].
    pub fraction: f32,
    /// The region's top line, used for deterministic tie-breaking.
    pub top: u16,
}

/// The fraction of `region` currently inside `viewport`, in [0, 1].
pub fn visible_fraction(region: &RegionBounds, viewport: Viewport) -> f32 {
    if region.height == 0 {
        return 0.0;
    }
    let top = region.top.max(viewport.top);
    let bottom = region.bottom().min(viewport.bottom());
    if bottom <= top {
        return 0.0;
    }
    f32::from(bottom - top) / f32::from(region.height)
}

/// Capability interface over the platform's visibility detection. An
/// implementation turns the current region geometry into crossing events;
/// only upward crossings of [`VISIBILITY_THRESHOLD`] are reported.
pub trait VisibilityObserver {
    fn observe(&mut self, regions: &[RegionBounds], viewport: Viewport) -> Vec<CrossingEvent>;
}

/// Scroll-geometry observer. Remembers each region's previous fraction and
/// emits an event when one moves from below the threshold to at-or-above it.
/// The first observation treats every region as previously invisible, so a
/// region already past the threshold fires immediately.
#[derive(Debug, Default)]
pub struct ViewportObserver {
    previous: HashMap<String, f32>,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all previous fractions; the next observation fires for every
    /// region at-or-above the threshold.
    pub fn reset(&mut self) {
        self.previous.clear();
    }
}

impl VisibilityObserver for ViewportObserver {
    fn observe(&mut self, regions: &[RegionBounds], viewport: Viewport) -> Vec<CrossingEvent> {
        let mut events = Vec::new();
        for region in regions {
            let fraction = visible_fraction(region, viewport);
            let was = self
                .previous
                .insert(region.id.clone(), fraction)
                .unwrap_or(0.0);
            if was < VISIBILITY_THRESHOLD && fraction >= VISIBILITY_THRESHOLD {
                events.push(CrossingEvent {
                    id: region.id.clone(),
                    fraction,
                    top: region.top,
                });
            }
        }
        events
    }
}

/// The mutable record of which region is active for highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub active_id: String,
}

/// Maintains [`ViewState`] from crossing-event batches.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    state: ViewState,
}

impl SectionTracker {
    /// The initial active id is the first nav entry's target.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            state: ViewState {
                active_id: initial.into(),
            },
        }
    }

    pub fn active_id(&self) -> &str {
        &self.state.active_id
    }

    /// Apply one observation batch. When several regions crossed at once the
    /// topmost one wins; an empty batch leaves the state unchanged.
    pub fn observe(&mut self, batch: &[CrossingEvent]) {
        if let Some(event) = batch.iter().min_by_key(|e| e.top) {
            self.state.active_id = event.id.clone();
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<RegionBounds> {
        vec![
            RegionBounds::new("home", 0, 20),
            RegionBounds::new("about", 20, 10),
            RegionBounds::new("skills", 30, 10),
        ]
    }

    #[test]
    fn test_fraction_fully_visible() {
        let region = RegionBounds::new("home", 0, 10);
        assert_eq!(visible_fraction(&region, Viewport::new(0, 20)), 1.0);
    }

    #[test]
    fn test_fraction_half_visible() {
        let region = RegionBounds::new("about", 10, 10);
        // Viewport covers lines 0..15, so 5 of the region's 10 lines show.
        assert_eq!(visible_fraction(&region, Viewport::new(0, 15)), 0.5);
    }

    #[test]
    fn test_fraction_outside_viewport_is_zero() {
        let region = RegionBounds::new("skills", 40, 10);
        assert_eq!(visible_fraction(&region, Viewport::new(0, 20)), 0.0);
    }

    #[test]
    fn test_fraction_zero_height_region() {
        let region = RegionBounds::new("empty", 5, 0);
        assert_eq!(visible_fraction(&region, Viewport::new(0, 20)), 0.0);
    }

    #[test]
    fn test_first_observation_fires_for_visible_regions() {
        let mut observer = ViewportObserver::new();
        let events = observer.observe(&page(), Viewport::new(0, 20));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "home");
    }

    #[test]
    fn test_no_event_while_region_stays_above_threshold() {
        let mut observer = ViewportObserver::new();
        observer.observe(&page(), Viewport::new(0, 20));
        let events = observer.observe(&page(), Viewport::new(1, 20));
        assert!(events.iter().all(|e| e.id != "home"));
    }

    #[test]
    fn test_crossing_fires_on_upward_edge_only() {
        let mut observer = ViewportObserver::new();
        let regions = page();
        observer.observe(&regions, Viewport::new(0, 20));

        // Scroll until about is half visible: viewport 6..26 shows 6 of 10.
        let events = observer.observe(&regions, Viewport::new(6, 20));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "about");

        // Scrolling back below the threshold emits nothing.
        let events = observer.observe(&regions, Viewport::new(0, 20));
        assert!(events.is_empty());

        // Crossing upward again re-fires.
        let events = observer.observe(&regions, Viewport::new(6, 20));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "about");
    }

    #[test]
    fn test_reset_forgets_previous_fractions() {
        let mut observer = ViewportObserver::new();
        let regions = page();
        observer.observe(&regions, Viewport::new(0, 20));
        observer.reset();
        let events = observer.observe(&regions, Viewport::new(0, 20));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "home");
    }

    #[test]
    fn test_tracker_initial_active_id() {
        let tracker = SectionTracker::new("home");
        assert_eq!(tracker.active_id(), "home");
    }

    #[test]
    fn test_tracker_empty_batch_leaves_state() {
        let mut tracker = SectionTracker::new("home");
        tracker.observe(&[]);
        assert_eq!(tracker.active_id(), "home");
    }

    #[test]
    fn test_tracker_single_crossing_sets_active() {
        let mut tracker = SectionTracker::new("home");
        tracker.observe(&[CrossingEvent {
            id: "skills".to_string(),
            fraction: 0.6,
            top: 30,
        }]);
        assert_eq!(tracker.active_id(), "skills");
    }

    #[test]
    fn test_tracker_batch_tie_break_topmost_wins() {
        let mut tracker = SectionTracker::new("home");
        tracker.observe(&[
            CrossingEvent {
                id: "skills".to_string(),
                fraction: 0.9,
                top: 30,
            },
            CrossingEvent {
                id: "about".to_string(),
                fraction: 0.5,
                top: 20,
            },
        ]);
        assert_eq!(tracker.active_id(), "about");
    }

    #[test]
    fn test_scroll_to_skills_scenario() {
        let mut observer = ViewportObserver::new();
        let mut tracker = SectionTracker::new("home");
        let regions = page();

        tracker.observe(&observer.observe(&regions, Viewport::new(0, 20)));
        assert_eq!(tracker.active_id(), "home");

        // Scroll down one line at a time until skills is half visible.
        for top in 1..=20 {
            tracker.observe(&observer.observe(&regions, Viewport::new(top, 20)));
        }
        assert_eq!(tracker.active_id(), "skills");
    }
}

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

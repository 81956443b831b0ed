//! The typing-text effect: a lazy, endless cycle of character-reveal states
//! over a fixed phrase list.
//!
//! The cycler is a pure state machine advanced with explicit timestamps; the
//! timer that drives it lives in the event loop. Each step schedules its own
//! deadline, so typing, deleting, and the holds between them can run at
//! different intervals.

use std::time::{Duration, Instant};

/// Step intervals for the effect: 80ms per typed character, 60ms per
/// deleted character, a one-second hold on the full phrase. All intervals
/// must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedTiming {
    pub type_interval: Duration,
    pub delete_interval: Duration,
    pub hold_full: Duration,
    pub hold_empty: Duration,
}

impl Default for TypedTiming {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(80),
            delete_interval: Duration::from_millis(60),
            hold_full: Duration::from_millis(1000),
            hold_empty: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    HoldingFull,
    Deleting,
    HoldingEmpty,
}

/// Endless phrase cycler. `advance` performs every step whose deadline has
/// passed; `text` is the currently revealed prefix of the current phrase.
#[derive(Debug, Clone)]
pub struct TypedPhrase {
    phrases: Vec<String>,
    timing: TypedTiming,
    index: usize,
    visible: String,
    phase: Phase,
    deadline: Instant,
    running: bool,
}

impl TypedPhrase {
    /// Start the cycle at the first phrase with nothing revealed yet.
    /// `phrases` must be non-empty (the profile validation guarantees it).
    pub fn new(phrases: Vec<String>, timing: TypedTiming, now: Instant) -> Self {
        let deadline = now + timing.type_interval;
        Self {
            phrases,
            timing,
            index: 0,
            visible: String::new(),
            phase: Phase::Typing,
            deadline,
            running: true,
        }
    }

    /// The revealed prefix of the current phrase.
    pub fn text(&self) -> &str {
        &self.visible
    }

    /// Index of the phrase currently being cycled.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the full phrase is currently shown.
    pub fn is_full(&self) -> bool {
        self.phase == Phase::HoldingFull
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the cycle. Further `advance` calls are no-ops; the text freezes
    /// at whatever was revealed.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Restart from the first phrase with nothing revealed.
    pub fn restart(&mut self, now: Instant) {
        self.index = 0;
        self.visible.clear();
        self.phase = Phase::Typing;
        self.deadline = now + self.timing.type_interval;
        self.running = true;
    }

    /// Perform every step due at or before `now`.
    pub fn advance(&mut self, now: Instant) {
        if !self.running || self.phrases.is_empty() {
            return;
        }
        while self.deadline <= now {
            self.step();
        }
    }

    fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    fn step(&mut self) {
        match self.phase {
            Phase::Typing => {
                let phrase_len = self.current_phrase().chars().count();
                let next = self
                    .current_phrase()
                    .chars()
                    .nth(self.visible.chars().count());
                match next {
                    Some(c) => {
                        self.visible.push(c);
                        if self.visible.chars().count() == phrase_len {
                            self.phase = Phase::HoldingFull;
                            self.deadline += self.timing.hold_full;
                        } else {
                            self.deadline += self.timing.type_interval;
                        }
                    }
                    None => {
                        // Already complete (possible for an empty phrase).
                        self.phase = Phase::HoldingFull;
                        self.deadline += self.timing.hold_full;
                    }
                }
            }
            Phase::HoldingFull => {
                self.phase = Phase::Deleting;
                self.deadline += self.timing.delete_interval;
            }
            Phase::Deleting => {
                self.visible.pop();
                if self.visible.is_empty() {
                    self.phase = Phase::HoldingEmpty;
                    self.deadline += self.timing.hold_empty;
                } else {
                    self.deadline += self.timing.delete_interval;
                }
            }
            Phase::HoldingEmpty => {
                self.index = (self.index + 1) % self.phrases.len();
                self.phase = Phase::Typing;
                self.deadline += self.timing.type_interval;
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================


// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// Property: after any advance, the visible text is a prefix of the
        /// current phrase and the index stays in bounds.
        #[test]
        fn prop_state_stays_consistent(
            phrases in prop::collection::vec("[a-zA-Z ]{1,12}", 1..5),
            steps in prop::collection::vec(1u64..40, 1..60),
        ) {
            let now = Instant::now();
            let mut cycler = TypedPhrase::new(phrases.clone(), TypedTiming::default(), now);
            let mut t = now;
            for ms in steps {
                t += Duration::from_millis(ms);
                cycler.advance(t);
                prop_assert!(cycler.index() < phrases.len());
                prop_assert!(phrases[cycler.index()].starts_with(cycler.text()));
            }
        }

        /// Property: a stopped cycler never mutates again.
        #[test]
        fn prop_stop_is_permanent(advance_ms in 0u64..5_000, later_ms in 0u64..100_000) {
            let now = Instant::now();
            let mut cycler = TypedPhrase::new(
                vec!["Developer".to_string()],
                TypedTiming::default(),
                now,
            );
            cycler.advance(now + Duration::from_millis(advance_ms));
            let frozen = (cycler.text().to_string(), cycler.index());
            cycler.stop();
            cycler.advance(now + Duration::from_millis(advance_ms + later_ms));
            prop_assert_eq!((cycler.text().to_string(), cycler.index()), frozen);
        }
    }
}

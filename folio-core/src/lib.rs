//! Folio Core - Page Content and View State
//!
//! Pure data and state machines with no terminal dependencies. The TUI crate
//! drives everything here from its event loop: the profile content model, the
//! region visibility tracker, the typing-text cycler, the contact form, and
//! the view-session lifecycle that ties them together.

pub mod content;
pub mod form;
pub mod session;
pub mod tracker;
pub mod typed;

pub use content::{
    nav_entries, region_ids, validate_nav_targets, ContactDetails, NavEntry, Profile,
    ProfileError, Service, Skill, SocialKind, SocialLink, ABOUT, CONTACT, HOME, SERVICES, SKILLS,
};
pub use form::{ContactDelivery, ContactForm, ContactSubmission, Field, FormError, NullDelivery};
pub use session::ViewSession;
pub use tracker::{
    CrossingEvent, RegionBounds, SectionTracker, ViewState, Viewport, ViewportObserver,
    VisibilityObserver, VISIBILITY_THRESHOLD,
};
pub use typed::{TypedPhrase, TypedTiming};

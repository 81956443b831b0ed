//! Reusable widget components.

pub mod social;

pub use social::{SocialPanel, SocialState};

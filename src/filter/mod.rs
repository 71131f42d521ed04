//! Category visibility filtering over the canonical graph

pub mod toggles;
pub mod visibility;

pub use toggles::TypeToggles;
pub use visibility::{compute_visible, VisibilityFilter, VisibleGraph};

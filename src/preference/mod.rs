//! Theme preference values and their serialized form.
//!
//! This module provides:
//!
//! - [`ThemePreference`]: The user's stored choice among light, dark, or system
//! - [`ParsePreferenceError`]: Error returned when a token is not a known preference
//!
//! Preferences serialize to a single canonical token (`light`, `dark`, `system`).
//! The legacy `theme-light` token is still accepted when reading.

mod error;
mod value;

pub use error::ParsePreferenceError;
pub use value::{ThemePreference, LEGACY_LIGHT_TOKEN};

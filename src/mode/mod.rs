//! Effective display mode resolution.
//!
//! This module provides:
//!
//! - [`EffectiveMode`]: The mode actually rendered, dark or light
//! - [`ColorSchemeSource`]: The host signal consulted for `system` preferences
//! - [`OsColorScheme`]: Source backed by the operating system setting
//! - [`FixedColorScheme`]: Source that always reports one mode
//! - [`compute_effective_mode`]: Resolves a preference against a source

mod effective;
mod source;

pub use effective::{compute_effective_mode, EffectiveMode};
pub use source::{ColorSchemeSource, FixedColorScheme, OsColorScheme};

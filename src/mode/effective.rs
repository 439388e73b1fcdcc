//! The resolved display mode.

use std::fmt;

use super::source::ColorSchemeSource;
use crate::preference::ThemePreference;

/// What is actually rendered once `system` has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectiveMode {
    Light,
    Dark,
}

impl EffectiveMode {
    pub fn is_dark(self) -> bool {
        self == EffectiveMode::Dark
    }

    fn from_dark(dark: bool) -> Self {
        if dark {
            EffectiveMode::Dark
        } else {
            EffectiveMode::Light
        }
    }
}

impl fmt::Display for EffectiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectiveMode::Light => f.write_str("light"),
            EffectiveMode::Dark => f.write_str("dark"),
        }
    }
}

/// Resolves a preference to the mode that should be displayed.
///
/// Explicit choices win; `system` defers to `source`. The source is not
/// queried for explicit choices.
///
/// # Example
///
/// ```rust
/// use themepref::{compute_effective_mode, EffectiveMode, FixedColorScheme, ThemePreference};
///
/// let os = FixedColorScheme::light();
/// assert_eq!(compute_effective_mode(ThemePreference::Dark, &os), EffectiveMode::Dark);
/// assert_eq!(compute_effective_mode(ThemePreference::System, &os), EffectiveMode::Light);
/// ```
pub fn compute_effective_mode<C>(preference: ThemePreference, source: &C) -> EffectiveMode
where
    C: ColorSchemeSource + ?Sized,
{
    match preference {
        ThemePreference::Dark => EffectiveMode::Dark,
        ThemePreference::Light => EffectiveMode::Light,
        ThemePreference::System => EffectiveMode::from_dark(source.prefers_dark()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::FixedColorScheme;

    #[test]
    fn test_dark_ignores_os_signal() {
        for os in [FixedColorScheme::dark(), FixedColorScheme::light()] {
            assert_eq!(
                compute_effective_mode(ThemePreference::Dark, &os),
                EffectiveMode::Dark
            );
        }
    }

    #[test]
    fn test_light_ignores_os_signal() {
        for os in [FixedColorScheme::dark(), FixedColorScheme::light()] {
            assert_eq!(
                compute_effective_mode(ThemePreference::Light, &os),
                EffectiveMode::Light
            );
        }
    }

    #[test]
    fn test_system_tracks_os_signal() {
        assert_eq!(
            compute_effective_mode(ThemePreference::System, &FixedColorScheme::dark()),
            EffectiveMode::Dark
        );
        assert_eq!(
            compute_effective_mode(ThemePreference::System, &FixedColorScheme::light()),
            EffectiveMode::Light
        );
    }

    #[test]
    fn test_explicit_choice_does_not_query_source() {
        let source = || -> bool { panic!("source should not be queried") };
        assert_eq!(
            compute_effective_mode(ThemePreference::Light, &source),
            EffectiveMode::Light
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(EffectiveMode::Dark.to_string(), "dark");
        assert_eq!(EffectiveMode::Light.to_string(), "light");
        assert!(EffectiveMode::Dark.is_dark());
        assert!(!EffectiveMode::Light.is_dark());
    }
}

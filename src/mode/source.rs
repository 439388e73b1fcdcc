//! Host color-scheme signals.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

/// Reports whether the host currently prefers a dark color scheme.
///
/// Consulted only when the preference is `system`. Implemented for plain
/// closures so tests and embedders can pass `|| true` directly.
pub trait ColorSchemeSource {
    fn prefers_dark(&self) -> bool;
}

impl<F> ColorSchemeSource for F
where
    F: Fn() -> bool,
{
    fn prefers_dark(&self) -> bool {
        self()
    }
}

/// Reads the operating system's light/dark setting on every query.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsColorScheme;

impl ColorSchemeSource for OsColorScheme {
    fn prefers_dark(&self) -> bool {
        let dark = matches!(detect_os_theme(), OsThemeMode::Dark);
        tracing::debug!(dark, "queried OS color scheme");
        dark
    }
}

/// A source pinned to one answer.
///
/// Useful when the host signal is unavailable, e.g. while pre-rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedColorScheme {
    dark: bool,
}

impl FixedColorScheme {
    pub fn dark() -> Self {
        Self { dark: true }
    }

    pub fn light() -> Self {
        Self { dark: false }
    }
}

impl ColorSchemeSource for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_fixed_sources() {
        assert!(FixedColorScheme::dark().prefers_dark());
        assert!(!FixedColorScheme::light().prefers_dark());
    }

    #[test]
    fn test_closure_source_is_queried_each_time() {
        let calls = Cell::new(0);
        let source = || {
            calls.set(calls.get() + 1);
            calls.get() % 2 == 1
        };

        assert!(source.prefers_dark());
        assert!(!source.prefers_dark());
        assert_eq!(calls.get(), 2);
    }
}

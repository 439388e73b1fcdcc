//! The [`ThemePreference`] enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ParsePreferenceError;

/// Token older stores wrote for the light choice.
///
/// Read as [`ThemePreference::Light`], never written.
pub const LEGACY_LIGHT_TOKEN: &str = "theme-light";

/// The user's chosen theme.
///
/// `System` defers to the host's color-scheme signal; the other two are
/// explicit overrides.
///
/// # Example
///
/// ```rust
/// use themepref::ThemePreference;
///
/// let pref: ThemePreference = "dark".parse().unwrap();
/// assert_eq!(pref, ThemePreference::Dark);
/// assert_eq!(pref.as_str(), "dark");
///
/// // Older stores used a prefixed token for light.
/// let legacy: ThemePreference = "theme-light".parse().unwrap();
/// assert_eq!(legacy.as_str(), "light");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// All preferences, in the order a picker presents them.
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    /// The canonical token written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Human-readable label for menus.
    pub fn label(self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        }
    }

    /// Whether this preference follows the host color scheme.
    pub fn follows_system(self) -> bool {
        self == ThemePreference::System
    }
}

impl FromStr for ThemePreference {
    type Err = ParsePreferenceError;

    /// Accepts exactly the canonical tokens plus [`LEGACY_LIGHT_TOKEN`].
    ///
    /// Matching is exact: no trimming, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" | LEGACY_LIGHT_TOKEN => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            _ => Err(ParsePreferenceError::new(s)),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ThemePreference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ThemePreference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

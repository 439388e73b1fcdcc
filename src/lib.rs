//! # themepref - Light, dark and system theme preferences
//!
//! `themepref` owns the small piece of state behind a theme toggle: the user's
//! choice among light, dark, or following the operating system. It resolves
//! that choice against the host's color scheme, marks a document root with a
//! dark presentation class, and persists the choice.
//!
//! ## Quick Start
//!
//! ```rust
//! use themepref::{
//!     ClassList, DocumentRoot, FixedColorScheme, MemoryStore, ThemePreference,
//!     ThemePreferenceManager,
//! };
//!
//! let store = MemoryStore::new().with_entry("theme", "dark");
//! let mut manager = ThemePreferenceManager::new(store, ClassList::new(), FixedColorScheme::light());
//!
//! // The explicit choice overrides the light OS setting.
//! assert_eq!(manager.mount(), ThemePreference::Dark);
//! assert!(manager.document().unwrap().has_class("dark"));
//! ```
//!
//! ## Collaborators
//!
//! The manager never reaches for globals. Everything it touches is injected:
//!
//! - [`PreferenceStore`]: where the choice is persisted ([`MemoryStore`], [`FileStore`])
//! - [`DocumentRoot`]: what receives the presentation class ([`ClassList`])
//! - [`ColorSchemeSource`]: the host signal for `system` ([`OsColorScheme`], [`FixedColorScheme`], closures)
//!
//! A manager built with [`ThemePreferenceManager::without_document`] behaves as
//! during static pre-rendering: it reports the default preference and leaves
//! storage alone.
//!
//! ## Stored Values
//!
//! The choice is written under the `theme` key as `light`, `dark` or `system`.
//! Anything else reads as `system`. The older `theme-light` token is read as
//! `light` and rewritten on the next apply.

pub mod config;
pub mod document;
pub mod manager;
pub mod mode;
pub mod preference;
pub mod store;

pub use config::{ConfigError, ThemeConfig, DEFAULT_DARK_CLASS, DEFAULT_STORAGE_KEY};
pub use document::{ClassList, DocumentRoot};
pub use manager::ThemePreferenceManager;
pub use mode::{
    compute_effective_mode, ColorSchemeSource, EffectiveMode, FixedColorScheme, OsColorScheme,
};
pub use preference::{ParsePreferenceError, ThemePreference, LEGACY_LIGHT_TOKEN};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError};

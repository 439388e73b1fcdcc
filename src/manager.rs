//! The theme preference manager.

use tracing::{debug, warn};

use crate::config::ThemeConfig;
use crate::document::{ClassList, DocumentRoot};
use crate::mode::{compute_effective_mode, ColorSchemeSource, EffectiveMode, OsColorScheme};
use crate::preference::ThemePreference;
use crate::store::PreferenceStore;

/// Resolves, applies and persists the user's theme preference.
///
/// The manager owns its three collaborators: a [`PreferenceStore`] for the
/// persisted choice, an optional [`DocumentRoot`] that receives the dark
/// presentation class, and a [`ColorSchemeSource`] consulted when the
/// preference is `system`. A manager without a document models a
/// pre-rendering context: it never reads or writes the store and reports
/// [`ThemePreference::System`].
///
/// None of the operations fail. Store errors are logged and treated as an
/// absent value.
///
/// # Example
///
/// ```rust
/// use themepref::{
///     ClassList, DocumentRoot, EffectiveMode, FixedColorScheme, MemoryStore,
///     ThemePreference, ThemePreferenceManager,
/// };
///
/// let mut manager = ThemePreferenceManager::new(
///     MemoryStore::new(),
///     ClassList::new(),
///     FixedColorScheme::dark(),
/// );
///
/// // Nothing stored, OS is dark.
/// assert_eq!(manager.mount(), ThemePreference::System);
/// assert!(manager.document().unwrap().has_class("dark"));
///
/// // The user picks light.
/// assert_eq!(manager.select(ThemePreference::Light), EffectiveMode::Light);
/// assert_eq!(manager.store().value("theme"), Some("light"));
/// assert!(!manager.document().unwrap().has_class("dark"));
/// ```
#[derive(Debug)]
pub struct ThemePreferenceManager<S, D, C = OsColorScheme> {
    config: ThemeConfig,
    store: S,
    document: Option<D>,
    source: C,
    current: ThemePreference,
}

impl<S, D, C> ThemePreferenceManager<S, D, C>
where
    S: PreferenceStore,
    D: DocumentRoot,
    C: ColorSchemeSource,
{
    /// Creates a manager for a document-capable environment.
    pub fn new(store: S, document: D, source: C) -> Self {
        Self::from_parts(store, Some(document), source)
    }

    /// Creates a manager from an optional document.
    ///
    /// `None` means no document exists, as during static pre-rendering.
    pub fn from_parts(store: S, document: Option<D>, source: C) -> Self {
        Self {
            config: ThemeConfig::default(),
            store,
            document,
            source,
            current: ThemePreference::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: ThemeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> Option<&D> {
        self.document.as_ref()
    }

    /// Whether a document is available to receive classes.
    pub fn is_interactive(&self) -> bool {
        self.document.is_some()
    }

    /// The preference last set by [`mount`](Self::mount) or [`select`](Self::select).
    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// The mode the current preference resolves to right now.
    pub fn effective_mode(&self) -> EffectiveMode {
        self.compute_effective_mode(self.current)
    }

    /// Determines the starting preference.
    ///
    /// Without a document this is `system` and storage is not touched.
    /// Otherwise the stored value is returned when it is exactly one of the
    /// known tokens, and `system` when it is absent, invalid or unreadable.
    pub fn initialize(&self) -> ThemePreference {
        let default = ThemePreference::default();
        if !self.is_interactive() {
            debug!(preference = %default, "no document, using default preference");
            return default;
        }

        let key = self.config.storage_key();
        let stored = match self.store.get(key) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(key, error = %e, "failed to read stored theme preference");
                return default;
            }
        };

        match stored.as_deref().map(str::parse::<ThemePreference>) {
            Some(Ok(preference)) => preference,
            Some(Err(e)) => {
                debug!(key, error = %e, "ignoring invalid stored theme preference");
                default
            }
            None => default,
        }
    }

    /// Resolves `preference` against this manager's color-scheme source.
    pub fn compute_effective_mode(&self, preference: ThemePreference) -> EffectiveMode {
        compute_effective_mode(preference, &self.source)
    }

    /// Applies `preference` to the document and persists it.
    ///
    /// Toggles the presentation class to match the effective mode, then
    /// writes the canonical token under the storage key. Both steps are
    /// skipped without a document. Calling this repeatedly with the same
    /// preference leaves the same state. Does not change
    /// [`current`](Self::current).
    pub fn apply_preference(&mut self, preference: ThemePreference) -> EffectiveMode {
        let mode = self.compute_effective_mode(preference);

        let Some(document) = self.document.as_mut() else {
            return mode;
        };
        document.toggle_class(self.config.dark_class(), mode.is_dark());

        let key = self.config.storage_key();
        if let Err(e) = self.store.set(key, preference.as_str()) {
            warn!(key, %preference, error = %e, "failed to persist theme preference");
        }

        debug!(%preference, %mode, "applied theme preference");
        mode
    }

    /// Initializes and applies the starting preference.
    ///
    /// Run once when the host component mounts. A legacy stored token is
    /// rewritten in canonical form here.
    pub fn mount(&mut self) -> ThemePreference {
        let preference = self.initialize();
        self.current = preference;
        self.apply_preference(preference);
        preference
    }

    /// Handles an explicit user choice. Any preference may follow any other.
    pub fn select(&mut self, preference: ThemePreference) -> EffectiveMode {
        self.current = preference;
        self.apply_preference(preference)
    }

    /// Re-applies the current preference.
    ///
    /// Call when the host reports a color-scheme change so a `system`
    /// preference picks it up.
    pub fn refresh(&mut self) -> EffectiveMode {
        self.apply_preference(self.current)
    }

    /// Consumes the manager, returning the store and document.
    pub fn into_parts(self) -> (S, Option<D>) {
        (self.store, self.document)
    }
}

impl<S, C> ThemePreferenceManager<S, ClassList, C>
where
    S: PreferenceStore,
    C: ColorSchemeSource,
{
    /// Creates a manager with no document, for pre-rendering.
    pub fn without_document(store: S, source: C) -> Self {
        Self::from_parts(store, None, source)
    }
}

//! Theme preference model and manager.
//!
//! DESIGN
//! ======
//! `ThemeManager` owns the preference and is the only code that writes the
//! storage slot or touches the presentation surface. Host access goes
//! through three seams (`PreferenceStore`, `ColorSchemeProbe`,
//! `PresentationSurface`) so the same manager drives the browser in
//! `util::browser_theme` and in-memory fakes in tests.
//!
//! Every mutation runs persist, resolve, and apply in one synchronous call;
//! callers never observe a persisted mode whose presentation is stale.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Storage key used when no override is configured.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Marker attribute set on the document root when no override is configured.
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";

/// Errors surfaced by the theme subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A theme consumer was rendered outside a `ThemeProvider`.
    #[error("use_theme must be used within a ThemeProvider")]
    MissingProvider,
    /// A stored or supplied mode string is not `light`, `dark`, or `system`.
    #[error("unknown theme mode: {0:?}")]
    UnknownMode(String),
    /// The durable storage slot rejected a write.
    #[error("theme storage unavailable: {0}")]
    Storage(String),
}

// =============================================================================
// MODES
// =============================================================================

/// User-selected theme mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Defer to the host's reported color-scheme preference.
    #[default]
    System,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Resolved mode used before the host can be queried.
    ///
    /// `System` maps to light, matching a host that reports no dark preference.
    pub fn fallback_resolved(self) -> ResolvedTheme {
        match self {
            Self::Dark => ResolvedTheme::Dark,
            Self::Light | Self::System => ResolvedTheme::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ThemeError::UnknownMode(other.to_owned())),
        }
    }
}

impl From<ResolvedTheme> for ThemeMode {
    fn from(resolved: ResolvedTheme) -> Self {
        match resolved {
            ResolvedTheme::Light => Self::Light,
            ResolvedTheme::Dark => Self::Dark,
        }
    }
}

/// Concrete presentation mode after `System` has been resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite mode; used by toggling.
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// PREFERENCE + CONFIG
// =============================================================================

/// Snapshot of the theme state handed to consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePreference {
    /// Mode chosen by the user (or adopted during initialization).
    pub mode: ThemeMode,
    /// Concrete mode applied to the page.
    pub resolved: ResolvedTheme,
    /// Whether initial resolution has completed. Consumers must not render
    /// mode-dependent visuals until this is true.
    pub mounted: bool,
}

impl ThemePreference {
    /// Pre-mount state built from the configured default.
    pub fn unmounted(default_mode: ThemeMode) -> Self {
        Self { mode: default_mode, resolved: default_mode.fallback_resolved(), mounted: false }
    }
}

/// Manager configuration. One manager type covers every provider variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Mode held before mount, and adopted at mount when nothing is stored
    /// and `follow_system` is off.
    pub default_mode: ThemeMode,
    /// Key of the durable storage slot.
    pub storage_key: String,
    /// Attribute set on the document root to the resolved mode, if any.
    pub attribute: Option<String>,
    /// When nothing is stored, query the host preference instead of
    /// adopting `default_mode`.
    pub follow_system: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_mode: ThemeMode::System,
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: Some(DEFAULT_ATTRIBUTE.to_owned()),
            follow_system: true,
        }
    }
}

impl ThemeConfig {
    /// Config that starts dark and ignores the host preference when nothing
    /// is stored.
    pub fn always_dark() -> Self {
        Self { default_mode: ThemeMode::Dark, follow_system: false, ..Self::default() }
    }
}

// =============================================================================
// HOST SEAMS
// =============================================================================

/// Durable key-value slot holding the persisted mode.
pub trait PreferenceStore {
    /// Read the raw value for `key`. Unavailable storage reads as `None`.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError::Storage` when the slot rejects the write.
    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Host query answering "does the user prefer a dark color scheme".
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> bool;
}

/// Page-wide presentation marker.
pub trait PresentationSurface {
    /// Replace any previously applied mode marker with `resolved`, and set
    /// `attribute` to it when one is configured.
    fn apply(&mut self, resolved: ResolvedTheme, attribute: Option<&str>);
}

// =============================================================================
// MANAGER
// =============================================================================

/// Determines, stores, and applies the active theme.
#[derive(Debug)]
pub struct ThemeManager<S, P, A> {
    config: ThemeConfig,
    store: S,
    probe: P,
    surface: A,
    preference: ThemePreference,
}

impl<S, P, A> ThemeManager<S, P, A>
where
    S: PreferenceStore,
    P: ColorSchemeProbe,
    A: PresentationSurface,
{
    pub fn new(config: ThemeConfig, store: S, probe: P, surface: A) -> Self {
        let preference = ThemePreference::unmounted(config.default_mode);
        Self { config, store, probe, surface, preference }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn surface(&self) -> &A {
        &self.surface
    }

    /// Current preference. No side effects.
    pub fn get_theme(&self) -> ThemePreference {
        self.preference
    }

    /// Run the initialization protocol once per session.
    ///
    /// A stored mode wins. Otherwise the host preference (or the configured
    /// default) decides. The result is persisted and applied before
    /// `mounted` flips. Later calls return the current preference unchanged.
    pub fn initialize(&mut self) -> ThemePreference {
        if self.preference.mounted {
            return self.preference;
        }

        let mode = match self.stored_mode() {
            Some(mode) => mode,
            None if self.config.follow_system => {
                ResolvedTheme::from_prefers_dark(self.probe.prefers_dark()).into()
            }
            None => self.config.default_mode,
        };

        self.preference.mode = mode;
        self.commit();
        self.preference.mounted = true;
        self.preference
    }

    /// Set the mode, persist it, and apply the resolved presentation.
    ///
    /// Before mount only the in-memory preference changes; initialization
    /// still runs normally afterwards.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.preference.mode = mode;
        if self.preference.mounted {
            self.commit();
        } else {
            self.preference.resolved = mode.fallback_resolved();
        }
    }

    /// Flip between light and dark based on the resolved mode.
    pub fn toggle_theme(&mut self) {
        let next = self.preference.resolved.flipped();
        self.set_theme(next.into());
    }

    fn stored_mode(&self) -> Option<ThemeMode> {
        let raw = self.store.read(&self.config.storage_key)?;
        match raw.parse() {
            Ok(mode) => Some(mode),
            Err(err) => {
                leptos::logging::warn!("ignoring stored theme: {err}");
                None
            }
        }
    }

    fn resolve(&self, mode: ThemeMode) -> ResolvedTheme {
        match mode {
            ThemeMode::Light => ResolvedTheme::Light,
            ThemeMode::Dark => ResolvedTheme::Dark,
            ThemeMode::System => ResolvedTheme::from_prefers_dark(self.probe.prefers_dark()),
        }
    }

    /// Update protocol: persist, resolve, apply.
    fn commit(&mut self) {
        let mode = self.preference.mode;
        if let Err(err) = self.store.write(&self.config.storage_key, mode.as_str()) {
            leptos::logging::warn!("theme not persisted: {err}");
        }
        let resolved = self.resolve(mode);
        self.surface.apply(resolved, self.config.attribute.as_deref());
        self.preference.resolved = resolved;
    }
}

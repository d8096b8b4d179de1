//! Theme context provider.
//!
//! ARCHITECTURE
//! ============
//! `ThemeProvider` sits at the root of the component tree and owns the only
//! `ThemeManager`. Descendants read the preference and request changes
//! through the `ThemeContext` handle; none of them touch the document root
//! directly.
//!
//! Initialization runs in an effect, so it happens in the browser after
//! hydration and never during server rendering. Until then `mounted()` is
//! false and consumers render mode-neutral placeholders.

#[cfg(test)]
#[path = "theme_provider_test.rs"]
mod theme_provider_test;

use leptos::prelude::*;

use crate::state::theme::{ResolvedTheme, ThemeConfig, ThemeError, ThemeManager, ThemeMode, ThemePreference};
use crate::util::browser_theme::{DocumentRoot, LocalStorage, MediaQueryProbe};

type BrowserThemeManager = ThemeManager<LocalStorage, MediaQueryProbe, DocumentRoot>;

/// Copyable handle to the theme state, provided via context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    preference: RwSignal<ThemePreference>,
    manager: StoredValue<BrowserThemeManager>,
}

impl ThemeContext {
    pub fn new(config: ThemeConfig) -> Self {
        let manager = ThemeManager::new(config, LocalStorage, MediaQueryProbe, DocumentRoot);
        let preference = RwSignal::new(manager.get_theme());
        Self { preference, manager: StoredValue::new(manager) }
    }

    /// Current preference, tracked.
    pub fn preference(&self) -> ThemePreference {
        self.preference.get()
    }

    /// Current preference without subscribing; for event handlers.
    pub fn snapshot(&self) -> ThemePreference {
        self.preference.get_untracked()
    }

    pub fn resolved(&self) -> ResolvedTheme {
        self.preference.with(|p| p.resolved)
    }

    pub fn mounted(&self) -> bool {
        self.preference.with(|p| p.mounted)
    }

    pub fn initialize(&self) {
        self.run(|m| {
            m.initialize();
        });
    }

    pub fn set_theme(&self, mode: ThemeMode) {
        self.run(|m| m.set_theme(mode));
    }

    pub fn toggle_theme(&self) {
        self.run(BrowserThemeManager::toggle_theme);
    }

    /// Run a manager operation and publish the resulting preference in the
    /// same call.
    fn run(&self, op: impl FnOnce(&mut BrowserThemeManager)) {
        let next = self.manager.try_update_value(|m| {
            op(m);
            m.get_theme()
        });
        if let Some(next) = next {
            self.preference.set(next);
        }
    }
}

/// Provide theme state to all descendants.
#[component]
pub fn ThemeProvider(
    /// Storage key, default mode, attribute, and system policy.
    #[prop(optional)]
    config: ThemeConfig,
    children: Children,
) -> impl IntoView {
    let theme = ThemeContext::new(config);
    provide_context(theme);

    Effect::new(move || theme.initialize());

    children()
}

/// Theme handle from context.
///
/// # Errors
///
/// Returns `ThemeError::MissingProvider` when no `ThemeProvider` is an
/// ancestor of the calling component.
pub fn try_use_theme() -> Result<ThemeContext, ThemeError> {
    use_context::<ThemeContext>().ok_or(ThemeError::MissingProvider)
}

/// Theme handle from context.
///
/// # Panics
///
/// Panics when no `ThemeProvider` is an ancestor of the calling component.
/// Rendering a theme consumer outside the provider is a wiring bug.
#[track_caller]
pub fn use_theme() -> ThemeContext {
    match try_use_theme() {
        Ok(theme) => theme,
        Err(err) => panic!("{err}"),
    }
}

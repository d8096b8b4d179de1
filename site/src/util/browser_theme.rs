//! Browser host for the theme manager.
//!
//! Reads and writes the preference in `localStorage`, queries
//! `prefers-color-scheme`, and marks the `<html>` element. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Outside `hydrate` every adapter is inert: storage reads as empty, the host
//! reports no dark preference, and nothing is marked. Server rendering stays
//! deterministic and the page hydrates before any theme is applied.

#[cfg(test)]
#[path = "browser_theme_test.rs"]
mod browser_theme_test;

use crate::state::theme::{ColorSchemeProbe, PreferenceStore, PresentationSurface, ResolvedTheme, ThemeError};

#[cfg(feature = "hydrate")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()
                .ok_or_else(|| ThemeError::Storage("no local storage".to_owned()))?
                .set_item(key, value)
                .map_err(|e| ThemeError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQueryProbe;

impl ColorSchemeProbe for MediaQueryProbe {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// The `<html>` element's class list and marker attribute.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl PresentationSurface for DocumentRoot {
    fn apply(&mut self, resolved: ResolvedTheme, attribute: Option<&str>) {
        #[cfg(feature = "hydrate")]
        {
            let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element())
            else {
                return;
            };
            let classes = root.class_list();
            if let Err(e) = classes
                .remove_2(ResolvedTheme::Light.as_str(), ResolvedTheme::Dark.as_str())
                .and_then(|()| classes.add_1(resolved.as_str()))
            {
                leptos::logging::warn!("theme class not applied: {e:?}");
            }
            if let Some(name) = attribute {
                if let Err(e) = root.set_attribute(name, resolved.as_str()) {
                    leptos::logging::warn!("theme attribute {name} not set: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (resolved, attribute);
        }
    }
}

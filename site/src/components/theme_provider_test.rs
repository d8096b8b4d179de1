#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn try_use_theme_outside_provider_errors() {
    let owner = Owner::new();
    owner.with(|| {
        assert_eq!(try_use_theme().err(), Some(ThemeError::MissingProvider));
    });
}

#[test]
#[should_panic(expected = "use_theme must be used within a ThemeProvider")]
fn use_theme_outside_provider_panics() {
    let owner = Owner::new();
    owner.with(|| {
        use_theme();
    });
}

#[test]
fn provided_context_is_found() {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(ThemeContext::new(ThemeConfig::default()));
        assert!(try_use_theme().is_ok());
    });
}

#[test]
fn context_starts_unmounted() {
    let owner = Owner::new();
    owner.with(|| {
        let theme = ThemeContext::new(ThemeConfig::always_dark());
        let pref = theme.snapshot();
        assert!(!pref.mounted);
        assert_eq!(pref.resolved, ResolvedTheme::Dark);
    });
}

#[test]
fn initialize_publishes_mounted_preference() {
    let owner = Owner::new();
    owner.with(|| {
        let theme = ThemeContext::new(ThemeConfig::default());
        theme.initialize();
        let pref = theme.snapshot();
        assert!(pref.mounted);
        assert_eq!(pref.resolved, ResolvedTheme::Light);
    });
}

#[test]
fn set_and_toggle_publish_immediately() {
    let owner = Owner::new();
    owner.with(|| {
        let theme = ThemeContext::new(ThemeConfig::default());
        theme.initialize();

        theme.set_theme(ThemeMode::Dark);
        assert_eq!(theme.snapshot().resolved, ResolvedTheme::Dark);

        theme.toggle_theme();
        assert_eq!(theme.snapshot().resolved, ResolvedTheme::Light);
        assert_eq!(theme.snapshot().mode, ThemeMode::Light);
    });
}

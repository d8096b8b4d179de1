//! Reveal-on-scroll visibility test.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Fraction of an element that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Whether an element spanning `[top, top + height)` in viewport coordinates
/// shows at least `threshold` of itself inside a viewport of
/// `viewport_height`.
///
/// Zero-height elements count as visible when their top lies inside the
/// viewport.
pub fn is_revealed(top: f64, height: f64, viewport_height: f64, threshold: f64) -> bool {
    if height <= 0.0 {
        return top >= 0.0 && top < viewport_height;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    visible > 0.0 && visible / height >= threshold
}

/// Viewport height of the browser window.
pub fn viewport_height() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

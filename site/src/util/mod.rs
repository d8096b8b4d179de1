//! Utility helpers shared across site modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod browser_theme;
pub mod contributions;
pub mod reveal;
pub mod scroll_spy;
pub mod typewriter;

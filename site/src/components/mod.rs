//! UI components for the portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `theme_provider` owns theme state for the whole tree. Section components
//! render static content from `content` and only keep local UI state.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod reveal;
pub mod skills;
pub mod social_links;
pub mod stats;
pub mod theme_provider;
pub mod theme_toggle;

//! Client-side state models.
//!
//! ARCHITECTURE
//! ============
//! Plain data types and pure transitions live here; components wrap them in
//! signals or provide them through Leptos context.

pub mod contact;
pub mod nav;
pub mod theme;

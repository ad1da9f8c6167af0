//! Hapil UI Components
//!
//! Dioxus components for the quiet, paper-like reading aesthetic:
//! - **Plum (#6B4E71)**: buttons and arrows
//! - **Ink (#4A4A4A)**: excerpt text and titles
//! - **Graphite (#7A7A7A)**: attributions and secondary copy
//! - **Paper (#F8F8F8)**: page background
//!
//! Styles live in the desktop app's global stylesheet; these components only
//! attach class names.

pub mod components;

pub use components::*;

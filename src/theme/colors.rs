//! Color constants for the reading theme.
//!
//! Mirrored as CSS custom properties in [`super::styles::GLOBAL_STYLES`].

#![allow(dead_code)]

// === INK (Text) ===
pub const INK: &str = "#4A4A4A";
pub const GRAPHITE: &str = "#7A7A7A";

// === PAPER (Backgrounds) ===
pub const PAPER: &str = "#F8F8F8";
pub const CARD: &str = "#FFFFFF";

// === PLUM (Accent) ===
pub const PLUM: &str = "#6B4E71";
pub const PLUM_DEEP: &str = "#5D4361";
pub const PLUM_SHADOW: &str = "rgba(107, 78, 113, 0.1)";

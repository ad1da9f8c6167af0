//! Reusable UI components
//!
//! All components use Noto Serif KR and the plum accent.

mod arrow;
mod button;

pub use arrow::*;
pub use button::*;

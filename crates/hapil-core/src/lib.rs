//! Hapil Core Library
//!
//! Quote data and navigation state behind the Hapil reading app.
//!
//! ## Overview
//!
//! Hapil shows one literary excerpt at a time, picked at random from a data
//! set bundled into the binary. The user moves between excerpts by clicking
//! arrows or swiping the card; every move is a fresh random pick, and the
//! direction only tells the view which way to animate.
//!
//! - [`QuoteStore`]: immutable, non-empty, ordered quote sequence
//! - [`NavigationController`]: the quote on screen plus a direction hint
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use hapil_core::{Direction, NavigationController, QuoteStore};
//!
//! let store = Arc::new(QuoteStore::load()?);
//! let mut nav = NavigationController::new(store);
//!
//! nav.advance(Direction::Next);
//! assert_eq!(nav.direction_hint(), 1);
//!
//! // A short drag does nothing.
//! assert!(nav.handle_swipe(40.0).is_none());
//! # Ok::<(), hapil_core::QuoteError>(())
//! ```

pub mod calendar;
pub mod error;
pub mod navigation;
pub mod quote;
pub mod store;

// Re-exports
pub use error::{QuoteError, QuoteResult};
pub use navigation::{Direction, NavigationController, NavigationState, SWIPE_THRESHOLD};
pub use quote::{QuoteId, QuoteRecord};
pub use store::{QuoteStore, BUNDLED_QUOTES};

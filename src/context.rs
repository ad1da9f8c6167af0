//! Quote store context for Hapil.
//!
//! The store is loaded once in `main` and handed to the launch builder as
//! context, so every component can read it with [`use_quote_store`].
//!
//! ## Usage
//!
//! ```ignore
//! let store = use_quote_store();
//! let nav = use_signal(move || NavigationController::new(store));
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use hapil_core::{NavigationController, QuoteStore};

/// Shared store type for context.
pub type SharedQuoteStore = Arc<QuoteStore>;

/// Get the seed for new navigation sessions (set via --seed).
pub fn get_session_seed() -> Option<u64> {
    crate::get_session_seed()
}

/// Hook to access the quote store from context.
pub fn use_quote_store() -> SharedQuoteStore {
    use_context::<SharedQuoteStore>()
}

/// Start a navigation session over `store`, seeded if --seed was given.
pub fn new_session(store: SharedQuoteStore) -> NavigationController {
    match get_session_seed() {
        Some(seed) => NavigationController::seeded(store, seed),
        None => NavigationController::new(store),
    }
}

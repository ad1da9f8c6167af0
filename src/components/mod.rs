//! UI Components for Hapil.

mod footer;
mod quote_card;

pub use footer::ReaderFooter;
pub use quote_card::{card_key, DragState, QuoteCard};

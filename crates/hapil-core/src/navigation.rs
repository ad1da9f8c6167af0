//! Navigation Controller - the quote currently on screen.
//!
//! Every operation picks a uniformly random quote from the store. The
//! requested direction never filters the pick: forward and back only set the
//! direction hint, which the view reads to decide which side the next card
//! slides in from.
//!
//! ## State machine
//!
//! ```text
//!   Displaying(current, hint) --initialize()-------> Displaying(random, 0)
//!   Displaying(current, hint) --show_random()------> Displaying(random, hint)
//!   Displaying(current, hint) --advance(d)---------> Displaying(random, d)
//!   Displaying(current, hint) --handle_swipe(|x|<=100)--> unchanged
//! ```

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::quote::QuoteRecord;
use crate::store::QuoteStore;

/// Horizontal drag distance (px) a release must exceed to count as a swipe.
pub const SWIPE_THRESHOLD: f64 = 100.0;

/// Direction of a navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Signed hint value: -1 for previous, +1 for next.
    pub fn sign(self) -> i8 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }

    /// Classify a drag release. Returns `None` when the offset does not
    /// strictly exceed [`SWIPE_THRESHOLD`] in either direction.
    pub fn from_swipe(offset_x: f64) -> Option<Self> {
        if offset_x > SWIPE_THRESHOLD {
            Some(Direction::Next)
        } else if offset_x < -SWIPE_THRESHOLD {
            Some(Direction::Previous)
        } else {
            None
        }
    }
}

/// Snapshot of what the view should render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub current: QuoteRecord,
    /// -1, 0 or +1
    pub direction_hint: i8,
}

/// Owns the displayed quote and the transition hint.
///
/// One controller lives for as long as the browsing screen is mounted.
pub struct NavigationController<R = StdRng> {
    store: Arc<QuoteStore>,
    current: usize,
    direction_hint: i8,
    rng: R,
}

impl NavigationController<StdRng> {
    /// Controller seeded from OS entropy, already initialized.
    pub fn new(store: Arc<QuoteStore>) -> Self {
        Self::with_rng(store, StdRng::from_os_rng())
    }

    /// Controller with a reproducible random sequence.
    pub fn seeded(store: Arc<QuoteStore>, seed: u64) -> Self {
        Self::with_rng(store, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NavigationController<R> {
    /// Controller over an explicit random source, already initialized.
    pub fn with_rng(store: Arc<QuoteStore>, rng: R) -> Self {
        let mut controller = Self {
            store,
            current: 0,
            direction_hint: 0,
            rng,
        };
        controller.initialize();
        controller
    }

    /// Pick a random quote and clear the direction hint.
    ///
    /// Safe to call again; it simply re-randomizes.
    pub fn initialize(&mut self) -> &QuoteRecord {
        self.direction_hint = 0;
        self.current = self.store.random_index(&mut self.rng);
        tracing::debug!(quote_id = self.current().id, "Navigation initialized");
        self.current()
    }

    /// Pick a random quote, possibly the one already shown. The hint is kept.
    pub fn show_random(&mut self) -> &QuoteRecord {
        self.current = self.store.random_index(&mut self.rng);
        tracing::debug!(quote_id = self.current().id, "Showing random quote");
        self.current()
    }

    /// Record `direction` as the hint, then pick a random quote.
    pub fn advance(&mut self, direction: Direction) -> &QuoteRecord {
        self.direction_hint = direction.sign();
        self.current = self.store.random_index(&mut self.rng);
        tracing::debug!(
            quote_id = self.current().id,
            direction = self.direction_hint,
            "Advanced"
        );
        self.current()
    }

    /// Handle a drag release at horizontal offset `offset_x`.
    ///
    /// Past the threshold this is [`advance`](Self::advance) in the drag
    /// direction; otherwise nothing changes and `None` is returned.
    pub fn handle_swipe(&mut self, offset_x: f64) -> Option<Direction> {
        match Direction::from_swipe(offset_x) {
            Some(direction) => {
                self.advance(direction);
                Some(direction)
            }
            None => {
                tracing::trace!(offset_x, "Swipe below threshold");
                None
            }
        }
    }

    pub fn current(&self) -> &QuoteRecord {
        &self.store.records()[self.current]
    }

    pub fn direction_hint(&self) -> i8 {
        self.direction_hint
    }

    pub fn state(&self) -> NavigationState {
        NavigationState {
            current: self.current().clone(),
            direction_hint: self.direction_hint,
        }
    }
}

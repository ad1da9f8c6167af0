//! Quote card and its horizontal drag tracking.
//!
//! The card follows the pointer while dragged. Only a real pointer-up ends
//! the drag: the offset goes to
//! [`hapil_core::NavigationController::handle_swipe`], and a short drag just
//! lets the card spring back to center through its CSS transition. A
//! cancelled pointer recenters without swiping.

use dioxus::prelude::*;
use hapil_core::QuoteRecord;

/// Pointer drag in progress on the card, in client pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    origin: Option<f64>,
    offset: f64,
}

impl DragState {
    pub fn begin(&mut self, x: f64) {
        self.origin = Some(x);
        self.offset = 0.0;
    }

    pub fn update(&mut self, x: f64) {
        if let Some(origin) = self.origin {
            self.offset = x - origin;
        }
    }

    /// End the drag and return its final offset, or `None` if no drag was
    /// in progress.
    pub fn release(&mut self) -> Option<f64> {
        let offset = self.origin.take().map(|_| self.offset);
        self.offset = 0.0;
        offset
    }

    /// Abandon the drag without reporting an offset.
    pub fn cancel(&mut self) {
        self.origin = None;
        self.offset = 0.0;
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Inline style that moves the card with the pointer.
    pub fn transform(&self) -> String {
        format!("transform: translateX({}px);", self.offset)
    }
}

/// Entrance animation for a card, from the navigation direction hint.
///
/// Moving forward slides the new card in from the right, moving back from
/// the left. No hint (first card, refresh) fades in place.
pub fn enter_class(direction_hint: i8) -> &'static str {
    match direction_hint.signum() {
        1 => "quote-card enter-from-right",
        -1 => "quote-card enter-from-left",
        _ => "quote-card enter-fade",
    }
}

/// Render key for a quote's card. A new key remounts the card, which replays
/// its entrance animation.
pub fn card_key(quote: &QuoteRecord) -> String {
    format!("quote-{}", quote.id)
}

/// Card showing one excerpt and its source.
#[component]
pub fn QuoteCard(
    quote: QuoteRecord,
    direction_hint: i8,
    drag: Signal<DragState>,
) -> Element {
    let dragging = drag.read().is_dragging();
    let class = if dragging {
        format!("{} dragging", enter_class(direction_hint))
    } else {
        enter_class(direction_hint).to_string()
    };
    let style = drag.read().transform();
    let mut drag = drag;

    rsx! {
        article {
            class: "{class}",
            style: "{style}",
            onpointerdown: move |evt: PointerEvent| {
                drag.write().begin(evt.client_coordinates().x);
            },
            p { class: "quote-text", "{quote.text}" }
            div { class: "quote-source", "{quote.source_line()}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_tracks_offset() {
        let mut drag = DragState::default();
        drag.begin(200.0);
        drag.update(340.0);
        assert!(drag.is_dragging());
        assert_eq!(drag.transform(), "transform: translateX(140px);");
        assert_eq!(drag.release(), Some(140.0));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_drag_left_is_negative() {
        let mut drag = DragState::default();
        drag.begin(300.0);
        drag.update(150.0);
        assert_eq!(drag.release(), Some(-150.0));
    }

    #[test]
    fn test_release_without_drag() {
        let mut drag = DragState::default();
        drag.update(500.0);
        assert_eq!(drag.release(), None);
        assert_eq!(drag.transform(), "transform: translateX(0px);");
    }

    #[test]
    fn test_release_recenters() {
        let mut drag = DragState::default();
        drag.begin(10.0);
        drag.update(60.0);
        drag.release();
        assert_eq!(drag, DragState::default());
    }

    #[test]
    fn test_cancel_recenters_without_offset() {
        let mut drag = DragState::default();
        drag.begin(100.0);
        drag.update(400.0);
        drag.cancel();
        assert!(!drag.is_dragging());
        assert_eq!(drag.release(), None);
        assert_eq!(drag.transform(), "transform: translateX(0px);");
    }

    #[test]
    fn test_drag_survives_leaving_the_stage() {
        // Moves far outside the card still belong to the same drag
        let mut drag = DragState::default();
        drag.begin(300.0);
        drag.update(20.0);
        drag.update(-150.0);
        assert!(drag.is_dragging());
        assert_eq!(drag.release(), Some(-450.0));
    }

    #[test]
    fn test_card_key_follows_quote_id() {
        let a = QuoteRecord::new(1, "a", "B", "A");
        let same = QuoteRecord::new(1, "changed", "B", "A");
        let b = QuoteRecord::new(2, "a", "B", "A");
        assert_eq!(card_key(&a), "quote-1");
        assert_eq!(card_key(&a), card_key(&same));
        assert_ne!(card_key(&a), card_key(&b));
    }

    #[test]
    fn test_enter_class() {
        assert_eq!(enter_class(1), "quote-card enter-from-right");
        assert_eq!(enter_class(-1), "quote-card enter-from-left");
        assert_eq!(enter_class(0), "quote-card enter-fade");
    }
}

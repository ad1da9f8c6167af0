//! Reader page - one excerpt at a time.
//!
//! Owns the navigation session for as long as the page is mounted. Arrows,
//! arrow keys and horizontal swipes step to another random excerpt; the
//! refresh button picks one without changing the slide direction.

use dioxus::prelude::*;
use hapil_core::calendar::MOTTO;
use hapil_core::{Direction, NavigationState};
use hapil_ui::{ArrowButton, Button, ButtonVariant};

use crate::components::{card_key, DragState, QuoteCard, ReaderFooter};
use crate::context::{new_session, use_quote_store};

/// Quote browsing screen.
#[component]
pub fn Reader() -> Element {
    let store = use_quote_store();
    let mut nav = use_signal(move || new_session(store));
    let mut drag = use_signal(DragState::default);

    let mut step = move |direction: Direction| {
        nav.write().advance(direction);
    };

    let mut release = move || {
        let offset = drag.write().release();
        if let Some(offset) = offset {
            nav.write().handle_swipe(offset);
        }
    };

    let on_keydown = move |evt: KeyboardEvent| {
        if let Some(direction) = key_direction(&evt.key()) {
            step(direction);
        }
    };

    let state = nav.read().state();

    rsx! {
        main {
            class: "reader",
            tabindex: "0",
            onkeydown: on_keydown,
            // Focus on open so the arrow keys work without a click first
            onmounted: move |evt: MountedEvent| async move {
                if let Err(e) = evt.set_focus(true).await {
                    tracing::debug!("Could not focus reader: {:?}", e);
                }
            },
            // Drags are tracked across the whole screen and end only on pointer-up
            onpointermove: move |evt: PointerEvent| {
                drag.write().update(evt.client_coordinates().x);
            },
            onpointerup: move |_| release(),
            onpointercancel: move |_| drag.write().cancel(),

            header { class: "reader-header",
                div {
                    class: "wordmark small",
                    role: "img",
                    "aria-label": "하필 로고",
                    "하필"
                }
                h1 { class: "reader-title", "{MOTTO}" }
            }

            div { class: "quote-stage",
                ArrowButton {
                    direction: Direction::Previous,
                    onclick: move |direction: Direction| step(direction),
                }

                {current_card(&state, drag)}

                ArrowButton {
                    direction: Direction::Next,
                    onclick: move |direction: Direction| step(direction),
                }
            }

            Button {
                variant: ButtonVariant::Refresh,
                onclick: move |_| {
                    nav.write().show_random();
                },
                "다른 문장 보기"
            }

            ReaderFooter { book: state.current.book.clone() }
        }
    }
}

/// The current quote's card as a keyed fragment, so a different quote
/// remounts the card instead of patching it in place.
fn current_card(state: &NavigationState, drag: Signal<DragState>) -> Element {
    let key = card_key(&state.current);
    let card = rsx! {
        QuoteCard {
            key: "{key}",
            quote: state.current.clone(),
            direction_hint: state.direction_hint,
            drag: drag,
        }
    };

    rsx! {
        {std::iter::once(card)}
    }
}

/// Arrow keys step like the on-screen arrows.
fn key_direction(key: &Key) -> Option<Direction> {
    match key {
        Key::ArrowLeft => Some(Direction::Previous),
        Key::ArrowRight => Some(Direction::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_directions() {
        assert_eq!(key_direction(&Key::ArrowLeft), Some(Direction::Previous));
        assert_eq!(key_direction(&Key::ArrowRight), Some(Direction::Next));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(key_direction(&Key::ArrowUp), None);
        assert_eq!(key_direction(&Key::Enter), None);
        assert_eq!(key_direction(&Key::Character(" ".to_string())), None);
    }
}

//! Arrow navigation buttons flanking the quote card.

use dioxus::prelude::*;
use hapil_core::Direction;

/// Chevron paths (24x24 viewBox)
const CHEVRON_LEFT: &str = "M15.41 7.41L14 6l-6 6 6 6 1.41-1.41L10.83 12z";
const CHEVRON_RIGHT: &str = "M10 6L8.59 7.41 13.17 12l-4.58 4.59L10 18l6-6z";

/// Presentation details of an arrow for a navigation direction.
pub trait ArrowStyle {
    fn side_class(&self) -> &'static str;
    fn chevron(&self) -> &'static str;
    fn aria_label(&self) -> &'static str;
}

impl ArrowStyle for Direction {
    fn side_class(&self) -> &'static str {
        match self {
            Direction::Previous => "nav-arrow left",
            Direction::Next => "nav-arrow right",
        }
    }

    fn chevron(&self) -> &'static str {
        match self {
            Direction::Previous => CHEVRON_LEFT,
            Direction::Next => CHEVRON_RIGHT,
        }
    }

    fn aria_label(&self) -> &'static str {
        match self {
            Direction::Previous => "이전 문장",
            Direction::Next => "다음 문장",
        }
    }
}

/// Icon button that requests a step in `direction`.
#[component]
pub fn ArrowButton(direction: Direction, onclick: EventHandler<Direction>) -> Element {
    rsx! {
        button {
            class: direction.side_class(),
            r#type: "button",
            "aria-label": direction.aria_label(),
            onclick: move |_| {
                tracing::trace!(?direction, "Arrow clicked");
                onclick.call(direction);
            },
            svg {
                class: "arrow-icon",
                view_box: "0 0 24 24",
                path { d: direction.chevron() }
            }
        }
    }
}

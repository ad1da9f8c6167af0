//! Landing page - Entry point to Hapil.
//!
//! Wordmark, a two-line invitation, and the start button. Children fade in
//! one after another.

use dioxus::prelude::*;
use hapil_ui::{Button, ButtonVariant};

use crate::app::Route;

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();

    let start = move || {
        tracing::info!("Starting reading session");
        navigator.push(Route::Reader {});
    };

    rsx! {
        main { class: "landing",
            div { class: "landing-stagger",
                div {
                    class: "wordmark stagger-item",
                    role: "img",
                    "aria-label": "하필 로고",
                    onclick: move |_| start(),
                    "하필"
                }

                p { class: "landing-description stagger-item",
                    "하루의 마지막, 잠들기 전"
                    br {}
                    "문학적 감성으로 채우는 필사의 시간"
                }

                div { class: "landing-action stagger-item",
                    Button {
                        variant: ButtonVariant::Start,
                        onclick: move |_| start(),
                        "시작하기"
                    }
                }
            }
        }
    }
}

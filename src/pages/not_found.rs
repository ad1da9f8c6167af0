//! Catch-all route
//!
//! Any path that is not a known screen is replaced with the landing page.

use dioxus::prelude::*;

use crate::app::Route;

/// Redirects unknown paths to the landing page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        tracing::debug!("Unknown route /{}, redirecting to landing", segments.join("/"));
        navigator.replace(Route::Landing {});
    });

    rsx! {
        div { class: "redirecting" }
    }
}

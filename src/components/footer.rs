//! Fixed footer under the reader: motto, current book, today's date.

use dioxus::prelude::*;
use hapil_core::calendar;

#[component]
pub fn ReaderFooter(book: String) -> Element {
    let line = calendar::footer_line(&book, &calendar::today());

    rsx! {
        footer { class: "reader-footer", "{line}" }
    }
}

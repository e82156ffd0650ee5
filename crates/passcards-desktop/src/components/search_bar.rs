//! Search bar component

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::PALETTE;

/// Filters the card list by name as the user types
#[component]
pub fn SearchBar() -> Element {
    let mut state = use_context::<AppState>();
    let colors = PALETTE;

    rsx! {
        div {
            class: "search-bar",
            style: "margin-bottom: 12px;",

            input {
                r#type: "text",
                placeholder: "Search by name...",
                value: "{state.search_term}",
                oninput: move |evt| {
                    state.search_term.set(evt.value());
                },
                style: "
                    width: 100%;
                    box-sizing: border-box;
                    padding: 8px 12px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    outline: none;
                ",
            }
        }
    }
}

//! Card list component

use dioxus::prelude::*;

use super::CardItem;
use crate::state::AppState;
use crate::theme::PALETTE;

/// Placeholder shown when nothing is listed.
pub fn empty_list_message(term: &str) -> String {
    if term.is_empty() {
        "No cards".to_string()
    } else {
        format!("No cards match \"{term}\"")
    }
}

#[component]
pub fn CardList() -> Element {
    let state = use_context::<AppState>();
    let filtered_cards = state.filtered_cards();
    let empty_message = empty_list_message(&(state.search_term)());
    let colors = PALETTE;

    rsx! {
        div {
            class: "card-list",
            style: "display: flex; flex-direction: column; gap: 8px;",

            if filtered_cards.is_empty() {
                div {
                    style: "
                        padding: 20px;
                        text-align: center;
                        color: {colors.text_muted};
                    ",
                    "{empty_message}"
                }
            } else {
                for card in filtered_cards {
                    {
                        let card_id = card.id.to_string();
                        rsx! {
                            CardItem { key: "{card_id}", card }
                        }
                    }
                }
            }
        }
    }
}

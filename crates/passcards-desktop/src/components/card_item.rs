//! A single password card

use dioxus::prelude::*;
use passcards_core::clipboard::SystemClipboard;
use passcards_core::{CardField, CardView, PasswordCard};

use super::new_card_form::input_type;
use crate::state::AppState;
use crate::theme::PALETTE;

/// Renders one card in read or edit mode. The view state lives here; the
/// record itself is owned by the store and arrives as a prop.
#[component]
pub fn CardItem(card: PasswordCard) -> Element {
    let mut state = use_context::<AppState>();
    let mut view = use_signal(CardView::new);
    let colors = PALETTE;

    let button_style = format!(
        "padding: 4px 10px; border: 1px solid {}; border-radius: 6px; background: {}; cursor: pointer;",
        colors.border, colors.bg_secondary
    );

    let copy_card = card.clone();
    let copy_password = move |_: MouseEvent| {
        let mut slot = state.clipboard.write();
        if slot.is_none() {
            match SystemClipboard::new() {
                Ok(clipboard) => *slot = Some(clipboard),
                Err(error) => {
                    tracing::error!("Clipboard unavailable: {}", error);
                    return;
                }
            }
        }
        if let Some(clipboard) = slot.as_mut() {
            match view.read().copy_password(&copy_card, clipboard) {
                Ok(()) => tracing::debug!(card = %copy_card.id, "Copied password"),
                Err(error) => tracing::error!(card = %copy_card.id, "Failed to copy password: {}", error),
            }
        }
    };

    let save = move |_: MouseEvent| {
        let Some(edited) = view.write().submit_edit() else {
            return;
        };
        let Some(sync) = (state.sync)() else {
            return;
        };
        spawn(async move {
            if let Ok(outcome) = sync.update(edited).await {
                tracing::debug!("Save finished: {:?}", outcome);
            }
        });
    };

    let delete_card = card.clone();
    let delete = move |_: MouseEvent| {
        let id = view.read().delete_target(&delete_card);
        let Some(sync) = (state.sync)() else {
            return;
        };
        spawn(async move {
            if let Err(error) = sync.delete(&id).await {
                tracing::debug!(card = %id, "Card was not deleted: {}", error);
            }
        });
    };

    let edit_card = card.clone();
    let editing = view.read().edit_buffer().cloned();
    let password = view.read().displayed_password(&card).to_string();
    let reveal_label = if view.read().is_revealed() { "Hide" } else { "Show" };

    rsx! {
        div {
            class: "card-item",
            style: "
                padding: 12px 16px;
                border: 1px solid {colors.border};
                border-radius: 8px;
                background: {colors.bg_primary};
            ",

            if let Some(buffer) = editing {
                div {
                    style: "display: flex; flex-direction: column; gap: 6px;",

                    for field in CardField::ALL {
                        {
                            let label = field.label();
                            let value = buffer.field(field).to_string();
                            rsx! {
                                input {
                                    key: "{label}",
                                    r#type: input_type(field),
                                    placeholder: label,
                                    value: "{value}",
                                    oninput: move |evt| {
                                        view.write().set_field(field, evt.value());
                                    },
                                    style: "
                                        padding: 6px 10px;
                                        border: 1px solid {colors.border};
                                        border-radius: 6px;
                                    ",
                                }
                            }
                        }
                    }

                    div {
                        style: "display: flex; gap: 6px;",
                        button { style: "{button_style}", onclick: save, "Save" }
                        button {
                            style: "{button_style}",
                            onclick: move |_| view.write().cancel_edit(),
                            "Cancel"
                        }
                    }
                }
            } else {
                div {
                    class: "card-name",
                    style: "font-weight: 600; margin-bottom: 4px;",
                    "{card.name}"
                }
                div { style: "color: {colors.accent};", "{card.url}" }
                div { "{card.username}" }
                div {
                    class: "card-password",
                    style: "font-family: monospace; margin: 4px 0 8px;",
                    "{password}"
                }

                div {
                    style: "display: flex; gap: 6px;",
                    button {
                        style: "{button_style}",
                        onclick: move |_| view.write().toggle_reveal(),
                        "{reveal_label}"
                    }
                    button { style: "{button_style}", onclick: copy_password, "Copy Password" }
                    button {
                        style: "{button_style}",
                        onclick: move |_| view.write().begin_edit(&edit_card),
                        "Edit"
                    }
                    button {
                        style: "{button_style} color: {colors.danger};",
                        onclick: delete,
                        "Delete"
                    }
                }
            }
        }
    }
}

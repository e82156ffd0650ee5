//! New card form component

use dioxus::prelude::*;
use passcards_core::{CardField, CreationForm};

use crate::state::AppState;
use crate::theme::PALETTE;

pub const fn input_type(field: CardField) -> &'static str {
    match field {
        CardField::Password => "password",
        _ => "text",
    }
}

/// Inputs for a new card; clears as soon as it is submitted.
#[component]
pub fn NewCardForm() -> Element {
    let state = use_context::<AppState>();
    let mut form = use_signal(CreationForm::new);
    let colors = PALETTE;

    let submit = move |_: MouseEvent| {
        let draft = form.write().submit();
        let Some(sync) = (state.sync)() else {
            tracing::warn!("Card service is not configured; dropping new card");
            return;
        };
        spawn(async move {
            if sync.create(&draft).await.is_err() {
                tracing::debug!("New card was not added");
            }
        });
    };

    rsx! {
        div {
            class: "new-card-form",
            style: "
                display: flex;
                flex-wrap: wrap;
                gap: 8px;
                padding: 12px;
                margin-bottom: 16px;
                border: 1px solid {colors.border};
                border-radius: 8px;
                background: {colors.bg_primary};
            ",

            for field in CardField::ALL {
                {
                    let label = field.label();
                    let value = form.read().field(field).to_string();
                    rsx! {
                        input {
                            key: "{label}",
                            r#type: input_type(field),
                            placeholder: label,
                            value: "{value}",
                            oninput: move |evt| form.write().set_field(field, evt.value()),
                            style: "
                                flex: 1 1 45%;
                                padding: 6px 10px;
                                border: 1px solid {colors.border};
                                border-radius: 6px;
                            ",
                        }
                    }
                }
            }

            button {
                onclick: submit,
                style: "
                    padding: 6px 14px;
                    border: none;
                    border-radius: 6px;
                    background: {colors.accent};
                    color: {colors.bg_primary};
                    cursor: pointer;
                ",
                "Add Card"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_password_field_is_masked() {
        assert_eq!(input_type(CardField::Password), "password");
        for field in [CardField::Name, CardField::Url, CardField::Username] {
            assert_eq!(input_type(field), "text");
        }
    }
}

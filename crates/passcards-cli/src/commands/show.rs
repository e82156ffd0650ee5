use passcards_core::{CardApi, CardView, PasswordCard, SyncLayer};

use crate::commands::common::{card_to_list_item, resolve_card};
use crate::error::CliError;

pub fn run_show<A: CardApi>(
    sync: &SyncLayer<A>,
    id: &str,
    reveal: bool,
    as_json: bool,
) -> Result<(), CliError> {
    let card = resolve_card(id, sync.store())?;
    let mut view = CardView::new();
    if reveal {
        view.reveal();
    }

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&card_to_list_item(&card, &view))?
        );
    } else {
        for line in render_card(&card, &view) {
            println!("{line}");
        }
    }
    Ok(())
}

pub fn render_card(card: &PasswordCard, view: &CardView) -> Vec<String> {
    vec![
        format!("ID:       {}", card.id),
        format!("Name:     {}", card.name),
        format!("URL:      {}", card.url),
        format!("Username: {}", card.username),
        format!("Password: {}", view.displayed_password(card)),
    ]
}
